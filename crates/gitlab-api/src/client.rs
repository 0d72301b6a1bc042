use std::time::Duration;
use ureq::Agent;

use crate::error::{GitLabError, Result};
use crate::models::*;

/// GitLab REST API client
pub struct GitLabClient {
    agent: Agent,
    base_url: String,
    token: String,
}

impl GitLabClient {
    /// Create a new GitLab client.
    ///
    /// `base_url` should include the API version path, e.g. `https://gitlab.com/api/v4`.
    pub fn new(base_url: &str, token: &str) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(30)))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        }
    }

    /// Build a URL scoped to a project by numeric id.
    fn project_url(&self, project_id: u64, path: &str) -> String {
        format!("{}/projects/{}{}", self.base_url, project_id, path)
    }

    /// Check response status and return error if not successful
    fn check_response(
        &self,
        mut response: ureq::http::Response<ureq::Body>,
    ) -> Result<ureq::http::Response<ureq::Body>> {
        let status = response.status().as_u16();

        if (200..300).contains(&status) {
            return Ok(response);
        }

        let body = response
            .body_mut()
            .read_to_string()
            .unwrap_or_else(|_| String::new());

        // GitLab can return {"message": "..."}, {"error": "..."} or
        // {"error_description": "..."} depending on the endpoint
        let message = if let Ok(error_value) = serde_json::from_str::<serde_json::Value>(&body) {
            ["message", "error", "error_description"]
                .iter()
                .find_map(|key| {
                    error_value.get(key).map(|v| match v.as_str() {
                        Some(s) => s.to_string(),
                        None => v.to_string(),
                    })
                })
                .unwrap_or_else(|| {
                    if body.is_empty() {
                        format!("HTTP {}", status)
                    } else {
                        body
                    }
                })
        } else if body.is_empty() {
            format!("HTTP {}", status)
        } else {
            body
        };

        if status == 401 {
            Err(GitLabError::Unauthorized)
        } else {
            Err(GitLabError::Api { status, message })
        }
    }

    /// Handle transport-level errors
    fn handle_error(&self, err: ureq::Error) -> GitLabError {
        GitLabError::Http(err)
    }

    // ==================== Project Operations ====================

    /// Get a project by its full namespace path (e.g. `group/project`)
    pub fn get_project(&self, path: &str) -> Result<GitLabProject> {
        let url = format!("{}/projects/{}", self.base_url, urlencoding::encode(path));

        let response = self
            .agent
            .get(&url)
            .header("PRIVATE-TOKEN", &self.token)
            .header("Accept", "application/json")
            .call()
            .map_err(|e| self.handle_error(e))?;

        let mut response = match self.check_response(response) {
            Ok(r) => r,
            Err(GitLabError::Api { status: 404, .. }) => {
                return Err(GitLabError::ProjectNotFound(path.to_string()))
            }
            Err(e) => return Err(e),
        };
        let project: GitLabProject = response.body_mut().read_json()?;
        Ok(project)
    }

    // ==================== User Operations ====================

    /// Get the user the token authenticates as
    pub fn current_user(&self) -> Result<GitLabUser> {
        let url = format!("{}/user", self.base_url);

        let response = self
            .agent
            .get(&url)
            .header("PRIVATE-TOKEN", &self.token)
            .header("Accept", "application/json")
            .call()
            .map_err(|e| self.handle_error(e))?;

        let mut response = self.check_response(response)?;
        let user: GitLabUser = response.body_mut().read_json()?;
        Ok(user)
    }

    /// Find a project member by exact username. No match is `Ok(None)`.
    pub fn find_project_user(
        &self,
        project_id: u64,
        username: &str,
    ) -> Result<Option<GitLabUser>> {
        let url = self.project_url(
            project_id,
            &format!("/users?search={}", urlencoding::encode(username)),
        );

        let response = self
            .agent
            .get(&url)
            .header("PRIVATE-TOKEN", &self.token)
            .header("Accept", "application/json")
            .call()
            .map_err(|e| self.handle_error(e))?;

        let mut response = self.check_response(response)?;
        let users: Vec<GitLabUser> = response.body_mut().read_json()?;
        Ok(users.into_iter().find(|u| u.username == username))
    }

    // ==================== Issue Operations ====================

    /// Create a new issue
    pub fn create_issue(&self, project_id: u64, issue: &CreateGitLabIssue) -> Result<GitLabIssue> {
        let url = self.project_url(project_id, "/issues");

        let response = self
            .agent
            .post(&url)
            .header("PRIVATE-TOKEN", &self.token)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .send_json(issue)
            .map_err(|e| self.handle_error(e))?;

        let mut response = self.check_response(response)?;
        let created: GitLabIssue = response.body_mut().read_json()?;
        Ok(created)
    }

    // ==================== Branch Operations ====================

    /// Create a repository branch from `git_ref`
    pub fn create_branch(
        &self,
        project_id: u64,
        branch: &str,
        git_ref: &str,
    ) -> Result<GitLabBranch> {
        let url = self.project_url(project_id, "/repository/branches");
        let request = CreateGitLabBranch {
            branch: branch.to_string(),
            git_ref: git_ref.to_string(),
        };

        let response = self
            .agent
            .post(&url)
            .header("PRIVATE-TOKEN", &self.token)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .send_json(&request)
            .map_err(|e| self.handle_error(e))?;

        let mut response = self.check_response(response)?;
        let created: GitLabBranch = response.body_mut().read_json()?;
        Ok(created)
    }

    // ==================== Merge Request Operations ====================

    /// Create a merge request
    pub fn create_merge_request(
        &self,
        project_id: u64,
        mr: &CreateGitLabMergeRequest,
    ) -> Result<GitLabMergeRequest> {
        let url = self.project_url(project_id, "/merge_requests");

        let response = self
            .agent
            .post(&url)
            .header("PRIVATE-TOKEN", &self.token)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .send_json(mr)
            .map_err(|e| self.handle_error(e))?;

        let mut response = self.check_response(response)?;
        let created: GitLabMergeRequest = response.body_mut().read_json()?;
        Ok(created)
    }
}
