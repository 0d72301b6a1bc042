use serde::{Deserialize, Serialize};

/// GitLab merge request as returned by the API
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GitLabMergeRequest {
    pub id: u64,
    pub iid: u64,
    pub project_id: u64,
    pub title: String,
    pub state: String,
    pub source_branch: String,
    pub target_branch: String,
    pub web_url: String,
}

/// Request to create a GitLab merge request
#[derive(Debug, Clone, Serialize)]
pub struct CreateGitLabMergeRequest {
    pub source_branch: String,
    pub target_branch: String,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<u64>,
    pub reviewer_ids: Vec<u64>,
}
