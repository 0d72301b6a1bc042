use serde::{Deserialize, Serialize};

use crate::models::GitLabUser;

/// GitLab issue as returned by the API
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GitLabIssue {
    pub id: u64,
    pub iid: u64,
    pub project_id: u64,
    pub title: String,
    pub description: Option<String>,
    pub state: String,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub assignees: Vec<GitLabUser>,
    pub web_url: String,
}

/// Request to create a GitLab issue
#[derive(Debug, Clone, Serialize)]
pub struct CreateGitLabIssue {
    pub title: String,
    pub description: String,
    pub issue_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_ids: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
}
