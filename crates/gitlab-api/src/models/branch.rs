use serde::{Deserialize, Serialize};

/// GitLab repository branch
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GitLabBranch {
    pub name: String,
    #[serde(default)]
    pub web_url: Option<String>,
}

/// Request to create a repository branch
#[derive(Debug, Clone, Serialize)]
pub struct CreateGitLabBranch {
    pub branch: String,
    #[serde(rename = "ref")]
    pub git_ref: String,
}
