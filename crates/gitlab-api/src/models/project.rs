use serde::{Deserialize, Serialize};

/// GitLab project
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GitLabProject {
    pub id: u64,
    pub name: String,
    pub path_with_namespace: Option<String>,
    /// Absent on empty repositories with no branches yet.
    pub default_branch: Option<String>,
    pub web_url: Option<String>,
}
