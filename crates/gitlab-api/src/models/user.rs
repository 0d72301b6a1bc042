use serde::{Deserialize, Serialize};

/// GitLab user (assignee, reviewer, or the authenticated user)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GitLabUser {
    pub id: u64,
    pub username: String,
    #[serde(default)]
    pub name: String,
}
