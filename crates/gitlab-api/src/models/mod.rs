mod branch;
mod issue;
mod merge_request;
mod project;
mod user;

pub use branch::{CreateGitLabBranch, GitLabBranch};
pub use issue::{CreateGitLabIssue, GitLabIssue};
pub use merge_request::{CreateGitLabMergeRequest, GitLabMergeRequest};
pub use project::GitLabProject;
pub use user::GitLabUser;
