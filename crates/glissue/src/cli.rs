use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "glissue",
    version,
    about = "Create a GitLab issue (and optionally a draft merge request) from the current repository"
)]
pub struct Cli {
    /// Title of the issue
    #[arg(long, short = 't')]
    pub title: String,

    /// Description of the issue
    #[arg(long, short = 'd', default_value = "")]
    pub description: String,

    /// Username to assign the issue to (defaults to the authenticated user)
    #[arg(long, short = 'a')]
    pub assignee: Option<String>,

    /// Username to add as merge request reviewer
    #[arg(long, short = 'r')]
    pub reviewer: Option<String>,

    /// Type of issue
    #[arg(long = "type", value_enum, default_value_t = IssueType::Issue)]
    pub issue_type: IssueType,

    /// Label to add to the issue
    #[arg(long, short = 'l')]
    pub label: Option<String>,

    /// Also create a draft merge request linked to the issue
    #[arg(long = "mr", short = 'm')]
    pub mr: bool,

    /// API base URL (overrides the one derived from the origin remote)
    #[arg(long, env = "GITLAB_URL", hide = true)]
    pub url: Option<String>,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IssueType {
    /// Incident report
    Incident,
    /// Task
    Task,
    /// Regular issue
    #[default]
    Issue,
}

impl IssueType {
    pub fn as_str(self) -> &'static str {
        match self {
            IssueType::Incident => "incident",
            IssueType::Task => "task",
            IssueType::Issue => "issue",
        }
    }
}
