mod cli;
mod output;
mod repo;
mod sanitize;
mod token;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use gitlab_api::{CreateGitLabIssue, CreateGitLabMergeRequest, GitLabClient};
use sanitize::sanitize_title;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        output::output_error(&e);
        return ExitCode::from(1);
    }

    ExitCode::SUCCESS
}

fn run(cli: Cli) -> Result<()> {
    let location = repo::detect()?;
    let private_token = token::load()?;

    let base_url = cli
        .url
        .clone()
        .unwrap_or_else(|| format!("https://{}/api/v4", location.host));
    let client = GitLabClient::new(&base_url, &private_token);

    let project = client
        .get_project(&location.project_path)
        .with_context(|| format!("Failed to resolve project '{}'", location.project_path))?;
    let current_user = client.current_user().context("Failed to authenticate")?;

    let title = sanitize_title(&cli.title);

    // -a NAME: use that user if found, otherwise leave unassigned.
    // No -a: assign to the authenticated user.
    let assignee_id = match &cli.assignee {
        Some(name) => client.find_project_user(project.id, name)?.map(|u| u.id),
        None => Some(current_user.id),
    };

    let request = CreateGitLabIssue {
        title: title.clone(),
        description: cli.description.clone(),
        issue_type: cli.issue_type.as_str().to_string(),
        assignee_ids: assignee_id.map(|id| vec![id]),
        labels: cli.label.clone().map(|label| vec![label]),
    };
    let issue = client
        .create_issue(project.id, &request)
        .context("Failed to create issue")?;
    output::output_created("Issue", &issue.web_url);

    if cli.mr {
        create_merge_request_for(&cli, &client, &project, issue.iid, &title, assignee_id)?;
    }

    Ok(())
}

/// Create a draft MR tied to the freshly created issue: a branch named
/// `{iid}_{title}` cut from the default branch, and an MR whose description
/// closes the issue on merge. An MR failure leaves the issue intact.
fn create_merge_request_for(
    cli: &Cli,
    client: &GitLabClient,
    project: &gitlab_api::GitLabProject,
    issue_iid: u64,
    title: &str,
    assignee_id: Option<u64>,
) -> Result<()> {
    let branch = format!("{}_{}", issue_iid, title);
    let target = project
        .default_branch
        .as_deref()
        .context("Project has no default branch")?;

    client
        .create_branch(project.id, &branch, target)
        .with_context(|| format!("Failed to create branch '{}'", branch))?;

    let reviewer_ids = match &cli.reviewer {
        Some(name) => client
            .find_project_user(project.id, name)?
            .map(|u| vec![u.id])
            .unwrap_or_default(),
        None => Vec::new(),
    };

    let request = CreateGitLabMergeRequest {
        source_branch: branch.clone(),
        target_branch: target.to_string(),
        title: format!("Draft: {}", branch),
        description: format!("Closes #{}", issue_iid),
        assignee_id,
        reviewer_ids,
    };
    let mr = client
        .create_merge_request(project.id, &request)
        .context("Failed to create merge request")?;
    output::output_created("Merge request", &mr.web_url);

    Ok(())
}
