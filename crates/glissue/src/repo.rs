use anyhow::{bail, Context, Result};
use std::process::Command;

/// Host and project path derived from the `origin` remote
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoLocation {
    pub host: String,
    pub project_path: String,
}

/// Inspect the current working directory and derive the GitLab host and
/// project path from the `origin` remote.
pub fn detect() -> Result<RepoLocation> {
    let inside = Command::new("git")
        .args(["rev-parse", "--is-inside-work-tree"])
        .output();

    match inside {
        Ok(output) if output.status.success() => {}
        _ => bail!("This is not a git repository"),
    }

    let output = Command::new("git")
        .args(["remote", "get-url", "origin"])
        .output()
        .context("Failed to run git")?;
    if !output.status.success() {
        bail!("No 'origin' remote configured");
    }

    let remote_url = String::from_utf8(output.stdout)
        .context("Remote URL is not valid UTF-8")?
        .trim()
        .to_string();

    parse_remote_url(&remote_url)
}

/// Parse an SSH (`user@host:group/project.git`) or HTTP(S)
/// (`https://host/group/project.git`) remote URL.
pub fn parse_remote_url(remote_url: &str) -> Result<RepoLocation> {
    if remote_url.starts_with("git@") {
        let (user_host, path) = remote_url
            .split_once(':')
            .context("Unsupported remote URL format")?;
        let (_, host) = user_host
            .split_once('@')
            .context("Unsupported remote URL format")?;
        Ok(RepoLocation {
            host: host.to_string(),
            project_path: strip_git_suffix(path),
        })
    } else if remote_url.starts_with("http://") || remote_url.starts_with("https://") {
        let parts: Vec<&str> = remote_url.split('/').collect();
        if parts.len() < 4 || parts[2].is_empty() {
            bail!("Unsupported remote URL format: {}", remote_url);
        }
        Ok(RepoLocation {
            host: parts[2].to_string(),
            project_path: strip_git_suffix(&parts[3..].join("/")),
        })
    } else {
        bail!("Unsupported remote URL format: {}", remote_url);
    }
}

fn strip_git_suffix(path: &str) -> String {
    path.strip_suffix(".git").unwrap_or(path).to_string()
}
