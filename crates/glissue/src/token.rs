use anyhow::{bail, Context, Result};
use directories::BaseDirs;
use std::path::PathBuf;

const TOKEN_FILE: &str = ".gitlab-token";

/// Path to the token file in the user's home directory
pub fn token_path() -> Result<PathBuf> {
    let base_dirs = BaseDirs::new().context("Could not determine home directory")?;
    Ok(base_dirs.home_dir().join(TOKEN_FILE))
}

/// Read the private token from `~/.gitlab-token`.
///
/// Fails before any network call if the file is missing.
pub fn load() -> Result<String> {
    let path = token_path()?;
    if !path.exists() {
        bail!("Missing ~/.gitlab-token file");
    }

    let token = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let token = token.trim();
    if token.is_empty() {
        bail!("~/.gitlab-token is empty");
    }
    Ok(token.to_string())
}
