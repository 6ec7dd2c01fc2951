//! Gitoxide-based implementations of git operations.
//!
//! Each function provides a native Rust alternative to a git subprocess call.
//! These are called from `GitCommand` methods when
//! `wtpath.experimental.gitoxide` is enabled.

use anyhow::{Context, Result};
use gix::Repository;

/// gitoxide equivalent of `git rev-parse --git-dir` (success = inside a repo)
pub fn is_inside_git_repo() -> Result<bool> {
    let cwd = std::env::current_dir().context("Failed to get current working directory")?;
    Ok(gix::discover(&cwd).is_ok())
}

/// gitoxide equivalent of `git symbolic-ref --short HEAD`
pub fn symbolic_ref_short_head(repo: &Repository) -> Result<String> {
    // `head_name` also names the branch of an unborn HEAD, like the CLI does.
    match repo.head_name().context("Failed to read HEAD")? {
        Some(name) => Ok(name.shorten().to_string()),
        None => anyhow::bail!("HEAD is detached"),
    }
}

/// gitoxide equivalent of `git rev-parse --verify <rev>`
pub fn rev_parse(repo: &Repository, rev: &str) -> Result<String> {
    let id = repo
        .rev_parse_single(rev)
        .with_context(|| format!("Failed to resolve revision '{rev}'"))?;
    Ok(id.detach().to_string())
}

/// gitoxide equivalent of `git config --get <key>`
pub fn config_get(repo: &Repository, key: &str) -> Result<Option<String>> {
    let config = repo.config_snapshot();
    Ok(config.string(key).map(|v| v.to_string()))
}

/// gitoxide equivalent of `git config --global --get <key>`
pub fn config_get_global(key: &str) -> Result<Option<String>> {
    // Reads ~/.gitconfig and the XDG config, no repository needed.
    let config = gix::config::File::from_globals().context("Failed to read global git config")?;
    Ok(config.string(key).map(|v| v.to_string()))
}

/// gitoxide equivalent of `git remote`
pub fn remote_list(repo: &Repository) -> Result<Vec<String>> {
    Ok(repo
        .remote_names()
        .iter()
        .map(|name| name.to_string())
        .collect())
}
