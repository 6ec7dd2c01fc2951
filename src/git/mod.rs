use crate::remotes::RemoteSource;
use anyhow::{Context, Result};
use std::sync::{Once, OnceLock};

mod config;
pub(crate) mod oxide;
mod refs;
mod remote;

static GITOXIDE_NOTICE: Once = Once::new();

/// Thin wrapper over the git CLI, with an optional gitoxide backend.
pub struct GitCommand {
    pub(crate) quiet: bool,
    pub(crate) use_gitoxide: bool,
    pub(crate) gix_repo: OnceLock<gix::ThreadSafeRepository>,
}

impl GitCommand {
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            use_gitoxide: false,
            gix_repo: OnceLock::new(),
        }
    }

    pub fn with_gitoxide(mut self, enabled: bool) -> Self {
        self.use_gitoxide = enabled;
        if enabled && !self.quiet {
            GITOXIDE_NOTICE.call_once(|| {
                eprintln!("[experimental] Using gitoxide backend for git operations");
            });
        }
        self
    }

    /// Lazily discover and open the git repository via gitoxide.
    /// Returns a thread-local Repository handle.
    pub(crate) fn gix_repo(&self) -> Result<gix::Repository> {
        if let Some(ts) = self.gix_repo.get() {
            return Ok(ts.to_thread_local());
        }
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;
        let ts = gix::ThreadSafeRepository::discover(&cwd)
            .context("Failed to discover git repository via gitoxide")?;
        // Another thread may have won the race; either handle is fine.
        let _ = self.gix_repo.set(ts);
        self.gix_repo
            .get()
            .map(|ts| ts.to_thread_local())
            .context("Failed to open git repository via gitoxide")
    }
}

impl RemoteSource for GitCommand {
    fn remote_names(&self) -> Result<Vec<String>> {
        self.remote_list()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_git_command_new() {
        let git = GitCommand::new(true);
        assert!(git.quiet);
        assert!(!git.use_gitoxide);

        let git = GitCommand::new(false);
        assert!(!git.quiet);
        assert!(!git.use_gitoxide);
    }

    #[test]
    fn test_git_command_with_gitoxide() {
        let git = GitCommand::new(true).with_gitoxide(true);
        assert!(git.quiet);
        assert!(git.use_gitoxide);

        let git = GitCommand::new(true).with_gitoxide(false);
        assert!(!git.use_gitoxide);
    }
}
