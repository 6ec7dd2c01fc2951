use super::oxide;
use super::GitCommand;
use anyhow::{Context, Result};
use std::process::{Command, Stdio};

impl GitCommand {
    /// Get the short name of the current branch
    pub fn symbolic_ref_short_head(&self) -> Result<String> {
        if self.use_gitoxide {
            return oxide::symbolic_ref_short_head(&self.gix_repo()?);
        }
        let output = Command::new("git")
            .args(["symbolic-ref", "--short", "HEAD"])
            .stderr(Stdio::null())
            .output()
            .context("Failed to execute git symbolic-ref command")?;

        if !output.status.success() {
            anyhow::bail!("HEAD is detached or unborn");
        }

        String::from_utf8(output.stdout)
            .context("Failed to parse git symbolic-ref output")
            .map(|s| s.trim().to_string())
    }

    /// Resolve a revision to its full commit hash.
    pub fn rev_parse(&self, rev: &str) -> Result<String> {
        if self.use_gitoxide {
            return oxide::rev_parse(&self.gix_repo()?, rev);
        }
        let output = Command::new("git")
            .args(["rev-parse", "--verify", rev])
            .output()
            .context("Failed to execute git rev-parse command")?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!("Git rev-parse failed: {}", stderr);
        }

        let stdout =
            String::from_utf8(output.stdout).context("Failed to parse git rev-parse output")?;
        Ok(stdout.trim().to_string())
    }

    /// Check if current directory is inside any Git repository (work tree or bare)
    pub fn is_inside_git_repo(&self) -> Result<bool> {
        if self.use_gitoxide {
            return oxide::is_inside_git_repo();
        }
        let output = Command::new("git")
            .args(["rev-parse", "--git-dir"])
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .context("Failed to execute git rev-parse command")?;

        Ok(output.success())
    }

    /// The reference new worktrees should be based on when none is given:
    /// the current branch, or the HEAD commit when detached.
    pub fn current_reference(&self) -> Result<String> {
        match self.symbolic_ref_short_head() {
            Ok(branch) if !branch.is_empty() => Ok(branch),
            _ => self
                .rev_parse("HEAD")
                .context("Could not determine the current branch or commit"),
        }
    }
}
