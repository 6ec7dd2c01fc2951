use super::oxide;
use super::GitCommand;
use anyhow::{Context, Result};
use std::process::Command;

impl GitCommand {
    /// List all configured remotes.
    pub fn remote_list(&self) -> Result<Vec<String>> {
        if self.use_gitoxide {
            return oxide::remote_list(&self.gix_repo()?);
        }
        let output = Command::new("git")
            .args(["remote"])
            .output()
            .context("Failed to execute git remote command")?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!("Git remote failed: {}", stderr);
        }

        let stdout =
            String::from_utf8(output.stdout).context("Failed to parse git remote output")?;

        Ok(parse_remote_list(&stdout))
    }
}

fn parse_remote_list(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
