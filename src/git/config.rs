use super::oxide;
use super::GitCommand;
use anyhow::{Context, Result};
use std::process::{Command, Output};

impl GitCommand {
    /// Get a git config value from the current repository (respects local + global config)
    pub fn config_get(&self, key: &str) -> Result<Option<String>> {
        if self.use_gitoxide {
            return oxide::config_get(&self.gix_repo()?, key);
        }
        let output = Command::new("git")
            .args(["config", "--get", key])
            .output()
            .context("Failed to execute git config command")?;

        config_value(output)
    }

    /// Get a git config value from global config only
    pub fn config_get_global(&self, key: &str) -> Result<Option<String>> {
        if self.use_gitoxide {
            return oxide::config_get_global(key);
        }
        let output = Command::new("git")
            .args(["config", "--global", "--get", key])
            .output()
            .context("Failed to execute git config command")?;

        config_value(output)
    }
}

fn config_value(output: Output) -> Result<Option<String>> {
    if output.status.success() {
        let value = String::from_utf8(output.stdout)
            .context("Failed to parse git config output")?
            .trim()
            .to_string();
        Ok(Some(value))
    } else {
        // Exit code 1 means the key was not found, which is not an error
        Ok(None)
    }
}
