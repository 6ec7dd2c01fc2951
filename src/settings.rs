//! Git config-based settings for wtpath.
//!
//! Settings are loaded from git's layered config system (local → global)
//! with built-in defaults as fallback.
//!
//! # Config Keys
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `wtpath.worktreeParentDir` | `""` (current directory) | Directory new worktrees are placed under |
//! | `wtpath.experimental.gitoxide` | `false` | Use gitoxide instead of the git CLI |
//!
//! # Example
//!
//! ```bash
//! # Keep worktrees in a hidden directory inside the repository
//! git config wtpath.worktreeParentDir .worktrees
//!
//! # Place worktrees next to the repository, for every repository
//! git config --global wtpath.worktreeParentDir ../worktrees
//! ```

use crate::git::GitCommand;
use anyhow::Result;

/// Default values for settings.
pub mod defaults {
    /// Default value for worktreeParentDir. Empty means the current directory.
    pub const WORKTREE_PARENT_DIR: &str = "";

    /// Default value for experimental.gitoxide setting.
    pub const GITOXIDE: bool = false;
}

/// Git config keys for wtpath settings.
pub mod keys {
    /// Config key for worktreeParentDir setting.
    pub const WORKTREE_PARENT_DIR: &str = "wtpath.worktreeParentDir";

    /// Config key for experimental.gitoxide setting.
    pub const GITOXIDE: &str = "wtpath.experimental.gitoxide";
}

/// User-configurable settings.
///
/// Settings are loaded from git config with the following priority:
/// 1. Repository-local config (`git config wtpath.x`)
/// 2. Global config (`git config --global wtpath.x`)
/// 3. Built-in defaults
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WtpathSettings {
    /// Directory new worktrees are placed under.
    pub worktree_parent_dir: String,

    /// Use the gitoxide backend for git operations.
    pub use_gitoxide: bool,
}

impl Default for WtpathSettings {
    fn default() -> Self {
        Self {
            worktree_parent_dir: defaults::WORKTREE_PARENT_DIR.to_string(),
            use_gitoxide: defaults::GITOXIDE,
        }
    }
}

impl WtpathSettings {
    /// Load settings from git config (local + global).
    ///
    /// Use this in commands that run inside a git repository.
    pub fn load() -> Result<Self> {
        let git = GitCommand::new(true);
        Self::load_with(|key| git.config_get(key))
    }

    /// Load settings from global git config only.
    ///
    /// Use this outside of a repository, where local config does not exist.
    pub fn load_global() -> Result<Self> {
        let git = GitCommand::new(true);
        Self::load_with(|key| git.config_get_global(key))
    }

    fn load_with<F>(mut get: F) -> Result<Self>
    where
        F: FnMut(&str) -> Result<Option<String>>,
    {
        let mut settings = Self::default();

        if let Some(value) = get(keys::WORKTREE_PARENT_DIR)? {
            settings.worktree_parent_dir = value;
        }

        if let Some(value) = get(keys::GITOXIDE)? {
            settings.use_gitoxide = parse_bool(&value).unwrap_or_else(|| {
                crate::log_warning!(
                    "Ignoring invalid value '{value}' for {}, using {}",
                    keys::GITOXIDE,
                    defaults::GITOXIDE
                );
                defaults::GITOXIDE
            });
        }

        Ok(settings)
    }
}

/// Parse a git config boolean value.
///
/// Git accepts various boolean representations:
/// - true: `true`, `yes`, `on`, `1`
/// - false: `false`, `no`, `off`, `0`
///
/// Returns `None` for anything else.
fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}
