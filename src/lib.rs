//! Default directory paths for new git worktrees.
//!
//! Given whatever reference a user picked (local branch, fully-qualified ref,
//! remote-tracking branch, or commit id), [`default_worktree_path`] proposes a
//! directory for a worktree checked out at it, without touching the
//! filesystem:
//!
//! ```
//! use wtpath::{default_worktree_path, sanitize_branch_name};
//!
//! let remotes = ["origin"];
//! assert_eq!(sanitize_branch_name("refs/remotes/origin/fix/login", &remotes), "fix/login");
//!
//! let path = default_worktree_path("origin/fix/login", &remotes, "");
//! assert!(path.ends_with(std::path::MAIN_SEPARATOR));
//! ```
//!
//! Remote names come from the caller; [`remotes::RemoteNameCache`] keeps them
//! around between calls and [`git::GitCommand`] can supply them.

pub mod git;
pub mod logging;
pub mod refname;
pub mod remotes;
pub mod settings;
pub mod worktree_path;

pub use refname::{sanitize_branch_name, RefShape};
pub use worktree_path::default_worktree_path;

/// Version string including dev build info (e.g. "0.3.0 (dev abc1234)").
pub const VERSION_DISPLAY: &str = env!("WTPATH_VERSION_DISPLAY");
