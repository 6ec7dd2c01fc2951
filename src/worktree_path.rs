//! Default worktree path derivation.
//!
//! Combines a sanitized reference with the configured parent directory into a
//! directory path. Purely lexical: nothing here touches the filesystem, so the
//! returned path may or may not exist.

use crate::refname::sanitize_branch_name;
use std::path::{Component, Path, PathBuf, MAIN_SEPARATOR};

/// Parent directory used when none is configured.
pub const DEFAULT_PARENT_DIR: &str = ".";

/// Compute the default worktree directory for `reference`.
///
/// The reference is sanitized against `known_remotes`, joined onto
/// `parent_dir` (or [`DEFAULT_PARENT_DIR`] when empty), lexically cleaned and
/// terminated with exactly one platform separator.
///
/// ```
/// use wtpath::default_worktree_path;
///
/// let path = default_worktree_path("origin/feature/x", &["origin"], ".worktrees");
/// assert_eq!(path, format!(".worktrees{0}feature{0}x{0}", std::path::MAIN_SEPARATOR));
/// ```
pub fn default_worktree_path<S: AsRef<str>>(
    reference: &str,
    known_remotes: &[S],
    parent_dir: &str,
) -> String {
    let branch = sanitize_branch_name(reference, known_remotes);
    let parent = effective_parent_dir(parent_dir);

    let mut path = clean_join(parent, &branch).to_string_lossy().into_owned();
    if !path.ends_with(MAIN_SEPARATOR) {
        path.push(MAIN_SEPARATOR);
    }
    path
}

/// The parent directory actually used for a configured value.
pub fn effective_parent_dir(parent_dir: &str) -> &str {
    if parent_dir.is_empty() {
        DEFAULT_PARENT_DIR
    } else {
        parent_dir
    }
}

/// Join `child` onto `parent` and normalize the result without touching disk.
///
/// `/` in `child` is a separator on every platform; `\` only where the host
/// treats it as one. Empty and `.` segments are dropped, `..` removes the
/// preceding normal segment when there is one, and `..` directly under the
/// root is discarded. A result with no segments at all is `.`.
///
/// `child` is always treated as relative to `parent`, even if it starts with
/// a separator.
pub fn clean_join(parent: &str, child: &str) -> PathBuf {
    let child_components = Path::new(child)
        .components()
        .filter(|c| !matches!(c, Component::Prefix(_) | Component::RootDir));

    let mut out: Vec<Component<'_>> = Vec::new();
    for component in Path::new(parent).components().chain(child_components) {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) => {}
                _ => out.push(component),
            },
            other => out.push(other),
        }
    }

    if out.is_empty() {
        return PathBuf::from(DEFAULT_PARENT_DIR);
    }
    out.iter().collect()
}
