//! Reference name sanitization.
//!
//! Turns whatever the user pointed at (a local branch, a fully-qualified ref,
//! a remote-tracking branch, or an opaque commit id) into a branch-like name
//! that can be used as a directory component.
//!
//! | Input | Shape | Result |
//! |-------|-------|--------|
//! | `refs/heads/feature/x` | [`RefShape::LocalRef`] | `feature/x` |
//! | `refs/remotes/origin/feature/x` | [`RefShape::RemoteRef`] | `feature/x` |
//! | `origin/feature/x` (origin known) | [`RefShape::InformalRemote`] | `feature/x` |
//! | `upstream/feature/x` (unknown) | [`RefShape::Opaque`] | `upstream/feature/x` |
//! | `abc123` | [`RefShape::Opaque`] | `abc123` |

/// Ref namespace for local branches.
pub const LOCAL_BRANCH_PREFIX: &str = "refs/heads/";

/// Ref namespace for remote-tracking branches.
pub const REMOTE_BRANCH_PREFIX: &str = "refs/remotes/";

/// The shape a reference string was recognized as.
///
/// Classification is first-match-wins in declaration order. Each variant
/// borrows the part of the input that survives sanitization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefShape<'a> {
    /// `refs/heads/<branch>`. Always local, remotes are never consulted.
    LocalRef { branch: &'a str },
    /// `refs/remotes/<remote>/<branch>`. The segment after the prefix is a
    /// remote name by git's own convention, known or not.
    RemoteRef { remote: &'a str, branch: &'a str },
    /// `<remote>/<branch>` where `<remote>` is a configured remote.
    InformalRemote { remote: &'a str, branch: &'a str },
    /// Anything else: plain branches, commit ids, unknown prefixes, "".
    Opaque(&'a str),
}

impl<'a> RefShape<'a> {
    /// Classify `reference` against the given set of known remote names.
    pub fn classify<S: AsRef<str>>(reference: &'a str, known_remotes: &[S]) -> Self {
        if let Some(branch) = reference.strip_prefix(LOCAL_BRANCH_PREFIX) {
            return Self::LocalRef { branch };
        }

        if let Some(rest) = reference.strip_prefix(REMOTE_BRANCH_PREFIX) {
            return match rest.split_once('/') {
                Some((remote, branch)) => Self::RemoteRef { remote, branch },
                // `refs/remotes/<x>` with nothing after it: no branch segment
                // to keep, so keep what we have.
                None => Self::RemoteRef {
                    remote: "",
                    branch: rest,
                },
            };
        }

        if let Some((first, branch)) = reference.split_once('/') {
            if known_remotes.iter().any(|r| r.as_ref() == first) {
                return Self::InformalRemote {
                    remote: first,
                    branch,
                };
            }
        }

        Self::Opaque(reference)
    }

    /// The branch-like name left after removing namespace and remote.
    pub fn branch(&self) -> &'a str {
        match *self {
            Self::LocalRef { branch }
            | Self::RemoteRef { branch, .. }
            | Self::InformalRemote { branch, .. } => branch,
            Self::Opaque(reference) => reference,
        }
    }

    /// The remote that was stripped, if any.
    pub fn remote(&self) -> Option<&'a str> {
        match *self {
            Self::RemoteRef { remote, .. } | Self::InformalRemote { remote, .. }
                if !remote.is_empty() =>
            {
                Some(remote)
            }
            _ => None,
        }
    }

    /// Short label used in debug logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::LocalRef { .. } => "local ref",
            Self::RemoteRef { .. } => "remote-tracking ref",
            Self::InformalRemote { .. } => "remote branch",
            Self::Opaque(_) => "branch or commit",
        }
    }
}

/// Strip ref-namespace prefixes and, when unambiguous, a leading remote name.
///
/// `refs/heads/` is always stripped. `refs/remotes/<remote>/` is always
/// stripped together with its remote segment. A bare `<remote>/` prefix is
/// only stripped when `<remote>` is one of `known_remotes`; everything else is
/// returned unchanged.
pub fn sanitize_branch_name<S: AsRef<str>>(reference: &str, known_remotes: &[S]) -> String {
    RefShape::classify(reference, known_remotes)
        .branch()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const NO_REMOTES: &[&str] = &[];

    #[test]
    fn test_sanitize_local_branch() {
        assert_eq!(
            sanitize_branch_name("feature/EMP-1234", NO_REMOTES),
            "feature/EMP-1234"
        );
    }

    #[test]
    fn test_sanitize_refs_heads() {
        assert_eq!(
            sanitize_branch_name("refs/heads/feature/EMP-1234", NO_REMOTES),
            "feature/EMP-1234"
        );
    }

    #[test]
    fn test_sanitize_refs_heads_ignores_remotes() {
        // A local branch that happens to start with a remote name stays intact.
        assert_eq!(
            sanitize_branch_name("refs/heads/origin/feature", &["origin"]),
            "origin/feature"
        );
    }

    #[test]
    fn test_sanitize_remote_ref_with_known_remote() {
        assert_eq!(
            sanitize_branch_name("refs/remotes/origin/feature/EMP-1234", &["origin"]),
            "feature/EMP-1234"
        );
    }

    #[test]
    fn test_sanitize_remote_ref_with_unknown_remote() {
        assert_eq!(
            sanitize_branch_name("refs/remotes/fork/feature/EMP-1234", &["origin"]),
            "feature/EMP-1234"
        );
        assert_eq!(
            sanitize_branch_name("refs/remotes/fork/main", NO_REMOTES),
            "main"
        );
    }

    #[test]
    fn test_sanitize_remote_ref_without_branch_segment() {
        assert_eq!(
            sanitize_branch_name("refs/remotes/origin", &["origin"]),
            "origin"
        );
    }

    #[test]
    fn test_sanitize_informal_remote_branch() {
        assert_eq!(
            sanitize_branch_name("origin/feature/EMP-1234", &["origin"]),
            "feature/EMP-1234"
        );
        assert_eq!(
            sanitize_branch_name("upstream/main", &["origin", "upstream"]),
            "main"
        );
    }

    #[test]
    fn test_sanitize_unknown_remote_left_intact() {
        assert_eq!(
            sanitize_branch_name("upstream/feature/EMP-1234", &["origin"]),
            "upstream/feature/EMP-1234"
        );
    }

    #[test]
    fn test_sanitize_remote_match_is_exact() {
        assert_eq!(
            sanitize_branch_name("origin2/feature", &["origin"]),
            "origin2/feature"
        );
        assert_eq!(
            sanitize_branch_name("Origin/feature", &["origin"]),
            "Origin/feature"
        );
    }

    #[test]
    fn test_sanitize_bare_remote_name_passes_through() {
        assert_eq!(sanitize_branch_name("origin", &["origin"]), "origin");
    }

    #[test]
    fn test_sanitize_remote_with_trailing_slash() {
        assert_eq!(sanitize_branch_name("origin/", &["origin"]), "");
    }

    #[test]
    fn test_sanitize_commit_hash() {
        assert_eq!(sanitize_branch_name("abc123", &["origin"]), "abc123");
        assert_eq!(
            sanitize_branch_name("4f9c2e1d0b7a", NO_REMOTES),
            "4f9c2e1d0b7a"
        );
    }

    #[test]
    fn test_sanitize_empty() {
        assert_eq!(sanitize_branch_name("", NO_REMOTES), "");
        assert_eq!(sanitize_branch_name("", &["origin"]), "");
    }

    #[test]
    fn test_sanitize_only_strips_one_remote() {
        assert_eq!(
            sanitize_branch_name("origin/origin/feature", &["origin"]),
            "origin/feature"
        );
    }

    #[test]
    fn test_sanitize_accepts_owned_remote_names() {
        let remotes = vec!["origin".to_string(), "upstream".to_string()];
        assert_eq!(sanitize_branch_name("upstream/fix", &remotes), "fix");
    }

    #[test]
    fn test_sanitize_is_idempotent() {
        let remotes = ["origin"];
        for reference in [
            "feature/EMP-1234",
            "refs/heads/feature/EMP-1234",
            "refs/remotes/origin/feature/EMP-1234",
            "origin/feature/EMP-1234",
            "upstream/feature/EMP-1234",
            "abc123",
            "",
        ] {
            let once = sanitize_branch_name(reference, &remotes);
            let twice = sanitize_branch_name(&once, &remotes);
            assert_eq!(once, twice, "not idempotent for {reference:?}");
        }
    }

    #[test]
    fn test_classify_shapes() {
        let remotes = ["origin"];
        assert_eq!(
            RefShape::classify("refs/heads/main", &remotes),
            RefShape::LocalRef { branch: "main" }
        );
        assert_eq!(
            RefShape::classify("refs/remotes/origin/main", &remotes),
            RefShape::RemoteRef {
                remote: "origin",
                branch: "main"
            }
        );
        assert_eq!(
            RefShape::classify("origin/main", &remotes),
            RefShape::InformalRemote {
                remote: "origin",
                branch: "main"
            }
        );
        assert_eq!(RefShape::classify("main", &remotes), RefShape::Opaque("main"));
    }

    #[test]
    fn test_classify_remote() {
        let remotes = ["origin"];
        assert_eq!(
            RefShape::classify("origin/main", &remotes).remote(),
            Some("origin")
        );
        assert_eq!(
            RefShape::classify("refs/remotes/fork/main", &remotes).remote(),
            Some("fork")
        );
        assert_eq!(RefShape::classify("refs/remotes/fork", &remotes).remote(), None);
        assert_eq!(RefShape::classify("refs/heads/main", &remotes).remote(), None);
        assert_eq!(RefShape::classify("main", &remotes).remote(), None);
    }
}
