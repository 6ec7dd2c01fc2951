use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use wtpath::{
    default_worktree_path,
    git::GitCommand,
    log_debug,
    logging::init_logging,
    settings::{keys, WtpathSettings},
    worktree_path::effective_parent_dir,
    RefShape,
};

#[derive(Parser)]
#[command(name = "git-worktree-path")]
#[command(version = wtpath::VERSION_DISPLAY)]
#[command(about = "Prints the default directory for a new worktree of a branch, remote branch or commit")]
#[command(long_about = r#"
Prints the directory a new worktree for REFERENCE would be created in,
without creating anything.

'refs/heads/' and 'refs/remotes/<remote>/' prefixes are removed, as is a
leading '<remote>/' when <remote> is one of the repository's configured
remotes. Anything else (including commit ids) is used as-is. The result is
placed under the directory configured in 'wtpath.worktreeParentDir'
(default: the current directory) and always ends with a path separator.

With no REFERENCE, the current branch is used, or the HEAD commit when
detached.
"#)]
pub struct Args {
    #[arg(help = "Branch, remote branch, full ref or commit to derive the path from")]
    reference: Option<String>,

    #[arg(
        short = 'p',
        long = "parent-dir",
        value_name = "DIR",
        help = "Parent directory for the worktree (overrides wtpath.worktreeParentDir)"
    )]
    parent_dir: Option<String>,

    #[arg(long, help = "Print only the sanitized branch name", conflicts_with = "json")]
    sanitize_only: bool,

    #[arg(long, help = "Print the result as JSON")]
    json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    verbose: bool,

    #[arg(short, long, help = "Only print errors", conflicts_with = "verbose")]
    quiet: bool,
}

/// Everything derived for one reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub reference: String,
    pub kind: &'static str,
    pub remote: Option<String>,
    pub branch: String,
    pub parent_dir: String,
    pub path: String,
}

impl Resolution {
    pub fn new<S: AsRef<str>>(reference: &str, known_remotes: &[S], parent_dir: &str) -> Self {
        let shape = RefShape::classify(reference, known_remotes);
        Self {
            reference: reference.to_string(),
            kind: shape.kind(),
            remote: shape.remote().map(str::to_string),
            branch: shape.branch().to_string(),
            parent_dir: effective_parent_dir(parent_dir).to_string(),
            path: default_worktree_path(reference, known_remotes, parent_dir),
        }
    }

    fn render(&self, args: &Args) -> Result<String> {
        if args.json {
            return serde_json::to_string_pretty(self).context("Failed to serialize result");
        }
        if args.sanitize_only {
            return Ok(self.branch.clone());
        }
        Ok(self.path.clone())
    }
}

pub fn run() -> Result<()> {
    let args = Args::parse();

    init_logging(args.verbose, args.quiet);

    if !GitCommand::new(true).is_inside_git_repo()? {
        anyhow::bail!("Not inside a Git repository");
    }

    let settings = WtpathSettings::load()?;
    let git = GitCommand::new(args.quiet).with_gitoxide(settings.use_gitoxide);

    let reference = match &args.reference {
        Some(reference) => reference.clone(),
        None => {
            let current = git.current_reference()?;
            log_debug!("No reference given, using '{current}'");
            current
        }
    };

    let remotes = git.remote_list()?;
    log_debug!("Known remotes: [{}]", remotes.join(", "));

    let parent_dir = match &args.parent_dir {
        Some(dir) => dir.as_str(),
        None => {
            if !settings.worktree_parent_dir.is_empty() {
                log_debug!(
                    "Using {} = '{}'",
                    keys::WORKTREE_PARENT_DIR,
                    settings.worktree_parent_dir
                );
            }
            settings.worktree_parent_dir.as_str()
        }
    };

    let resolution = Resolution::new(&reference, remotes.as_slice(), parent_dir);
    log_debug!(
        "'{}' is a {}, branch name '{}'",
        resolution.reference,
        resolution.kind,
        resolution.branch
    );

    println!("{}", resolution.render(&args)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::MAIN_SEPARATOR;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["git-worktree-path"];
        argv.extend_from_slice(extra);
        Args::parse_from(argv)
    }

    #[test]
    fn test_resolution_remote_branch() {
        let resolution = Resolution::new("origin/feature/x", &["origin"], ".worktrees");
        assert_eq!(resolution.kind, "remote branch");
        assert_eq!(resolution.remote.as_deref(), Some("origin"));
        assert_eq!(resolution.branch, "feature/x");
        assert_eq!(resolution.parent_dir, ".worktrees");
        assert_eq!(
            resolution.path,
            format!(".worktrees{0}feature{0}x{0}", MAIN_SEPARATOR)
        );
    }

    #[test]
    fn test_resolution_defaults_parent_dir() {
        let resolution = Resolution::new("abc123", &[] as &[&str], "");
        assert_eq!(resolution.kind, "branch or commit");
        assert_eq!(resolution.remote, None);
        assert_eq!(resolution.parent_dir, ".");
        assert_eq!(resolution.path, format!("abc123{MAIN_SEPARATOR}"));
    }

    #[test]
    fn test_render_path_by_default() {
        let resolution = Resolution::new("refs/heads/main", &[] as &[&str], "");
        assert_eq!(
            resolution.render(&args(&["main"])).unwrap(),
            format!("main{MAIN_SEPARATOR}")
        );
    }

    #[test]
    fn test_render_sanitize_only() {
        let resolution = Resolution::new("refs/remotes/origin/fix/a", &["origin"], "");
        assert_eq!(
            resolution.render(&args(&["--sanitize-only"])).unwrap(),
            "fix/a"
        );
    }

    #[test]
    fn test_render_json() {
        let resolution = Resolution::new("origin/main", &["origin"], "../wt/");
        let rendered = resolution.render(&args(&["--json"])).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["reference"], "origin/main");
        assert_eq!(value["remote"], "origin");
        assert_eq!(value["branch"], "main");
        assert_eq!(value["parent_dir"], "../wt/");
        assert_eq!(value["path"], resolution.path.as_str());
    }

    #[test]
    fn test_args_parse() {
        let parsed = args(&["-p", ".worktrees", "origin/main"]);
        assert_eq!(parsed.reference.as_deref(), Some("origin/main"));
        assert_eq!(parsed.parent_dir.as_deref(), Some(".worktrees"));
        assert!(!parsed.json);

        let parsed = args(&[]);
        assert!(parsed.reference.is_none());
        assert!(parsed.parent_dir.is_none());
    }

    #[test]
    fn test_args_conflicts() {
        let argv = ["git-worktree-path", "--json", "--sanitize-only"];
        assert!(Args::try_parse_from(argv).is_err());
        let argv = ["git-worktree-path", "-q", "-v"];
        assert!(Args::try_parse_from(argv).is_err());
    }
}
