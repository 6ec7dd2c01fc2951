/// wtpath - default worktree paths
///
/// A multicall binary: installed as `wtpath`, or symlinked as
/// `git-worktree-path` so that `git worktree-path` works. Both names run the
/// same command; clap picks up the invoked name for usage output.
use anyhow::Result;

mod commands;

fn main() -> Result<()> {
    commands::worktree_path::run()
}
