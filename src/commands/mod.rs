pub mod worktree_path;
