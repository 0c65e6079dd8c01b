//! Ambient fact probes: current date and git branch.
//!
//! Probes return `Option` instead of erroring; a missing fact is normal and
//! never affects the run.

use chrono::{DateTime, Local};
use git2::Repository;
use std::path::Path;

/// Date fragment injected into every run.
pub fn date_fragment(now: DateTime<Local>) -> String {
    format!("[Current Date: {}]", now.format("%B %d, %Y"))
}

/// Current branch of the repository containing the working directory.
pub fn current_branch() -> Option<String> {
    let cwd = std::env::current_dir().ok()?;
    branch_at(&cwd)
}

/// Branch name for the repository containing `path`.
///
/// `None` when there is no repository, HEAD is unborn, or HEAD is detached
/// (a detached checkout has no branch name worth injecting).
pub fn branch_at(path: &Path) -> Option<String> {
    let repo = Repository::discover(path).ok()?;
    let head = repo.head().ok()?;
    if head.is_branch() {
        head.shorthand().map(str::to_string)
    } else {
        None
    }
}
