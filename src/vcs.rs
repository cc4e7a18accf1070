//! Version control of generated project files.
//!
//! Files produced by tooling (the environment snapshot, the lockfile) are
//! committed on their own, leaving anything else the user has staged alone.

use std::path::{Path, PathBuf};

use crate::config::VcsConfig;
use crate::error::Result;
use crate::shell::{run, run_checked, CommandOptions};

/// What [`commit_generated`] did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitSummary {
    /// Generated files that exist and were staged, relative to the root.
    pub staged: Vec<PathBuf>,
    /// Whether a commit was created.
    pub committed: bool,
}

/// Stage the configured generated files that exist and commit them.
///
/// No commit is made when none of the files exist or none changed.
pub fn commit_generated(
    project_root: &Path,
    config: &VcsConfig,
    message: Option<&str>,
) -> Result<CommitSummary> {
    let staged: Vec<PathBuf> = config
        .generated
        .iter()
        .filter(|p| project_root.join(p).exists())
        .cloned()
        .collect();

    if staged.is_empty() {
        tracing::debug!("No generated files to commit");
        return Ok(CommitSummary::default());
    }

    let paths: Vec<String> = staged.iter().map(|p| p.display().to_string()).collect();
    let options = CommandOptions::in_dir(project_root);

    let mut add = vec!["add", "--"];
    add.extend(paths.iter().map(String::as_str));
    run_checked("git", &add, &options)?;

    let mut diff = vec!["diff", "--cached", "--quiet", "--"];
    diff.extend(paths.iter().map(String::as_str));
    if run("git", &diff, &options)?.success {
        tracing::debug!("Generated files unchanged");
        return Ok(CommitSummary {
            staged,
            committed: false,
        });
    }

    let message = message.unwrap_or(&config.message);
    let mut commit = vec!["commit", "-m", message, "--"];
    commit.extend(paths.iter().map(String::as_str));
    run_checked("git", &commit, &options)?;

    Ok(CommitSummary {
        staged,
        committed: true,
    })
}
