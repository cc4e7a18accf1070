//! Commit command implementation.
//!
//! The `projkit commit` command commits the generated project files.

use crate::cli::args::CommitArgs;
use crate::error::Result;
use crate::ui::UserInterface;
use crate::vcs::commit_generated;

use super::dispatcher::{Command, CommandResult, ProjectContext};

/// The commit command implementation.
pub struct CommitCommand {
    project: ProjectContext,
    args: CommitArgs,
}

impl CommitCommand {
    /// Create a new commit command.
    pub fn new(project: ProjectContext, args: CommitArgs) -> Self {
        Self { project, args }
    }
}

impl Command for CommitCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = self.project.load_config()?;

        let summary = commit_generated(
            &self.project.root,
            &config.vcs,
            self.args.message.as_deref(),
        )?;

        if summary.staged.is_empty() {
            ui.warning("No generated files found. Run `projkit snapshot` first.");
        } else if summary.committed {
            let files: Vec<String> = summary
                .staged
                .iter()
                .map(|p| p.display().to_string())
                .collect();
            ui.success(&format!("Committed {}", files.join(", ")));
        } else {
            ui.message("Generated files are unchanged; nothing to commit.");
        }

        Ok(CommandResult::success())
    }
}
