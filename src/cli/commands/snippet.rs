//! Snippet command implementation.
//!
//! `projkit snippet search` lists matches in the shared snippet library and
//! `projkit snippet copy` copies one into the scripts directory.

use crate::cli::args::{SnippetAction, SnippetArgs};
use crate::error::{ProjkitError, Result};
use crate::layout::ProjectLayout;
use crate::snippets::SnippetLibrary;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult, ProjectContext};

/// The snippet command implementation.
pub struct SnippetCommand {
    project: ProjectContext,
    args: SnippetArgs,
}

impl SnippetCommand {
    /// Create a new snippet command.
    pub fn new(project: ProjectContext, args: SnippetArgs) -> Self {
        Self { project, args }
    }
}

impl Command for SnippetCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = self.project.load_config()?;
        let dir = self
            .args
            .library
            .as_ref()
            .or(config.snippets.library.as_ref())
            .ok_or(ProjkitError::NoSnippetLibrary)?;
        let library = SnippetLibrary::new(dir);

        match &self.args.action {
            SnippetAction::Search { pattern } => {
                let matches = library.search(pattern)?;
                if matches.is_empty() {
                    ui.warning(&format!("No snippets match '{}'", pattern));
                    return Ok(CommandResult::failure(1));
                }
                for m in &matches {
                    match m.line {
                        Some(line) => {
                            ui.message(&format!("{}:{}: {}", m.snippet.display(), line, m.text))
                        }
                        None => ui.message(&m.snippet.display().to_string()),
                    }
                }
            }
            SnippetAction::Copy { name, force } => {
                let layout = ProjectLayout::new(&self.project.root, &config);
                match library.copy(name, layout.scripts_dir(), *force) {
                    Ok(dest) => {
                        ui.success(&format!("Copied {}", layout.relative(&dest).display()))
                    }
                    Err(e @ ProjkitError::SnippetExists { .. }) => {
                        ui.warning(&e.to_string());
                        return Ok(CommandResult::failure(1));
                    }
                    Err(e) => return Err(e),
                }
            }
        }

        Ok(CommandResult::success())
    }
}
