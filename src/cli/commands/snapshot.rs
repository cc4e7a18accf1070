//! Snapshot command implementation.
//!
//! The `projkit snapshot` command records the runtime environment.

use crate::cli::args::SnapshotArgs;
use crate::error::Result;
use crate::layout::ProjectLayout;
use crate::snapshot::write_snapshot;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult, ProjectContext};

/// The snapshot command implementation.
pub struct SnapshotCommand {
    project: ProjectContext,
}

impl SnapshotCommand {
    /// Create a new snapshot command.
    pub fn new(project: ProjectContext, _args: SnapshotArgs) -> Self {
        Self { project }
    }
}

impl Command for SnapshotCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = self.project.load_config()?;
        let layout = ProjectLayout::new(&self.project.root, &config);

        let path = write_snapshot(&layout, &config.snapshot)?;

        ui.success(&format!("Wrote {}", layout.relative(&path).display()));
        Ok(CommandResult::success())
    }
}
