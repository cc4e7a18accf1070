//! Init command implementation.
//!
//! The `projkit init` command creates the standard project layout and a
//! starter configuration file.

use std::fs;

use crate::cli::args::InitArgs;
use crate::config::{project_config_path, render_config, CONFIG_DIR, LOCAL_CONFIG_FILE};
use crate::error::Result;
use crate::layout::ProjectLayout;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult, ProjectContext};

/// The init command implementation.
pub struct InitCommand {
    project: ProjectContext,
    args: InitArgs,
}

impl InitCommand {
    /// Create a new init command.
    pub fn new(project: ProjectContext, args: InitArgs) -> Self {
        Self { project, args }
    }

    /// Create configuration content for this project.
    fn create_config(&self, body: &str) -> String {
        let project_name = self
            .project
            .root
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("project");

        format!(
            "# projkit configuration for {project_name}\n\
             #\n\
             # Put machine-specific overrides in {CONFIG_DIR}/{LOCAL_CONFIG_FILE}\n\
             \n\
             {body}"
        )
    }

    /// Update gitignore to exclude local overrides.
    fn update_gitignore(&self, ui: &mut dyn UserInterface) -> Result<()> {
        let gitignore_entry = format!("{}/{}", CONFIG_DIR, LOCAL_CONFIG_FILE);
        let gitignore_path = self.project.root.join(".gitignore");

        if gitignore_path.exists() {
            let content = fs::read_to_string(&gitignore_path)?;
            if !content.lines().any(|line| line.trim() == gitignore_entry) {
                let separator = if content.is_empty() || content.ends_with('\n') {
                    ""
                } else {
                    "\n"
                };
                fs::write(
                    &gitignore_path,
                    format!("{}{}{}\n", content, separator, gitignore_entry),
                )?;
                ui.message(&format!("Added {} to .gitignore", gitignore_entry));
            }
        }

        Ok(())
    }
}

impl Command for InitCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = self.project.load_config()?;
        let layout = ProjectLayout::new(&self.project.root, &config);

        ui.show_header("Project Setup");

        for dir in layout.create()? {
            ui.success(&format!("Created {}", layout.relative(&dir).display()));
        }

        let config_path = project_config_path(&self.project.root);
        if config_path.exists() && !self.args.force {
            ui.warning("Configuration already exists. Use --force to overwrite.");
        } else {
            if let Some(parent) = config_path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&config_path, self.create_config(&render_config(&config)?))?;
            tracing::debug!("Wrote {}", config_path.display());
            ui.success(&format!(
                "Wrote {}",
                layout.relative(&config_path).display()
            ));
        }

        self.update_gitignore(ui)?;

        ui.message("");
        ui.message("Run `projkit check` to see how the project measures up.");

        Ok(CommandResult::success())
    }
}
