//! Check command implementation.
//!
//! The `projkit check` command runs the project health checks and prints
//! the report.

use std::path::{Path, PathBuf};

use crate::check::{check_session, CheckReport, SessionContext, SessionOptions};
use crate::cli::args::CheckArgs;
use crate::error::{ProjkitError, Result};
use crate::ide::{EnvIde, IdeIntegration};
use crate::library::LockfileLibrary;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult, ProjectContext};

/// Exit code when at least one check failed.
pub const EXIT_CHECKS_FAILED: i32 = 1;

/// Exit code when the IDE's active project is not the working directory.
pub const EXIT_WRONG_DIRECTORY: i32 = 2;

/// The check command implementation.
pub struct CheckCommand {
    project: ProjectContext,
    args: CheckArgs,
    working_dir: Option<PathBuf>,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(project: ProjectContext, args: CheckArgs) -> Self {
        Self {
            project,
            args,
            working_dir: None,
        }
    }

    /// Compare the IDE project against `dir` instead of the process's
    /// current directory.
    pub fn with_working_dir(mut self, dir: &Path) -> Self {
        self.working_dir = Some(dir.to_path_buf());
        self
    }

    fn show_report(&self, report: &CheckReport, ui: &mut dyn UserInterface) -> Result<()> {
        if self.args.json {
            let json = serde_json::to_string_pretty(report).map_err(anyhow::Error::from)?;
            println!("{}", json);
            return Ok(());
        }

        ui.message("");
        ui.message(&report.to_table().render());
        ui.message("");

        let failures = report.failures().count();
        if failures == 0 {
            ui.success("All checks passed");
        } else {
            let noun = if failures == 1 { "check" } else { "checks" };
            ui.warning(&format!("{} {} failed", failures, noun));
        }
        Ok(())
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = self.project.load_config()?;
        let working_dir = match &self.working_dir {
            Some(dir) => dir.clone(),
            None => std::env::current_dir()?,
        };
        let library = LockfileLibrary::new(&config.library);
        let ide = EnvIde::new(&config.ide);
        tracing::debug!("IDE project variable: {}", ide.var());

        let ctx = SessionContext {
            project_root: &self.project.root,
            working_dir: &working_dir,
            config: &config,
            library: &library,
            ide: Some(&ide as &dyn IdeIntegration),
        };
        let options = SessionOptions {
            silent: self.args.silent || self.args.json,
            ide_check: !self.args.no_ide_check,
        };

        if !options.silent {
            ui.show_header("Project checks");
        }

        let report = match check_session(&ctx, options, ui) {
            Ok(report) => report,
            Err(e @ ProjkitError::WrongWorkingDirectory { .. }) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(EXIT_WRONG_DIRECTORY));
            }
            Err(e) => return Err(e),
        };

        self.show_report(&report, ui)?;

        if report.has_failures() {
            Ok(CommandResult::failure(EXIT_CHECKS_FAILED))
        } else {
            Ok(CommandResult::success())
        }
    }
}
