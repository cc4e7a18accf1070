//! Project health checks.
//!
//! [`check_session`] runs the fixed battery of best-practice checks for an
//! analysis project. The working-directory check is fatal and runs before
//! anything else; every other condition is recorded as a report row.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::ProjectConfig;
use crate::error::{ProjkitError, Result};
use crate::fields::validate_field_within;
use crate::ide::IdeIntegration;
use crate::layout::ProjectLayout;
use crate::library::LibraryStatus;
use crate::ui::UserInterface;

use super::outcome::CheckOutcome;
use super::registry::{run_checks, CheckSuite, RunOptions};
use super::report::CheckReport;

/// Name of the layout check.
pub const VALID_PROJECT: &str = "Directory is a valid project";

/// Name of the snapshot presence check.
pub const HAS_ENVIRONMENT_INFO: &str = "Contains environment-info file";

/// Name of the snapshot freshness check.
pub const ENVIRONMENT_INFO_CURRENT: &str = "Environment-info is up to date";

/// Name of the private library check.
pub const LIBRARY_SETUP: &str = "Project library setup";

/// Name of the check for a required script header field.
pub fn field_check_name(field: &str) -> String {
    format!("{} field present", field)
}

/// Everything the session checker inspects.
pub struct SessionContext<'a> {
    /// Root of the project being checked.
    pub project_root: &'a Path,
    /// Working directory of the process.
    pub working_dir: &'a Path,
    /// Effective configuration.
    pub config: &'a ProjectConfig,
    /// Private library status query.
    pub library: &'a dyn LibraryStatus,
    /// IDE integration, when one is attached.
    pub ide: Option<&'a dyn IdeIntegration>,
}

/// Options for [`check_session`].
#[derive(Debug, Clone, Copy)]
pub struct SessionOptions {
    /// Suppress the progress log.
    pub silent: bool,
    /// Verify the IDE's active project first.
    pub ide_check: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            silent: false,
            ide_check: true,
        }
    }
}

/// Run the project health checks.
///
/// # Errors
///
/// Returns [`ProjkitError::WrongWorkingDirectory`] without running any
/// check when the IDE check is enabled and the IDE's active project is not
/// the working directory.
pub fn check_session(
    ctx: &SessionContext<'_>,
    options: SessionOptions,
    ui: &mut dyn UserInterface,
) -> Result<CheckReport> {
    if options.ide_check {
        if let Some(ide) = ctx.ide {
            verify_working_directory(ide, ctx.working_dir)?;
        }
    }

    let layout = ProjectLayout::new(ctx.project_root, ctx.config);
    let layout = &layout;
    let fields = &ctx.config.fields;

    let mut suite = CheckSuite::new()
        .check(VALID_PROJECT, || valid_project(layout))
        .check(HAS_ENVIRONMENT_INFO, || has_environment_info(layout))
        .check(ENVIRONMENT_INFO_CURRENT, || environment_info_current(layout))
        .check(LIBRARY_SETUP, || library_setup(ctx));

    for field in &fields.required {
        suite = suite.check(field_check_name(field), move || {
            if !layout.scripts_dir().is_dir() {
                return Ok(CheckOutcome::info("No scripts"));
            }
            validate_field_within(
                layout.scripts_dir(),
                field,
                &fields.extension,
                fields.max_lines,
            )
        });
    }

    run_checks(
        suite,
        RunOptions {
            silent: options.silent,
            append: None,
        },
        ui,
    )
}

/// Fail if the IDE reports an active project other than `working_dir`.
///
/// Paths are compared after resolving symlinks and relative components.
pub fn verify_working_directory(ide: &dyn IdeIntegration, working_dir: &Path) -> Result<()> {
    let Some(ide_dir) = ide.project_dir() else {
        return Ok(());
    };

    if normalize(&ide_dir) == normalize(working_dir) {
        Ok(())
    } else {
        Err(ProjkitError::WrongWorkingDirectory {
            ide: ide_dir,
            cwd: working_dir.to_path_buf(),
        })
    }
}

fn normalize(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}

fn valid_project(layout: &ProjectLayout) -> CheckOutcome {
    let missing = layout.missing_required();
    if missing.is_empty() {
        return CheckOutcome::Pass;
    }

    let names: Vec<String> = missing
        .iter()
        .map(|p| layout.relative(p).display().to_string())
        .collect();
    CheckOutcome::fail(format!("missing {}", names.join(",")))
}

fn has_environment_info(layout: &ProjectLayout) -> CheckOutcome {
    layout.snapshot_file().is_file().into()
}

fn environment_info_current(layout: &ProjectLayout) -> Result<CheckOutcome> {
    let snapshot = layout.snapshot_file();
    if !snapshot.is_file() {
        return Ok(CheckOutcome::fail(format!(
            "{} not found",
            layout.relative(snapshot).display()
        )));
    }

    let Some((script, script_time)) = layout.newest_script()? else {
        return Ok(CheckOutcome::info("No scripts"));
    };

    let snapshot_time = fs::metadata(snapshot)?.modified()?;
    if snapshot_time >= script_time {
        Ok(CheckOutcome::Pass)
    } else {
        Ok(CheckOutcome::fail(format!(
            "{} changed after {}",
            layout.relative(&script).display(),
            layout.relative(snapshot).display()
        )))
    }
}

fn library_setup(ctx: &SessionContext<'_>) -> Result<CheckOutcome> {
    let library = &ctx.config.library;
    if !ctx.project_root.join(&library.manifest_dir).is_dir() {
        return Ok(CheckOutcome::fail("no project library"));
    }

    let status = match ctx.library.status(ctx.project_root, &library.exclude) {
        Ok(status) => status,
        Err(ProjkitError::FileNotFound { .. }) => {
            return Ok(CheckOutcome::fail("snapshot needed: no lockfile"));
        }
        Err(e) => return Err(e),
    };

    let unresolved: Vec<&str> = status
        .iter()
        .filter(|p| !p.is_resolved())
        .map(|p| p.name.as_str())
        .collect();

    if unresolved.is_empty() {
        Ok(CheckOutcome::Pass)
    } else {
        Ok(CheckOutcome::fail(format!(
            "snapshot needed: {}",
            unresolved.join(",")
        )))
    }
}
