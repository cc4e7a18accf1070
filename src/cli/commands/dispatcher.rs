//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands};
use crate::config::{load_config, ProjectConfig};
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Where a command finds its project and configuration.
#[derive(Debug, Clone)]
pub struct ProjectContext {
    /// Project root.
    pub root: PathBuf,
    /// Explicit config file from `--config`.
    pub config_file: Option<PathBuf>,
}

impl ProjectContext {
    /// Context for `root` with discovered configuration.
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            config_file: None,
        }
    }

    /// Load the layered configuration for this project.
    pub fn load_config(&self) -> Result<ProjectConfig> {
        load_config(&self.root, self.config_file.as_deref())
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project: ProjectContext,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf) -> Self {
        Self {
            project: ProjectContext {
                root: project_root,
                config_file: None,
            },
        }
    }

    /// Use `path` in place of the project config file.
    pub fn with_config_file(mut self, path: Option<PathBuf>) -> Self {
        self.project.config_file = path;
        self
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project.root
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let project = self.project.clone();
        match &cli.command {
            Commands::Init(args) => super::init::InitCommand::new(project, args.clone()).execute(ui),
            Commands::Check(args) => {
                super::check::CheckCommand::new(project, args.clone()).execute(ui)
            }
            Commands::Snapshot(args) => {
                super::snapshot::SnapshotCommand::new(project, args.clone()).execute(ui)
            }
            Commands::Commit(args) => {
                super::commit::CommitCommand::new(project, args.clone()).execute(ui)
            }
            Commands::Snippet(args) => {
                super::snippet::SnippetCommand::new(project, args.clone()).execute(ui)
            }
            Commands::Completions(args) => {
                super::completions::CompletionsCommand::new(args.clone()).execute(ui)
            }
        }
    }
}
