//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// projkit - Best-practice setup and health checks for analysis projects.
#[derive(Debug, Parser)]
#[command(name = "projkit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default .projkit/config.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create the standard project layout and configuration
    Init(InitArgs),

    /// Check the project against best practices
    Check(CheckArgs),

    /// Record the runtime environment in the snapshot file
    Snapshot(SnapshotArgs),

    /// Commit generated files (snapshot, lockfile)
    Commit(CommitArgs),

    /// Search and copy shared snippets
    Snippet(SnippetArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `init` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct InitArgs {
    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Do not print each check as it runs
    #[arg(long)]
    pub silent: bool,

    /// Skip verifying the IDE's active project
    #[arg(long)]
    pub no_ide_check: bool,

    /// Output the report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `snapshot` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct SnapshotArgs {}

/// Arguments for the `commit` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CommitArgs {
    /// Commit message (defaults to vcs.message)
    #[arg(short, long)]
    pub message: Option<String>,
}

/// Arguments for the `snippet` command.
#[derive(Debug, Clone, clap::Args)]
pub struct SnippetArgs {
    /// Snippet library directory (overrides snippets.library)
    #[arg(long, global = true)]
    pub library: Option<PathBuf>,

    #[command(subcommand)]
    pub action: SnippetAction,
}

/// Snippet subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum SnippetAction {
    /// Find snippets by name or content (regular expression)
    Search {
        /// Pattern to search for
        pattern: String,
    },

    /// Copy a snippet into the scripts directory
    Copy {
        /// Snippet path, file name, or stem
        name: String,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_check_flags() {
        let cli = Cli::try_parse_from(["projkit", "check", "--silent", "--no-ide-check", "--json"])
            .unwrap();

        match cli.command {
            Commands::Check(args) => {
                assert!(args.silent);
                assert!(args.no_ide_check);
                assert!(args.json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["projkit", "check", "--project", "/work", "--debug"])
            .unwrap();

        assert_eq!(cli.project, Some(PathBuf::from("/work")));
        assert!(cli.debug);
    }

    #[test]
    fn parses_snippet_copy() {
        let cli = Cli::try_parse_from([
            "projkit",
            "snippet",
            "copy",
            "mixed_model",
            "--force",
            "--library",
            "/shared",
        ])
        .unwrap();

        match cli.command {
            Commands::Snippet(args) => {
                assert_eq!(args.library, Some(PathBuf::from("/shared")));
                match args.action {
                    SnippetAction::Copy { name, force } => {
                        assert_eq!(name, "mixed_model");
                        assert!(force);
                    }
                    other => panic!("unexpected action: {other:?}"),
                }
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_commit_message() {
        let cli = Cli::try_parse_from(["projkit", "commit", "-m", "Refresh snapshot"]).unwrap();

        match cli.command {
            Commands::Commit(args) => assert_eq!(args.message.as_deref(), Some("Refresh snapshot")),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Cli::try_parse_from(["projkit"]).is_err());
    }
}
