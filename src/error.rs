//! Error types for projkit operations.
//!
//! This module defines [`ProjkitError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Project-health conditions are never errors; they become failing rows
//!   in a [`CheckReport`](crate::check::CheckReport)
//! - Use `ProjkitError` for conditions that abort a command
//! - Use `anyhow::Error` (via `ProjkitError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for projkit operations.
#[derive(Debug, Error)]
pub enum ProjkitError {
    /// A file the operation needs does not exist.
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Failed to parse the dependency lockfile.
    #[error("Failed to parse lockfile at {path}: {message}")]
    LockfileParseError { path: PathBuf, message: String },

    /// The IDE's active project is not the directory projkit runs in.
    #[error(
        "Wrong working directory: IDE project is {ide}, but working directory is {cwd}. \
         Open the project or change directory before checking"
    )]
    WrongWorkingDirectory { ide: PathBuf, cwd: PathBuf },

    /// One or more checks yielded something other than a single outcome.
    #[error("Checks must yield exactly one result: {}", .names.join(", "))]
    NonScalarCheck { names: Vec<String> },

    /// Two checks in one suite share a name.
    #[error("Duplicate check name: {name}")]
    DuplicateCheck { name: String },

    /// Snippet is not present in the snippet library.
    #[error("Snippet not found: {name}")]
    SnippetNotFound { name: String },

    /// Copying a snippet would overwrite an existing file.
    #[error("{path} already exists. Use --force to overwrite")]
    SnippetExists { path: PathBuf },

    /// No snippet library is configured or passed on the command line.
    #[error("No snippet library configured. Set snippets.library or pass --library")]
    NoSnippetLibrary,

    /// External command failed.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for projkit operations.
pub type Result<T> = std::result::Result<T, ProjkitError>;
