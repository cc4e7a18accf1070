//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. This allows:
//! - Single binary with subcommands (`projkit check`, `projkit snapshot`)
//! - Shared configuration loading through [`ProjectContext`]
//! - Consistent global flag handling

pub mod check;
pub mod commit;
pub mod completions;
pub mod dispatcher;
pub mod init;
pub mod snapshot;
pub mod snippet;

pub use dispatcher::{Command, CommandDispatcher, CommandResult, ProjectContext};
