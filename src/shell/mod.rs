//! External command execution.

pub mod command;
pub mod platform;

pub use command::{execute, run, run_checked, CommandOptions, CommandResult};
pub use platform::is_ci;
