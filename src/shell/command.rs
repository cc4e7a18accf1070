//! External command execution.

use crate::error::{ProjkitError, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// Result of executing an external command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

/// Options for command execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Working directory.
    pub cwd: Option<PathBuf>,

    /// Environment variables (merged with system env).
    pub env: HashMap<String, String>,
}

impl CommandOptions {
    /// Options running in `cwd`.
    pub fn in_dir(cwd: &Path) -> Self {
        Self {
            cwd: Some(cwd.to_path_buf()),
            ..Default::default()
        }
    }
}

/// Execute a command line through the platform shell, capturing output.
pub fn execute(command: &str, options: &CommandOptions) -> Result<CommandResult> {
    let (shell, flag) = if cfg!(target_os = "windows") {
        (
            std::env::var("COMSPEC").unwrap_or_else(|_| "cmd.exe".to_string()),
            "/C",
        )
    } else {
        ("/bin/sh".to_string(), "-c")
    };

    let mut cmd = Command::new(shell);
    cmd.arg(flag).arg(command);
    spawn(cmd, command, options)
}

/// Run a program with arguments directly, capturing output.
pub fn run(program: &str, args: &[&str], options: &CommandOptions) -> Result<CommandResult> {
    let mut cmd = Command::new(program);
    cmd.args(args);

    let command_line = std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ");
    spawn(cmd, &command_line, options)
}

/// Run a program and fail unless it exits successfully.
pub fn run_checked(program: &str, args: &[&str], options: &CommandOptions) -> Result<CommandResult> {
    let result = run(program, args, options)?;
    if result.success {
        Ok(result)
    } else {
        let mut command = vec![program];
        command.extend_from_slice(args);
        Err(ProjkitError::CommandFailed {
            command: command.join(" "),
            code: result.exit_code,
        })
    }
}

fn spawn(mut cmd: Command, command_line: &str, options: &CommandOptions) -> Result<CommandResult> {
    let start = Instant::now();

    if let Some(cwd) = &options.cwd {
        cmd.current_dir(cwd);
    }
    for (key, value) in &options.env {
        cmd.env(key, value);
    }
    cmd.stdin(Stdio::null());
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());

    tracing::debug!("Running: {}", command_line);

    let output = cmd.output().map_err(|e| {
        tracing::debug!("Failed to start '{}': {}", command_line, e);
        ProjkitError::CommandFailed {
            command: command_line.to_string(),
            code: None,
        }
    })?;

    Ok(CommandResult {
        exit_code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        duration: start.elapsed(),
        success: output.status.success(),
    })
}
