//! Environment-snapshot file.
//!
//! The snapshot records the runtime state a project was last run under:
//! when it was taken, the platform, and the output of the configured
//! version commands. Its modification time is what the freshness check
//! compares against the scripts.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::config::SnapshotConfig;
use crate::error::Result;
use crate::layout::ProjectLayout;
use crate::shell::{execute, CommandOptions};

/// Write the snapshot file for `layout`, replacing any earlier one.
///
/// A command that fails is recorded with its exit code rather than
/// aborting the snapshot.
pub fn write_snapshot(layout: &ProjectLayout, config: &SnapshotConfig) -> Result<PathBuf> {
    let mut outputs = Vec::new();
    for command in &config.commands {
        let result = execute(command, &CommandOptions::in_dir(layout.root()))?;
        let mut text = result.stdout;
        text.push_str(&result.stderr);
        if !result.success {
            tracing::warn!("Snapshot command '{}' failed", command);
            let code = result
                .exit_code
                .map_or_else(|| "none".to_string(), |c| c.to_string());
            let _ = writeln!(text, "(exit code {})", code);
        }
        outputs.push((command.as_str(), text));
    }

    let content = render_snapshot(layout.root(), Local::now(), &outputs);
    let path = layout.snapshot_file().to_path_buf();
    fs::write(&path, content)?;
    tracing::debug!("Wrote {}", path.display());
    Ok(path)
}

/// Render snapshot text from already collected command outputs.
pub fn render_snapshot(root: &Path, taken: DateTime<Local>, outputs: &[(&str, String)]) -> String {
    let mut text = String::new();
    let _ = writeln!(text, "Environment snapshot");
    let _ = writeln!(text, "Taken: {}", taken.format("%Y-%m-%d %H:%M:%S %z"));
    let _ = writeln!(text, "Project: {}", root.display());
    let _ = writeln!(
        text,
        "Platform: {}-{}",
        std::env::consts::OS,
        std::env::consts::ARCH
    );

    for (command, output) in outputs {
        let _ = writeln!(text);
        let _ = writeln!(text, "$ {}", command);
        text.push_str(output);
        if !output.ends_with('\n') {
            text.push('\n');
        }
    }

    text
}
