//! Field completeness across a directory of scripts.

use std::fs;
use std::path::{Path, PathBuf};

use crate::check::CheckOutcome;
use crate::error::Result;

use super::extractor::{extract_field, DEFAULT_FIELD_LINES};

/// Script extension checked when no filter is given.
pub const DEFAULT_EXTENSION: &str = "R";

/// Check that every file with `extension` in `dir` carries a non-empty `field`.
///
/// Files are inspected in file-name order. Passes when nothing is missing,
/// otherwise fails with the comma-separated names of the offending files,
/// which renders as `FALSE: a.R,b.R` in a report.
pub fn validate_field(dir: &Path, field: &str, extension: &str) -> Result<CheckOutcome> {
    validate_field_within(dir, field, extension, DEFAULT_FIELD_LINES)
}

/// Like [`validate_field`], scanning `max_lines` leading lines per file.
pub fn validate_field_within(
    dir: &Path,
    field: &str,
    extension: &str,
    max_lines: usize,
) -> Result<CheckOutcome> {
    let mut missing = Vec::new();

    for path in files_with_extension(dir, extension)? {
        if extract_field(&path, field, max_lines)?.is_empty() {
            tracing::debug!("{} has no {} field", path.display(), field);
            missing.push(file_name(&path));
        }
    }

    if missing.is_empty() {
        Ok(CheckOutcome::Pass)
    } else {
        Ok(CheckOutcome::fail(missing.join(",")))
    }
}

/// List regular files in `dir` whose extension is exactly `extension`.
fn files_with_extension(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == extension) {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
