//! Field extraction from the leading lines of a file.

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use regex::{Regex, RegexBuilder};

use crate::error::{ProjkitError, Result};

/// Number of leading lines scanned when no limit is given.
pub const DEFAULT_FIELD_LINES: usize = 10;

/// Extract the value of `field` from the first `max_lines` lines of a file.
///
/// The label matches case-insensitively and tolerates a trailing `s`, so
/// `Description`, `DESCRIPTION` and `Descriptions` all match the field
/// `Description`. Only the first matching line is used. The value is the
/// rest of that line after the colon, without leading whitespace.
///
/// Returns an empty string when no line within the limit carries the field.
/// Bytes that are not valid UTF-8 (for example a Latin-1 header) are
/// replaced rather than treated as an error.
///
/// # Errors
///
/// Returns [`ProjkitError::FileNotFound`] if the file does not exist and
/// [`ProjkitError::Io`] if it cannot be read.
pub fn extract_field(path: &Path, field: &str, max_lines: usize) -> Result<String> {
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ProjkitError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ProjkitError::Io(e)
        }
    })?;

    let pattern = field_pattern(field)?;

    let mut reader = BufReader::new(file);
    let mut buf = Vec::new();
    for _ in 0..max_lines {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        let line = String::from_utf8_lossy(&buf);
        if matches!(line, Cow::Owned(_)) {
            tracing::warn!("{} is not valid UTF-8; reading it lossily", path.display());
        }
        let line = line.trim_end_matches(['\n', '\r']);
        if let Some(m) = pattern.find(line) {
            return Ok(line[m.end()..].to_string());
        }
    }

    Ok(String::new())
}

fn field_pattern(field: &str) -> Result<Regex> {
    RegexBuilder::new(&format!(r"{}s*:\s*", regex::escape(field)))
        .case_insensitive(true)
        .build()
        .map_err(|e| anyhow::anyhow!("invalid field name '{}': {}", field, e).into())
}
