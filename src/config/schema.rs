//! Configuration schema definitions for projkit.
//!
//! This module contains the struct definitions that map to the
//! `.projkit/config.yml` file format. Every field has a default, so an
//! empty file (or no file at all) yields the standard layout.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for `.projkit/config.yml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Project folder names
    pub directories: DirectoriesConfig,

    /// Environment-snapshot file
    pub snapshot: SnapshotConfig,

    /// Private package library
    pub library: LibraryConfig,

    /// Script header fields
    pub fields: FieldsConfig,

    /// IDE integration
    pub ide: IdeConfig,

    /// Shared snippet library
    pub snippets: SnippetsConfig,

    /// Version control of generated files
    pub vcs: VcsConfig,
}

/// Folder names relative to the project root
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectoriesConfig {
    /// Analysis scripts
    pub scripts: PathBuf,

    /// Fitted models
    pub models: PathBuf,

    /// Further folders created by `init` but not checked
    pub extra: Vec<PathBuf>,
}

impl Default for DirectoriesConfig {
    fn default() -> Self {
        Self {
            scripts: PathBuf::from("scripts"),
            models: PathBuf::from("models"),
            extra: vec![
                PathBuf::from("data"),
                PathBuf::from("output"),
                PathBuf::from("docs"),
            ],
        }
    }
}

/// Environment-snapshot file settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapshotConfig {
    /// File name at the project root
    pub file: PathBuf,

    /// Commands whose output is recorded in the snapshot
    pub commands: Vec<String>,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_SNAPSHOT_FILE),
            commands: vec!["R --version".to_string()],
        }
    }
}

/// Default environment-snapshot file name.
pub const DEFAULT_SNAPSHOT_FILE: &str = "session_info.txt";

/// Private package library settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LibraryConfig {
    /// Manifest directory at the project root; its presence means the
    /// project has a private library
    pub manifest_dir: PathBuf,

    /// Lockfile at the project root
    pub lockfile: PathBuf,

    /// Packages left out of the status query
    pub exclude: Vec<String>,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            manifest_dir: PathBuf::from("renv"),
            lockfile: PathBuf::from(DEFAULT_LOCKFILE),
            exclude: vec!["renv".to_string()],
        }
    }
}

/// Default lockfile name.
pub const DEFAULT_LOCKFILE: &str = "renv.lock";

/// Script header field settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldsConfig {
    /// Fields every script must fill in
    pub required: Vec<String>,

    /// Extension of the scripts to inspect
    pub extension: String,

    /// Leading lines scanned per script
    pub max_lines: usize,
}

impl Default for FieldsConfig {
    fn default() -> Self {
        Self {
            required: vec!["Description".to_string(), "Author".to_string()],
            extension: crate::fields::DEFAULT_EXTENSION.to_string(),
            max_lines: crate::fields::DEFAULT_FIELD_LINES,
        }
    }
}

/// IDE integration settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdeConfig {
    /// Environment variable holding the IDE's active project directory
    pub project_env: String,
}

impl Default for IdeConfig {
    fn default() -> Self {
        Self {
            project_env: "PROJKIT_IDE_PROJECT".to_string(),
        }
    }
}

/// Snippet library settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnippetsConfig {
    /// Directory holding shared snippets
    #[serde(skip_serializing_if = "Option::is_none")]
    pub library: Option<PathBuf>,
}

/// Version control settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VcsConfig {
    /// Generated files staged by `commit`, relative to the project root
    pub generated: Vec<PathBuf>,

    /// Commit message used when none is given
    pub message: String,
}

impl Default for VcsConfig {
    fn default() -> Self {
        Self {
            generated: vec![
                PathBuf::from(DEFAULT_SNAPSHOT_FILE),
                PathBuf::from(DEFAULT_LOCKFILE),
            ],
            message: "Update generated project files".to_string(),
        }
    }
}
