//! Configuration loading for projkit.
//!
//! - Schema definitions and defaults in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Layer merging in [`merger`]
//!
//! # Example
//!
//! ```
//! use projkit::config::load_config;
//! use std::fs;
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! fs::create_dir_all(temp.path().join(".projkit")).unwrap();
//! fs::write(
//!     temp.path().join(".projkit/config.yml"),
//!     "directories:\n  scripts: code\n",
//! )
//! .unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! assert_eq!(config.directories.scripts, std::path::PathBuf::from("code"));
//! assert_eq!(config.directories.models, std::path::PathBuf::from("models"));
//! ```

pub mod loader;
pub mod merger;
pub mod schema;

pub use loader::{
    load_config, load_config_from, load_config_value, project_config_path, render_config,
    ConfigPaths, CONFIG_DIR, CONFIG_FILE, LOCAL_CONFIG_FILE,
};
pub use merger::{deep_merge, merge_configs};
pub use schema::{
    DirectoriesConfig, FieldsConfig, IdeConfig, LibraryConfig, ProjectConfig, SnapshotConfig,
    SnippetsConfig, VcsConfig, DEFAULT_LOCKFILE, DEFAULT_SNAPSHOT_FILE,
};
