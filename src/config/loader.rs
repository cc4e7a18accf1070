//! Configuration file discovery and loading.
//!
//! Configuration is optional: built-in defaults apply when no file exists.

use crate::config::merger::merge_configs;
use crate::config::schema::ProjectConfig;
use crate::error::{ProjkitError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory holding projkit configuration, both per project and per user.
pub const CONFIG_DIR: &str = ".projkit";

/// Main configuration file name.
pub const CONFIG_FILE: &str = "config.yml";

/// Local override file name, meant to stay out of version control.
pub const LOCAL_CONFIG_FILE: &str = "config.local.yml";

/// Paths to configuration files in priority order (later overrides earlier).
///
/// Merge order:
/// 1. Built-in defaults
/// 2. User global config (`~/.projkit/config.yml`)
/// 3. Project config (`.projkit/config.yml`), or an explicit file
/// 4. Local overrides (`.projkit/config.local.yml`)
#[derive(Debug, Clone, Default)]
pub struct ConfigPaths {
    /// User's global config
    pub user_global: Option<PathBuf>,

    /// Project config
    pub project: Option<PathBuf>,

    /// Local overrides
    pub project_local: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files for the given project root.
    pub fn discover(project_root: &Path) -> Self {
        Self {
            user_global: home_dir()
                .map(|home| home.join(CONFIG_DIR).join(CONFIG_FILE))
                .filter(|p| p.exists()),
            project: existing(project_config_path(project_root)),
            project_local: existing(project_root.join(CONFIG_DIR).join(LOCAL_CONFIG_FILE)),
        }
    }

    /// Discover config files, using `explicit` in place of the project config.
    pub fn with_explicit(project_root: &Path, explicit: &Path) -> Self {
        Self {
            project: Some(explicit.to_path_buf()),
            ..Self::discover(project_root)
        }
    }

    /// Returns all existing config paths in merge order.
    pub fn all_existing(&self) -> Vec<&PathBuf> {
        [&self.user_global, &self.project, &self.project_local]
            .into_iter()
            .flatten()
            .collect()
    }
}

/// Path of the project config file, whether or not it exists.
pub fn project_config_path(project_root: &Path) -> PathBuf {
    project_root.join(CONFIG_DIR).join(CONFIG_FILE)
}

fn existing(path: PathBuf) -> Option<PathBuf> {
    path.exists().then_some(path)
}

fn home_dir() -> Option<PathBuf> {
    let var = if cfg!(target_os = "windows") {
        "USERPROFILE"
    } else {
        "HOME"
    };
    std::env::var_os(var).map(PathBuf::from)
}

/// Load a config file as a raw YAML value.
///
/// # Errors
///
/// Returns `FileNotFound` if the file doesn't exist and `ConfigParseError`
/// if the YAML is invalid.
pub fn load_config_value(path: &Path) -> Result<serde_yaml::Value> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ProjkitError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ProjkitError::Io(e)
        }
    })?;

    serde_yaml::from_str(&content).map_err(|e| ProjkitError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load and merge configuration from the given paths on top of the defaults.
pub fn load_config_from(paths: &ConfigPaths) -> Result<ProjectConfig> {
    let mut layers = vec![to_value(&ProjectConfig::default())?];

    for path in paths.all_existing() {
        tracing::debug!("Loading config layer {}", path.display());
        layers.push(load_config_value(path)?);
    }

    let merged = merge_configs(&layers);
    serde_yaml::from_value(merged).map_err(|e| ProjkitError::ConfigParseError {
        path: paths
            .all_existing()
            .last()
            .map(|p| p.to_path_buf())
            .unwrap_or_default(),
        message: e.to_string(),
    })
}

/// Load the merged configuration for a project.
///
/// When `explicit` is given it replaces `.projkit/config.yml`.
pub fn load_config(project_root: &Path, explicit: Option<&Path>) -> Result<ProjectConfig> {
    let paths = match explicit {
        Some(path) => ConfigPaths::with_explicit(project_root, path),
        None => ConfigPaths::discover(project_root),
    };
    load_config_from(&paths)
}

/// Serialize a config into YAML text.
pub fn render_config(config: &ProjectConfig) -> Result<String> {
    serde_yaml::to_string(config).map_err(|e| anyhow::anyhow!(e).into())
}

fn to_value(config: &ProjectConfig) -> Result<serde_yaml::Value> {
    serde_yaml::to_value(config).map_err(|e| anyhow::anyhow!(e).into())
}
