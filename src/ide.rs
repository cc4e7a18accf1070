//! IDE integration.
//!
//! An IDE that manages projects knows which project is active. When projkit
//! runs inside such an IDE, the session checker refuses to check a directory
//! other than the active project.

use std::path::PathBuf;

use crate::config::IdeConfig;

/// Query for the IDE's active project.
pub trait IdeIntegration {
    /// The IDE's active project directory, or `None` if no IDE is attached.
    fn project_dir(&self) -> Option<PathBuf>;
}

/// IDE integration through an environment variable set by the IDE.
#[derive(Debug, Clone)]
pub struct EnvIde {
    var: String,
}

impl EnvIde {
    /// Read the active project from the variable named in `config`.
    pub fn new(config: &IdeConfig) -> Self {
        Self {
            var: config.project_env.clone(),
        }
    }

    /// The environment variable consulted.
    pub fn var(&self) -> &str {
        &self.var
    }
}

impl IdeIntegration for EnvIde {
    fn project_dir(&self) -> Option<PathBuf> {
        std::env::var_os(&self.var)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }
}
