//! Private package library status.
//!
//! The dependency tool records locked package versions in a lockfile and
//! installs them into a project-private library. projkit never changes
//! either; it only asks which packages are out of step.
//!
//! - [`LibraryStatus`] is the query seam used by the session checker
//! - [`LockfileLibrary`] answers it from the lockfile and the library folder

mod lockfile;

pub use lockfile::LockfileLibrary;

use std::path::Path;

use crate::error::Result;

/// State of one package in the private library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageStatus {
    /// Package name.
    pub name: String,
    /// Version recorded in the lockfile, if any.
    pub recorded: Option<String>,
    /// Version installed in the library, if any.
    pub installed: Option<String>,
}

impl PackageStatus {
    /// Whether the package is recorded and installed at the same version.
    pub fn is_resolved(&self) -> bool {
        match (&self.recorded, &self.installed) {
            (Some(recorded), Some(installed)) => recorded == installed,
            _ => false,
        }
    }
}

/// Query for the status of a project's private library.
pub trait LibraryStatus {
    /// Status of every package known to the lockfile or the library,
    /// leaving out the packages named in `exclude`.
    fn status(&self, project_root: &Path, exclude: &[String]) -> Result<Vec<PackageStatus>>;
}
