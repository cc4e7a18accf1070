//! Library status from the lockfile and the installed library.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::config::LibraryConfig;
use crate::error::{ProjkitError, Result};
use crate::fields::extract_field;

use super::{LibraryStatus, PackageStatus};

/// Folder inside the manifest directory holding installed packages.
const LIBRARY_DIR: &str = "library";

/// Installed packages sit at most this deep below the library folder
/// (platform and interpreter-version folders come first).
const MAX_LIBRARY_DEPTH: usize = 4;

/// Leading lines of a package `DESCRIPTION` searched for its version.
const DESCRIPTION_LINES: usize = 100;

#[derive(Debug, Deserialize)]
struct Lockfile {
    #[serde(rename = "Packages", default)]
    packages: BTreeMap<String, LockedPackage>,
}

#[derive(Debug, Deserialize)]
struct LockedPackage {
    #[serde(rename = "Version")]
    version: Option<String>,
}

/// Compares the lockfile with the packages installed in the library.
#[derive(Debug, Clone)]
pub struct LockfileLibrary {
    manifest_dir: PathBuf,
    lockfile: PathBuf,
}

impl LockfileLibrary {
    /// Create from the library section of the configuration.
    pub fn new(config: &LibraryConfig) -> Self {
        Self {
            manifest_dir: config.manifest_dir.clone(),
            lockfile: config.lockfile.clone(),
        }
    }

    fn recorded(&self, project_root: &Path) -> Result<BTreeMap<String, Option<String>>> {
        let path = project_root.join(&self.lockfile);
        let content = fs::read_to_string(&path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ProjkitError::FileNotFound { path: path.clone() }
            } else {
                ProjkitError::Io(e)
            }
        })?;

        let lockfile: Lockfile =
            serde_json::from_str(&content).map_err(|e| ProjkitError::LockfileParseError {
                path: path.clone(),
                message: e.to_string(),
            })?;

        Ok(lockfile
            .packages
            .into_iter()
            .map(|(name, pkg)| (name, pkg.version))
            .collect())
    }

    fn installed(&self, project_root: &Path) -> Result<BTreeMap<String, String>> {
        let mut packages = BTreeMap::new();
        let library = project_root.join(&self.manifest_dir).join(LIBRARY_DIR);
        if library.is_dir() {
            collect_installed(&library, 0, &mut packages)?;
        }
        Ok(packages)
    }
}

fn collect_installed(
    dir: &Path,
    depth: usize,
    packages: &mut BTreeMap<String, String>,
) -> Result<()> {
    if depth > MAX_LIBRARY_DEPTH {
        return Ok(());
    }

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_dir() {
            continue;
        }

        let description = path.join("DESCRIPTION");
        if description.is_file() {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            let version = extract_field(&description, "Version", DESCRIPTION_LINES)?;
            packages.insert(name, version);
        } else {
            collect_installed(&path, depth + 1, packages)?;
        }
    }

    Ok(())
}

impl LibraryStatus for LockfileLibrary {
    fn status(&self, project_root: &Path, exclude: &[String]) -> Result<Vec<PackageStatus>> {
        let recorded = self.recorded(project_root)?;
        let installed = self.installed(project_root)?;

        let names: BTreeSet<&String> = recorded.keys().chain(installed.keys()).collect();

        Ok(names
            .into_iter()
            .filter(|name| !exclude.contains(*name))
            .map(|name| PackageStatus {
                name: name.clone(),
                recorded: recorded.get(name).cloned().flatten(),
                installed: installed.get(name).filter(|v| !v.is_empty()).cloned(),
            })
            .collect())
    }
}
