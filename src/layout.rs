//! Project directory layout.
//!
//! A [`ProjectLayout`] resolves the standard folders of an analysis project
//! against its root. Checks only look at whether the folders exist;
//! [`ProjectLayout::create`] builds them for `projkit init`.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::config::ProjectConfig;
use crate::error::Result;

/// Resolved folder paths for one project.
#[derive(Debug, Clone)]
pub struct ProjectLayout {
    root: PathBuf,
    scripts: PathBuf,
    models: PathBuf,
    extra: Vec<PathBuf>,
    snapshot_file: PathBuf,
    script_extension: String,
}

impl ProjectLayout {
    /// Resolve the layout described by `config` under `root`.
    pub fn new(root: &Path, config: &ProjectConfig) -> Self {
        Self {
            root: root.to_path_buf(),
            scripts: root.join(&config.directories.scripts),
            models: root.join(&config.directories.models),
            extra: config
                .directories
                .extra
                .iter()
                .map(|d| root.join(d))
                .collect(),
            snapshot_file: root.join(&config.snapshot.file),
            script_extension: config.fields.extension.clone(),
        }
    }

    /// The project root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The scripts directory.
    pub fn scripts_dir(&self) -> &Path {
        &self.scripts
    }

    /// The models directory.
    pub fn models_dir(&self) -> &Path {
        &self.models
    }

    /// The environment-snapshot file.
    pub fn snapshot_file(&self) -> &Path {
        &self.snapshot_file
    }

    /// All folders in creation order: scripts, models, then the extras.
    pub fn directories(&self) -> impl Iterator<Item = &Path> {
        [self.scripts.as_path(), self.models.as_path()]
            .into_iter()
            .chain(self.extra.iter().map(|p| p.as_path()))
    }

    /// Required folders (scripts and models) that do not exist.
    pub fn missing_required(&self) -> Vec<&Path> {
        [self.scripts.as_path(), self.models.as_path()]
            .into_iter()
            .filter(|p| !p.is_dir())
            .collect()
    }

    /// Create every folder that does not exist yet.
    ///
    /// Returns the folders that were created.
    pub fn create(&self) -> Result<Vec<PathBuf>> {
        let mut created = Vec::new();
        for dir in self.directories() {
            if !dir.is_dir() {
                fs::create_dir_all(dir)?;
                tracing::debug!("Created {}", dir.display());
                created.push(dir.to_path_buf());
            }
        }
        Ok(created)
    }

    /// Script files directly inside the scripts directory, sorted.
    ///
    /// Only files with the configured script extension count; dotfiles
    /// such as `.gitkeep` or `.Rhistory` are skipped. A missing scripts
    /// directory has no scripts.
    pub fn script_files(&self) -> Result<Vec<PathBuf>> {
        if !self.scripts.is_dir() {
            return Ok(Vec::new());
        }

        let mut files = Vec::new();
        for entry in fs::read_dir(&self.scripts)? {
            let path = entry?.path();
            if path.is_file() && self.is_script(&path) {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }

    fn is_script(&self, path: &Path) -> bool {
        let hidden = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_none_or(|n| n.starts_with('.'));
        let extension = path.extension().and_then(|e| e.to_str());
        !hidden && extension == Some(self.script_extension.as_str())
    }

    /// The most recently modified script and its modification time.
    pub fn newest_script(&self) -> Result<Option<(PathBuf, SystemTime)>> {
        let mut newest: Option<(PathBuf, SystemTime)> = None;
        for path in self.script_files()? {
            let modified = fs::metadata(&path)?.modified()?;
            if newest.as_ref().is_none_or(|(_, t)| modified > *t) {
                newest = Some((path, modified));
            }
        }
        Ok(newest)
    }

    /// Path relative to the project root, for display.
    pub fn relative<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.root).unwrap_or(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::time::Duration;
    use tempfile::TempDir;

    fn layout(temp: &TempDir) -> ProjectLayout {
        ProjectLayout::new(temp.path(), &ProjectConfig::default())
    }

    #[test]
    fn resolves_paths_against_root() {
        let temp = TempDir::new().unwrap();
        let layout = layout(&temp);

        assert_eq!(layout.scripts_dir(), temp.path().join("scripts"));
        assert_eq!(layout.models_dir(), temp.path().join("models"));
        assert_eq!(layout.snapshot_file(), temp.path().join("session_info.txt"));
    }

    #[test]
    fn create_builds_all_folders() {
        let temp = TempDir::new().unwrap();
        let layout = layout(&temp);

        let created = layout.create().unwrap();

        assert_eq!(created.len(), 5);
        assert!(layout.missing_required().is_empty());
        assert!(temp.path().join("data").is_dir());
    }

    #[test]
    fn create_skips_existing_folders() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("scripts")).unwrap();

        let created = layout(&temp).create().unwrap();

        assert_eq!(created.len(), 4);
        assert!(!created.contains(&temp.path().join("scripts")));
    }

    #[test]
    fn missing_required_lists_absent_folders() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("scripts")).unwrap();

        let layout = layout(&temp);

        assert_eq!(layout.missing_required(), [temp.path().join("models")]);
    }

    #[test]
    fn no_scripts_directory_means_no_scripts() {
        let temp = TempDir::new().unwrap();

        let layout = layout(&temp);

        assert!(layout.script_files().unwrap().is_empty());
        assert!(layout.newest_script().unwrap().is_none());
    }

    #[test]
    fn newest_script_has_latest_mtime() {
        let temp = TempDir::new().unwrap();
        let layout = layout(&temp);
        layout.create().unwrap();

        let base = SystemTime::now() - Duration::from_secs(3600);
        for (name, offset) in [("a.R", 10), ("b.R", 30), ("c.R", 20)] {
            let path = layout.scripts_dir().join(name);
            let file = File::create(&path).unwrap();
            file.set_modified(base + Duration::from_secs(offset)).unwrap();
        }

        let (path, _) = layout.newest_script().unwrap().unwrap();

        assert_eq!(path, layout.scripts_dir().join("b.R"));
    }

    #[test]
    fn script_files_skip_dotfiles_and_other_extensions() {
        let temp = TempDir::new().unwrap();
        let layout = layout(&temp);
        layout.create().unwrap();
        for name in [".gitkeep", ".Rhistory", "notes.txt", "b.R", "a.R"] {
            File::create(layout.scripts_dir().join(name)).unwrap();
        }

        let files = layout.script_files().unwrap();

        assert_eq!(
            files,
            [layout.scripts_dir().join("a.R"), layout.scripts_dir().join("b.R")]
        );
    }

    #[test]
    fn gitkeep_alone_means_no_scripts() {
        let temp = TempDir::new().unwrap();
        let layout = layout(&temp);
        layout.create().unwrap();
        File::create(layout.scripts_dir().join(".gitkeep")).unwrap();

        assert!(layout.newest_script().unwrap().is_none());
    }

    #[test]
    fn relative_strips_root() {
        let temp = TempDir::new().unwrap();
        let layout = layout(&temp);

        assert_eq!(
            layout.relative(&temp.path().join("scripts/a.R")),
            Path::new("scripts/a.R")
        );
    }
}
