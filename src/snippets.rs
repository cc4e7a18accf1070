//! Shared snippet library.
//!
//! A snippet library is a directory of reusable script files shared across
//! projects. Snippets are found by regular expression over their names and
//! contents, and copied into a project's scripts directory.

use std::fs;
use std::path::{Path, PathBuf};

use regex::{Regex, RegexBuilder};

use crate::error::{ProjkitError, Result};

/// A search hit in the snippet library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetMatch {
    /// Snippet path relative to the library root.
    pub snippet: PathBuf,
    /// 1-based line number, or `None` when the name matched.
    pub line: Option<usize>,
    /// The matching line, or the snippet name.
    pub text: String,
}

/// A directory of reusable snippets.
#[derive(Debug, Clone)]
pub struct SnippetLibrary {
    root: PathBuf,
}

impl SnippetLibrary {
    /// Open the library at `root`.
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }

    /// The library root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// All snippets, relative to the root, sorted. Hidden entries are skipped.
    pub fn list(&self) -> Result<Vec<PathBuf>> {
        let mut snippets = Vec::new();
        collect(&self.root, &self.root, &mut snippets)?;
        snippets.sort();
        Ok(snippets)
    }

    /// Find snippets whose name or contents match `pattern`, case-insensitively.
    pub fn search(&self, pattern: &str) -> Result<Vec<SnippetMatch>> {
        let regex = search_regex(pattern)?;
        let mut matches = Vec::new();

        for snippet in self.list()? {
            let name = snippet.display().to_string();
            if regex.is_match(&name) {
                matches.push(SnippetMatch {
                    snippet: snippet.clone(),
                    line: None,
                    text: name,
                });
            }

            let content = match fs::read_to_string(self.root.join(&snippet)) {
                Ok(content) => content,
                Err(e) if e.kind() == std::io::ErrorKind::InvalidData => {
                    tracing::warn!("Skipping non-text snippet {}", snippet.display());
                    continue;
                }
                Err(e) => return Err(e.into()),
            };

            for (i, line) in content.lines().enumerate() {
                if regex.is_match(line) {
                    matches.push(SnippetMatch {
                        snippet: snippet.clone(),
                        line: Some(i + 1),
                        text: line.trim_end().to_string(),
                    });
                }
            }
        }

        Ok(matches)
    }

    /// Resolve `name` to a snippet.
    ///
    /// Tries the relative path first, then the file name, then the file
    /// stem. The first snippet in sorted order wins.
    pub fn find(&self, name: &str) -> Result<PathBuf> {
        let snippets = self.list()?;
        let wanted = Path::new(name);

        let found = snippets
            .iter()
            .find(|s| s.as_path() == wanted)
            .or_else(|| {
                snippets
                    .iter()
                    .find(|s| s.file_name().is_some_and(|n| n == name))
            })
            .or_else(|| {
                snippets
                    .iter()
                    .find(|s| s.file_stem().is_some_and(|n| n == name))
            });

        found.cloned().ok_or_else(|| ProjkitError::SnippetNotFound {
            name: name.to_string(),
        })
    }

    /// Copy the snippet `name` into `dest_dir`, keeping its file name.
    ///
    /// Refuses to overwrite an existing file unless `force` is set.
    pub fn copy(&self, name: &str, dest_dir: &Path, force: bool) -> Result<PathBuf> {
        let snippet = self.find(name)?;
        let file_name = snippet.file_name().ok_or_else(|| ProjkitError::SnippetNotFound {
            name: name.to_string(),
        })?;
        let dest = dest_dir.join(file_name);

        if dest.exists() && !force {
            return Err(ProjkitError::SnippetExists { path: dest });
        }

        fs::create_dir_all(dest_dir)?;
        fs::copy(self.root.join(&snippet), &dest)?;
        tracing::debug!("Copied {} to {}", snippet.display(), dest.display());
        Ok(dest)
    }
}

fn collect(root: &Path, dir: &Path, snippets: &mut Vec<PathBuf>) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_name().to_string_lossy().starts_with('.') {
            continue;
        }

        let path = entry.path();
        if path.is_dir() {
            collect(root, &path, snippets)?;
        } else if path.is_file() {
            if let Ok(relative) = path.strip_prefix(root) {
                snippets.push(relative.to_path_buf());
            }
        }
    }
    Ok(())
}

fn search_regex(pattern: &str) -> Result<Regex> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|e| anyhow::anyhow!("invalid search pattern '{}': {}", pattern, e).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn library() -> (TempDir, SnippetLibrary) {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::create_dir_all(root.join("models")).unwrap();
        fs::create_dir_all(root.join(".git")).unwrap();
        fs::write(root.join(".git/HEAD"), "ref: refs/heads/main\n").unwrap();
        fs::write(
            root.join("models/mixed_model.R"),
            "# Description: Random intercept model\nfit <- lmer(y ~ x + (1 | id))\n",
        )
        .unwrap();
        fs::write(
            root.join("plot_residuals.R"),
            "# Description: Residual plots\nplot(resid(fit))\n",
        )
        .unwrap();
        let library = SnippetLibrary::new(root);
        (temp, library)
    }

    #[test]
    fn lists_snippets_recursively_without_hidden() {
        let (_temp, library) = library();

        let snippets = library.list().unwrap();

        assert_eq!(
            snippets,
            [
                PathBuf::from("models/mixed_model.R"),
                PathBuf::from("plot_residuals.R"),
            ]
        );
    }

    #[test]
    fn search_matches_contents_with_line_numbers() {
        let (_temp, library) = library();

        let matches = library.search("lmer").unwrap();

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].snippet, PathBuf::from("models/mixed_model.R"));
        assert_eq!(matches[0].line, Some(2));
    }

    #[test]
    fn search_matches_names() {
        let (_temp, library) = library();

        let matches = library.search("^plot_").unwrap();

        assert!(matches
            .iter()
            .any(|m| m.line.is_none() && m.snippet == Path::new("plot_residuals.R")));
    }

    #[test]
    fn search_is_case_insensitive() {
        let (_temp, library) = library();

        let matches = library.search("RESIDUAL PLOTS").unwrap();

        assert_eq!(matches.len(), 1);
    }

    #[test]
    fn invalid_pattern_is_an_error() {
        let (_temp, library) = library();
        assert!(library.search("(unclosed").is_err());
    }

    #[test]
    fn find_by_path_name_or_stem() {
        let (_temp, library) = library();

        let expected = PathBuf::from("models/mixed_model.R");
        assert_eq!(library.find("models/mixed_model.R").unwrap(), expected);
        assert_eq!(library.find("mixed_model.R").unwrap(), expected);
        assert_eq!(library.find("mixed_model").unwrap(), expected);
    }

    #[test]
    fn find_unknown_is_not_found() {
        let (_temp, library) = library();

        let err = library.find("anova").unwrap_err();

        assert!(matches!(err, ProjkitError::SnippetNotFound { .. }));
    }

    #[test]
    fn copy_into_scripts_dir() {
        let (_temp, library) = library();
        let project = TempDir::new().unwrap();
        let scripts = project.path().join("scripts");

        let dest = library.copy("mixed_model", &scripts, false).unwrap();

        assert_eq!(dest, scripts.join("mixed_model.R"));
        assert!(fs::read_to_string(dest).unwrap().contains("lmer"));
    }

    #[test]
    fn copy_refuses_to_overwrite() {
        let (_temp, library) = library();
        let project = TempDir::new().unwrap();
        fs::write(project.path().join("plot_residuals.R"), "mine\n").unwrap();

        let err = library
            .copy("plot_residuals", project.path(), false)
            .unwrap_err();

        assert!(matches!(err, ProjkitError::SnippetExists { .. }));
        assert_eq!(
            fs::read_to_string(project.path().join("plot_residuals.R")).unwrap(),
            "mine\n"
        );
    }

    #[test]
    fn copy_with_force_overwrites() {
        let (_temp, library) = library();
        let project = TempDir::new().unwrap();
        fs::write(project.path().join("plot_residuals.R"), "mine\n").unwrap();

        library.copy("plot_residuals", project.path(), true).unwrap();

        assert!(fs::read_to_string(project.path().join("plot_residuals.R"))
            .unwrap()
            .contains("resid"));
    }
}
