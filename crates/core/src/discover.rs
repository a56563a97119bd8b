//! Glob-based file discovery.
//!
//! [`FileDiscovery`] turns a root directory plus a set of glob patterns into
//! an explicit list of file paths. Discovery is deliberately separate from
//! the sweep engine: the engine only ever sees an injected path list, so the
//! transformation logic is testable without a filesystem walk.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::errors::DiscoverError;

/// Directory names that are never descended into.
const SKIP_DIRS: &[&str] = &[".git", ".svn"];

/// Recursively walks a root directory and collects files whose relative
/// path matches at least one glob pattern.
#[derive(Debug, Clone)]
pub struct FileDiscovery {
    root: PathBuf,
    patterns: Vec<String>,
}

impl FileDiscovery {
    /// Create a discovery over `root` with the given glob patterns.
    ///
    /// Patterns are matched against the forward-slash relative path, e.g.
    /// `src/**/*.rs` or `*.txt`.
    pub fn new(root: impl Into<PathBuf>, patterns: Vec<String>) -> Self {
        Self {
            root: root.into(),
            patterns,
        }
    }

    /// Walk the tree and return every matching file, sorted by path.
    ///
    /// VCS metadata directories (`.git`, `.svn`) are skipped. Returns
    /// [`DiscoverError::RootNotFound`] if the root is not a directory.
    pub fn discover(&self) -> Result<Vec<PathBuf>, DiscoverError> {
        if !self.root.is_dir() {
            return Err(DiscoverError::RootNotFound(
                self.root.display().to_string(),
            ));
        }

        let mut matched = Vec::new();
        self.walk(&self.root, "", &mut matched)?;
        matched.sort();

        info!(
            root = %self.root.display(),
            patterns = self.patterns.len(),
            count = matched.len(),
            "file discovery complete"
        );
        Ok(matched)
    }

    fn walk(
        &self,
        dir: &Path,
        rel_prefix: &str,
        matched: &mut Vec<PathBuf>,
    ) -> Result<(), DiscoverError> {
        let entries = std::fs::read_dir(dir).map_err(|e| DiscoverError::WalkFailed {
            path: dir.display().to_string(),
            source: e,
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| DiscoverError::WalkFailed {
                path: dir.display().to_string(),
                source: e,
            })?;
            let name = entry.file_name().to_string_lossy().into_owned();
            let rel = if rel_prefix.is_empty() {
                name.clone()
            } else {
                format!("{}/{}", rel_prefix, name)
            };

            let path = entry.path();
            if path.is_dir() {
                if SKIP_DIRS.contains(&name.as_str()) {
                    debug!(dir = rel.as_str(), "skipping VCS metadata directory");
                    continue;
                }
                self.walk(&path, &rel, matched)?;
            } else if self.matches(&rel) {
                debug!(path = rel.as_str(), "file matched");
                matched.push(path);
            }
        }

        Ok(())
    }

    /// Test whether a relative path matches any configured pattern.
    fn matches(&self, rel_path: &str) -> bool {
        self.patterns
            .iter()
            .any(|pat| glob_match::glob_match(pat, rel_path))
    }
}
