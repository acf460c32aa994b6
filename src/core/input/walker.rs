//! Input file discovery.
//!
//! Expands the paths given on the command line into the list of text
//! files to chunk. Directories are walked recursively and filtered by
//! glob patterns and file size; a path naming a file is taken as is.

use glob::Pattern;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::core::error::{ChunkError, Result};

/// Recursive file finder with include/exclude filters
#[derive(Debug, Clone)]
pub struct FileWalker {
    /// Patterns a file name or path must match (e.g. "*.txt")
    include: Vec<Pattern>,

    /// Patterns that drop a file or a whole directory (e.g. "**/.git/**")
    exclude: Vec<Pattern>,

    max_file_size_bytes: u64,
}

fn compile(kind: &str, patterns: &[String]) -> Result<Vec<Pattern>> {
    patterns
        .iter()
        .map(|p| {
            Pattern::new(p)
                .map_err(|e| ChunkError::InvalidPattern(format!("{kind} pattern '{p}': {e}")))
        })
        .collect()
}

impl FileWalker {
    /// Create a walker
    ///
    /// # Errors
    ///
    /// Returns `ChunkError::InvalidPattern` if a glob does not parse.
    pub fn new(include: &[String], exclude: &[String], max_file_size_mb: usize) -> Result<Self> {
        Ok(Self {
            include: compile("include", include)?,
            exclude: compile("exclude", exclude)?,
            max_file_size_bytes: (max_file_size_mb as u64) * 1024 * 1024,
        })
    }

    /// Files under `root` in a stable (sorted) order.
    ///
    /// A `root` that is a regular file is returned unfiltered. Walk
    /// errors are logged and skipped.
    ///
    /// # Errors
    ///
    /// Returns `ChunkError::InputError` if `root` does not exist.
    pub fn collect_files(&self, root: &Path) -> Result<Vec<PathBuf>> {
        if !root.exists() {
            return Err(ChunkError::InputError(format!(
                "Path does not exist: {}",
                root.display()
            )));
        }
        if root.is_file() {
            return Ok(vec![root.to_path_buf()]);
        }

        let mut files = Vec::new();
        let walk = WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| e.path() == root || self.enter(e));

        for entry in walk {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("Walk error: {}", e);
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }

            if let Ok(metadata) = entry.metadata() {
                if metadata.len() > self.max_file_size_bytes {
                    tracing::debug!(
                        "Skipping large file: {:?} ({} bytes)",
                        entry.path(),
                        metadata.len()
                    );
                    continue;
                }
            }

            if self.accepts(entry.path()) {
                files.push(entry.into_path());
            }
        }

        Ok(files)
    }

    /// Whether to descend into (or look at) a directory entry.
    /// Hidden and excluded directories are pruned.
    fn enter(&self, entry: &DirEntry) -> bool {
        if !entry.file_type().is_dir() {
            return true;
        }
        let hidden = entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with('.'));
        if hidden {
            return false;
        }
        let excluded = self.exclude.iter().any(|p| p.matches_path(entry.path()));
        if excluded {
            tracing::debug!("Skipping excluded directory: {:?}", entry.path());
        }
        !excluded
    }

    /// Include patterns match the full path or the file name; an empty
    /// include list accepts everything. Exclude patterns always win.
    fn accepts(&self, path: &Path) -> bool {
        let file_name = path.file_name().and_then(|f| f.to_str());
        let included = self.include.is_empty()
            || self
                .include
                .iter()
                .any(|p| p.matches_path(path) || file_name.is_some_and(|f| p.matches(f)));

        included && !self.exclude.iter().any(|p| p.matches_path(path))
    }
}
