//! Document loading.
//!
//! Turns input paths into [`Document`]s ready for the chunker:
//! 1. Expand paths into files (walker)
//! 2. Read file contents as UTF-8
//! 3. Optionally clean the text
//!
//! Unreadable files are logged and skipped so one bad file does not
//! stop a run.

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::cleaner::{CleaningOptions, TextCleaner};
use crate::core::error::{ChunkError, Result};
use crate::core::input::FileWalker;
use crate::core::types::Document;

/// A file that could not be loaded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

/// Result of loading a set of paths
#[derive(Debug, Clone, Default)]
pub struct LoadedDocuments {
    pub documents: Vec<Document>,
    pub skipped: Vec<SkippedFile>,
}

/// Reads input files into documents
pub struct DocumentLoader {
    walker: FileWalker,
    cleaning: Option<CleaningOptions>,
}

impl DocumentLoader {
    /// Create a loader.
    ///
    /// # Arguments
    ///
    /// * `walker` - Expands directories into files
    /// * `cleaning` - Cleanup applied to each text, `None` to keep the
    ///   text as read
    pub fn new(walker: FileWalker, cleaning: Option<CleaningOptions>) -> Self {
        Self { walker, cleaning }
    }

    /// Load every file reachable from `paths`, in order.
    ///
    /// Document ids are the file paths as given or found.
    ///
    /// # Errors
    ///
    /// Returns `ChunkError::InputError` if a path does not exist.
    pub fn load(&self, paths: &[PathBuf]) -> Result<LoadedDocuments> {
        let mut loaded = LoadedDocuments::default();

        for root in paths {
            let files = self.walker.collect_files(root)?;
            tracing::debug!("Found {} files under {:?}", files.len(), root);

            for file in files {
                match self.read(&file) {
                    Ok(text) => loaded
                        .documents
                        .push(Document::new(file.display().to_string(), text)),
                    Err(e) => {
                        tracing::warn!("Failed to load {:?}: {}", file, e);
                        loaded.skipped.push(SkippedFile {
                            path: file,
                            reason: e.message(),
                        });
                    }
                }
            }
        }

        tracing::info!(
            "Loaded {} documents ({} files skipped)",
            loaded.documents.len(),
            loaded.skipped.len()
        );
        Ok(loaded)
    }

    fn read(&self, path: &Path) -> Result<String> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::InvalidData {
                ChunkError::InputError(format!("Not a UTF-8 text file: {}", path.display()))
            } else {
                ChunkError::InputError(format!("Failed to read {}: {e}", path.display()))
            }
        })?;

        Ok(match &self.cleaning {
            Some(options) => TextCleaner::clean(&contents, options),
            None => contents,
        })
    }
}
