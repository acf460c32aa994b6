//! Error types and error handling for the segmenta chunking engine.
//!
//! Configuration problems (unknown strategy, invalid sizes) are fatal
//! for a run and surface before any text is scanned. Per-document
//! problems (empty input) are recoverable: batch callers log them and
//! move on to the next document.

use thiserror::Error;

/// Result type alias for segmenta operations
pub type Result<T> = std::result::Result<T, ChunkError>;

/// Main error type for the chunking engine
#[derive(Error, Debug)]
pub enum ChunkError {
    #[error("Unknown chunking strategy: '{0}'")]
    UnknownStrategy(String),

    #[error("Empty document: {0}")]
    EmptyDocument(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid segment: {0}")]
    InvalidSegment(String),

    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),

    #[error("Input error: {0}")]
    InputError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl ChunkError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this error aborts a whole run (misconfiguration)
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            ChunkError::UnknownStrategy(_)
                | ChunkError::InvalidConfig(_)
                | ChunkError::InvalidPattern(_)
                | ChunkError::TomlError(_)
        )
    }

    /// Check if this error only concerns a single document
    pub fn is_document_error(&self) -> bool {
        matches!(self, ChunkError::EmptyDocument(_))
    }
}
