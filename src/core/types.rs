//! Core data types for the segmenta chunking engine.
//!
//! This module defines the configuration consumed by the engine,
//! the intermediate segments strategies produce, and the final
//! chunk records handed to the vectorization collaborator.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::error::{ChunkError, Result};

/// Default target chunk size in characters
pub const DEFAULT_TARGET_SIZE: usize = 800;

/// Default overlap between adjacent chunks in characters
pub const DEFAULT_OVERLAP: usize = 100;

/// Default minimum chunk size in characters
pub const DEFAULT_MIN_SIZE: usize = 100;

/// Default strategy name
pub const DEFAULT_STRATEGY: &str = "simple";

/// Default factor by which a legal unit may exceed the target size
/// and still be emitted as a single segment
pub const DEFAULT_LEGAL_TOLERANCE: f64 = 1.5;

/// Immutable chunking configuration.
///
/// All sizes are measured in characters, not bytes. Fields are
/// private so a `ChunkConfig` can only exist in a validated state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChunkConfig {
    target_size: usize,
    overlap: usize,
    min_size: usize,
    strategy_name: String,
    legal_tolerance: f64,
}

impl ChunkConfig {
    /// Create a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns `ChunkError::InvalidConfig` if any size is zero,
    /// `overlap >= target_size`, `min_size >= target_size` or the
    /// strategy name is blank.
    ///
    /// # Example
    ///
    /// ```
    /// use segmenta::ChunkConfig;
    ///
    /// let config = ChunkConfig::new(800, 100, 100, "legal").unwrap();
    /// assert_eq!(config.target_size(), 800);
    /// assert!(ChunkConfig::new(100, 100, 10, "simple").is_err());
    /// ```
    pub fn new(
        target_size: usize,
        overlap: usize,
        min_size: usize,
        strategy_name: impl Into<String>,
    ) -> Result<Self> {
        let config = Self {
            target_size,
            overlap,
            min_size,
            strategy_name: strategy_name.into(),
            legal_tolerance: DEFAULT_LEGAL_TOLERANCE,
        };
        config.validate()?;
        Ok(config)
    }

    /// Return a copy with a different legal size tolerance.
    ///
    /// The tolerance must be a finite number `>= 1.0`.
    pub fn with_legal_tolerance(mut self, tolerance: f64) -> Result<Self> {
        self.legal_tolerance = tolerance;
        self.validate()?;
        Ok(self)
    }

    /// Return a copy that uses a different strategy
    pub fn with_strategy(mut self, strategy_name: impl Into<String>) -> Result<Self> {
        self.strategy_name = strategy_name.into();
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<()> {
        if self.target_size == 0 {
            return Err(ChunkError::InvalidConfig(
                "Target size must be non-zero".to_string(),
            ));
        }

        if self.min_size == 0 {
            return Err(ChunkError::InvalidConfig(
                "Minimum size must be non-zero".to_string(),
            ));
        }

        if self.overlap >= self.target_size {
            return Err(ChunkError::InvalidConfig(format!(
                "Overlap ({}) must be less than target size ({})",
                self.overlap, self.target_size
            )));
        }

        if self.min_size >= self.target_size {
            return Err(ChunkError::InvalidConfig(format!(
                "Minimum size ({}) must be less than target size ({})",
                self.min_size, self.target_size
            )));
        }

        if self.strategy_name.trim().is_empty() {
            return Err(ChunkError::InvalidConfig(
                "Strategy name must not be empty".to_string(),
            ));
        }

        if !self.legal_tolerance.is_finite() || self.legal_tolerance < 1.0 {
            return Err(ChunkError::InvalidConfig(format!(
                "Legal tolerance must be >= 1.0 (got {})",
                self.legal_tolerance
            )));
        }

        Ok(())
    }

    pub fn target_size(&self) -> usize {
        self.target_size
    }

    pub fn overlap(&self) -> usize {
        self.overlap
    }

    pub fn min_size(&self) -> usize {
        self.min_size
    }

    pub fn strategy_name(&self) -> &str {
        &self.strategy_name
    }

    pub fn legal_tolerance(&self) -> f64 {
        self.legal_tolerance
    }

    /// Largest size (in characters) a legal unit may have and still be
    /// kept whole when it could otherwise be split at child headers
    pub fn legal_limit(&self) -> usize {
        (self.target_size as f64 * self.legal_tolerance).floor() as usize
    }
}

impl Default for ChunkConfig {
    fn default() -> Self {
        Self {
            target_size: DEFAULT_TARGET_SIZE,
            overlap: DEFAULT_OVERLAP,
            min_size: DEFAULT_MIN_SIZE,
            strategy_name: DEFAULT_STRATEGY.to_string(),
            legal_tolerance: DEFAULT_LEGAL_TOLERANCE,
        }
    }
}

/// Structural classification of a segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SegmentKind {
    /// Blank-line-delimited prose
    Paragraph,
    /// Legal article ("Artículo 6")
    Article,
    /// Section or chapter of a structured document
    Section,
    /// Numbered list kept as one block
    ListGroup,
    /// Span between two topic boundaries
    TopicBlock,
}

impl SegmentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SegmentKind::Paragraph => "paragraph",
            SegmentKind::Article => "article",
            SegmentKind::Section => "section",
            SegmentKind::ListGroup => "list-group",
            SegmentKind::TopicBlock => "topic-block",
        }
    }
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A strategy's atomic output before post-processing.
///
/// `start` and `end` are byte offsets into the source text and must
/// fall on character boundaries; `text` is the source slice they
/// delimit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSegment {
    pub text: String,
    pub start: usize,
    pub end: usize,
    pub label: Option<String>,
    pub kind: SegmentKind,
}

impl RawSegment {
    /// Build a segment from a span of `source`.
    ///
    /// The span is clamped to the source length; callers are expected
    /// to pass character-aligned offsets.
    pub fn from_span(source: &str, start: usize, end: usize, kind: SegmentKind) -> Self {
        let end = end.min(source.len());
        let start = start.min(end);
        Self {
            text: source.get(start..end).unwrap_or_default().to_string(),
            start,
            end,
            label: None,
            kind,
        }
    }

    /// Attach a label (e.g. "Artículo 6.1")
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Length of the trimmed text in characters
    pub fn char_len(&self) -> usize {
        self.text.trim().chars().count()
    }
}

/// A final, sized, metadata-tagged text unit produced for embedding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// Identifier of the source document
    pub document_id: String,

    /// 0-based position of this chunk within its document
    pub sequence_index: usize,

    /// Overlap prefix followed by the core text
    pub text: String,

    /// Byte length of the overlap prefix inside `text`
    pub overlap_len: usize,

    /// Character offset where the chunk starts in the source text
    pub char_start: usize,

    /// Character offset where the chunk ends in the source text
    pub char_end: usize,

    /// Byte offset where the chunk starts in the source text
    pub byte_start: usize,

    /// Byte offset where the chunk ends in the source text
    pub byte_end: usize,

    /// Structural label, e.g. "Artículo 6.1"
    pub label: Option<String>,

    /// Kind of the segment this chunk came from
    pub kind: SegmentKind,
}

impl Chunk {
    /// Text without the injected overlap
    pub fn core_text(&self) -> &str {
        self.text.get(self.overlap_len..).unwrap_or(&self.text)
    }

    /// Text copied from the end of the previous chunk, if any
    pub fn overlap_text(&self) -> &str {
        self.text
            .get(..self.overlap_len)
            .map(str::trim_end)
            .unwrap_or_default()
    }

    /// Number of characters of source text covered by this chunk
    pub fn char_len(&self) -> usize {
        self.char_end - self.char_start
    }
}

/// A document handed to the engine by the loading collaborator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub text: String,
}

impl Document {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// A document that was skipped during a batch run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedDocument {
    pub document_id: String,
    pub reason: String,
}

/// Result of chunking several documents
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChunkBatch {
    /// Chunks of every processed document, in input order
    pub chunks: Vec<Chunk>,

    /// Number of documents that produced chunks
    pub documents_chunked: usize,

    /// Documents skipped with a warning
    pub skipped: Vec<SkippedDocument>,
}

impl ChunkBatch {
    pub fn total_chunks(&self) -> usize {
        self.chunks.len()
    }

    /// Chunks belonging to one document
    pub fn chunks_for<'a>(&'a self, document_id: &'a str) -> impl Iterator<Item = &'a Chunk> + 'a {
        self.chunks
            .iter()
            .filter(move |c| c.document_id == document_id)
    }
}
