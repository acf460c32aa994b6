//! Chunk orchestration.
//!
//! Coordinates a chunking run for one or more documents:
//! 1. Resolve the configured strategy (before any text is read)
//! 2. Segment the text with that strategy
//! 3. Normalise spans and merge undersized segments
//! 4. Inject overlap and attach metadata
//!
//! # Example
//!
//! ```
//! use segmenta::{ChunkConfig, Chunker};
//!
//! let chunker = Chunker::new();
//! let config = ChunkConfig::new(200, 20, 10, "legal").unwrap();
//! let text = "Artículo 1. Objeto.\nEsta norma regula el acceso.\n\n\
//!             Artículo 2. Ámbito.\nSe aplica en todo el territorio.";
//!
//! let chunks = chunker.chunk("reglamento", text, &config).unwrap();
//! assert_eq!(chunks.len(), 2);
//! assert_eq!(chunks[1].label.as_deref(), Some("Artículo 2"));
//! ```

use crate::core::error::{ChunkError, Result};
use crate::core::postprocess::{build_chunks, merge_short, normalize, Piece};
use crate::core::registry::StrategyRegistry;
use crate::core::types::{Chunk, ChunkBatch, ChunkConfig, Document, SkippedDocument};

/// Chunking orchestrator
///
/// Holds no per-call state: the same `Chunker` can be shared across
/// threads and documents.
#[derive(Debug, Clone)]
pub struct Chunker {
    registry: StrategyRegistry,
}

impl Chunker {
    /// Create a chunker with the built-in strategies
    pub fn new() -> Self {
        Self::with_registry(StrategyRegistry::with_builtins())
    }

    /// Create a chunker that resolves strategies from `registry`
    pub fn with_registry(registry: StrategyRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &StrategyRegistry {
        &self.registry
    }

    /// Mutable access for registering custom strategies
    pub fn registry_mut(&mut self) -> &mut StrategyRegistry {
        &mut self.registry
    }

    /// Check that `config` names a registered strategy.
    ///
    /// No text is touched; call this before a batch to fail fast.
    pub fn validate(&self, config: &ChunkConfig) -> Result<()> {
        self.registry.resolve(config.strategy_name()).map(|_| ())
    }

    /// Chunk a single document.
    ///
    /// # Arguments
    ///
    /// * `document_id` - Identifier copied into every chunk
    /// * `text` - Full plain-text body of the document
    /// * `config` - Sizing parameters and strategy name
    ///
    /// # Errors
    ///
    /// * `ChunkError::UnknownStrategy` if the strategy is not
    ///   registered (checked before the text is inspected)
    /// * `ChunkError::EmptyDocument` if `text` is empty or whitespace
    /// * `ChunkError::InvalidSegment` if the strategy reports a span
    ///   outside the text
    pub fn chunk(
        &self,
        document_id: &str,
        text: &str,
        config: &ChunkConfig,
    ) -> Result<Vec<Chunk>> {
        let factory = self.registry.resolve(config.strategy_name())?;

        if text.trim().is_empty() {
            return Err(ChunkError::EmptyDocument(document_id.to_string()));
        }

        let strategy = factory(config);
        let segments = strategy.segment(text);
        let segment_count = segments.len();

        let mut pieces = normalize(text, segments)?;
        if pieces.is_empty() {
            tracing::warn!(
                "Strategy '{}' produced no segments for '{}', keeping the whole text",
                strategy.name(),
                document_id
            );
            pieces.push(Piece::whole(text));
        }

        let pieces = merge_short(text, pieces, config.min_size());
        let chunks = build_chunks(document_id, text, pieces, config.overlap());

        tracing::debug!(
            "Chunked '{}' with '{}': {} segments -> {} chunks",
            document_id,
            strategy.name(),
            segment_count,
            chunks.len()
        );

        Ok(chunks)
    }

    /// Chunk several documents with one configuration.
    ///
    /// The configuration is validated first, so a misconfigured run
    /// fails before any document is processed. Empty documents are
    /// logged and listed in [`ChunkBatch::skipped`]; any other error
    /// aborts the run.
    pub fn chunk_documents(
        &self,
        documents: &[Document],
        config: &ChunkConfig,
    ) -> Result<ChunkBatch> {
        self.validate(config)
            .inspect_err(|e| tracing::error!("Chunking aborted, misconfiguration: {}", e))?;

        let mut batch = ChunkBatch::default();
        for document in documents {
            match self.chunk(&document.id, &document.text, config) {
                Ok(chunks) => {
                    batch.documents_chunked += 1;
                    batch.chunks.extend(chunks);
                }
                Err(e) if e.is_document_error() => {
                    tracing::warn!("Skipping document '{}': {}", document.id, e);
                    batch.skipped.push(SkippedDocument {
                        document_id: document.id.clone(),
                        reason: e.message(),
                    });
                }
                Err(e) => {
                    if e.is_fatal() {
                        tracing::error!("Chunking aborted, misconfiguration: {}", e);
                    } else {
                        tracing::error!("Chunking aborted at document '{}': {}", document.id, e);
                    }
                    return Err(e);
                }
            }
        }

        tracing::info!(
            "Chunking complete: {} documents chunked, {} skipped, {} chunks created",
            batch.documents_chunked,
            batch.skipped.len(),
            batch.total_chunks()
        );

        Ok(batch)
    }
}

impl Default for Chunker {
    fn default() -> Self {
        Self::new()
    }
}
