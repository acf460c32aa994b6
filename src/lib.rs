//! segmenta - Structure-aware document chunking for RAG pipelines
//!
//! Splits a document's plain text into ordered, overlapping chunks sized
//! for embedding. Segmentation follows the document's own structure:
//! paragraphs for prose, articles and sections for legal texts, topic
//! shifts for essays and reports.
//!
//! # Architecture
//!
//! - **core**: Domain logic
//!   - types, error, config, xdg
//!   - patterns (structure detection)
//!   - strategies (simple, legal, semantic)
//!   - registry, chunker (orchestration)
//!   - cleaner, input (text cleanup, file loading)
//!
//! - **cli**: Command-line adapter (depends on core)
//!
//! # Key Features
//!
//! - Sizes measured in characters, offsets safe for any UTF-8 text
//! - Chunks tile the source text with no gaps or overlaps
//! - Numbered lists are never split from their introduction
//! - Pluggable strategies through a registry
//!
//! # Example
//!
//! ```
//! use segmenta::{ChunkConfig, Chunker};
//!
//! let config = ChunkConfig::new(120, 20, 10, "simple").unwrap();
//! let text = "Primer párrafo del documento.\n\nSegundo párrafo del documento.";
//! let chunks = Chunker::new().chunk("doc-1", text, &config).unwrap();
//!
//! assert_eq!(chunks.len(), 1);
//! assert_eq!(chunks[0].document_id, "doc-1");
//! ```

// Core domain logic
pub mod core;

// Command-line adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use core::chunker::Chunker;
pub use core::config::Config;
pub use core::error::{ChunkError, Result};
pub use core::registry::{StrategyFactory, StrategyRegistry};
pub use core::strategies::{LegalStrategy, SegmentationStrategy, SemanticStrategy, SimpleStrategy};
pub use core::types::*;
