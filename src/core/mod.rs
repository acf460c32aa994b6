//! Core domain logic
//!
//! Everything needed to turn a document's text into chunks, independent
//! of how the text was obtained or where the chunks go.
//!
//! # Architecture
//!
//! - **types**: Configuration, segments and chunk records
//! - **error**: Error types and Result alias
//! - **patterns**: Regex detectors for structure (headers, lists, sentences)
//! - **strategies**: Simple, legal and semantic segmentation
//! - **registry**: Name-to-strategy lookup
//! - **postprocess**: Span normalisation, short-segment merging, overlap
//! - **chunker**: Orchestrator tying the above together
//! - **cleaner**: Optional text cleanup before chunking
//! - **input**: File walking and document loading
//! - **config**: Configuration loading (TOML + environment)
//! - **xdg**: XDG directory handling

pub mod chunker;
pub mod cleaner;
pub mod config;
pub mod error;
pub mod input;
pub mod patterns;
pub(crate) mod postprocess;
pub mod registry;
pub mod strategies;
pub mod types;
pub mod xdg;

// Re-export key types for convenience
pub use chunker::Chunker;
pub use config::Config;
pub use error::{ChunkError, Result};
pub use registry::{StrategyFactory, StrategyRegistry};
