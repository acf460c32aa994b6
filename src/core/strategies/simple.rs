//! Baseline segmentation for unstructured prose.

use super::{pack_paragraphs, SegmentationStrategy};
use crate::core::types::{ChunkConfig, RawSegment};

/// Paragraph packing strategy.
///
/// Splits on blank lines, packs consecutive paragraphs up to the
/// target size and cuts oversized paragraphs at sentence boundaries.
#[derive(Debug, Clone)]
pub struct SimpleStrategy {
    config: ChunkConfig,
}

impl SimpleStrategy {
    pub const NAME: &'static str = "simple";

    pub fn new(config: &ChunkConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }
}

impl SegmentationStrategy for SimpleStrategy {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn segment(&self, text: &str) -> Vec<RawSegment> {
        let segments = pack_paragraphs(text, 0..text.len(), &self.config, false);
        tracing::debug!("simple strategy produced {} segments", segments.len());
        segments
    }
}
