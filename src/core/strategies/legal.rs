//! Structure-preserving segmentation for legal and regulatory text.
//!
//! The document is read as a hierarchy of chapters, sections and
//! articles. A unit runs from its header to the next header of equal or
//! higher rank. Units that fit within `target_size * legal_tolerance`
//! are emitted whole; larger units are opened up at their child headers.
//! A unit without children is never cut, however long it is.

use super::{pack_paragraphs, SegmentationStrategy};
use crate::core::patterns::{char_len, detect_headers, has_content, trim_span, Header, HeaderRank};
use crate::core::types::{ChunkConfig, RawSegment, SegmentKind};

/// Article/section/chapter aware strategy
#[derive(Debug, Clone)]
pub struct LegalStrategy {
    config: ChunkConfig,
}

impl LegalStrategy {
    pub const NAME: &'static str = "legal";

    pub fn new(config: &ChunkConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Emit every unit at one level of the hierarchy.
    ///
    /// `headers` are the headers inside the enclosing unit and `end` is
    /// where that unit stops.
    fn emit_level(&self, text: &str, headers: &[Header], end: usize, out: &mut Vec<RawSegment>) {
        let mut i = 0;
        while i < headers.len() {
            let rank = headers[i].rank;
            let next = headers[i + 1..]
                .iter()
                .position(|h| h.rank >= rank)
                .map_or(headers.len(), |offset| i + 1 + offset);
            let unit_end = headers.get(next).map_or(end, |h| h.start);

            self.emit_unit(text, &headers[i], &headers[i + 1..next], unit_end, out);
            i = next;
        }
    }

    fn emit_unit(
        &self,
        text: &str,
        header: &Header,
        children: &[Header],
        end: usize,
        out: &mut Vec<RawSegment>,
    ) {
        let Some(span) = trim_span(text, header.start..end) else {
            return;
        };
        let kind = kind_for(header.rank);

        if children.is_empty() || char_len(text, span.clone()) <= self.config.legal_limit() {
            out.push(
                RawSegment::from_span(text, span.start, span.end, kind)
                    .with_label(header.label.as_str()),
            );
            return;
        }

        tracing::debug!(
            "opening '{}' at {} child headers",
            header.label,
            children.len()
        );

        if let Some(intro) = trim_span(text, header.start..children[0].start) {
            out.push(
                RawSegment::from_span(text, intro.start, intro.end, kind)
                    .with_label(header.label.as_str()),
            );
        }
        self.emit_level(text, children, end, out);
    }
}

fn kind_for(rank: HeaderRank) -> SegmentKind {
    match rank {
        HeaderRank::Article => SegmentKind::Article,
        HeaderRank::Section | HeaderRank::Chapter => SegmentKind::Section,
    }
}

impl SegmentationStrategy for LegalStrategy {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn segment(&self, text: &str) -> Vec<RawSegment> {
        let headers = detect_headers(text);
        let Some(first) = headers.first() else {
            tracing::debug!("no legal headers found, using paragraph segmentation");
            return pack_paragraphs(text, 0..text.len(), &self.config, true);
        };

        let mut segments = Vec::new();
        if has_content(text, 0..first.start) {
            segments.extend(pack_paragraphs(text, 0..first.start, &self.config, true));
        }
        self.emit_level(text, &headers, text.len(), &mut segments);

        tracing::debug!(
            "legal strategy produced {} segments from {} headers",
            segments.len(),
            headers.len()
        );
        segments
    }
}
