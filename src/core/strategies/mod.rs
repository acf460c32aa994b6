//! Segmentation strategies.
//!
//! A strategy turns a document's full text into an ordered list of
//! [`RawSegment`]s. Strategies know nothing about overlap, minimum
//! sizes across segments or chunk metadata: the orchestrator applies
//! those uniformly afterwards.
//!
//! - **simple**: greedy paragraph packing with sentence-level splits
//! - **legal**: article/section/chapter units, numbered lists intact
//! - **semantic**: topic blocks between discourse/heading boundaries

pub mod legal;
pub mod semantic;
pub mod simple;

pub use legal::LegalStrategy;
pub use semantic::SemanticStrategy;
pub use simple::SimpleStrategy;

use std::ops::Range;

use crate::core::patterns::{
    advance_chars, char_len, list_runs, paragraph_spans, sentence_boundaries, skip_whitespace,
    trim_span,
};
use crate::core::types::{ChunkConfig, RawSegment, SegmentKind};

/// A single segmentation capability
pub trait SegmentationStrategy: Send + Sync {
    /// Name the strategy is registered under
    fn name(&self) -> &str;

    /// Split `text` into ordered raw segments
    fn segment(&self, text: &str) -> Vec<RawSegment>;
}

/// A paragraph-level block; `is_list` marks a fused numbered-list run
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Block {
    pub span: Range<usize>,
    pub is_list: bool,
}

/// Paragraph blocks inside `range`.
///
/// With `keep_lists`, paragraphs belonging to one numbered-list run
/// are fused into a single block so no boundary can fall between two
/// items.
pub(crate) fn paragraph_blocks(text: &str, range: Range<usize>, keep_lists: bool) -> Vec<Block> {
    let spans = paragraph_spans(text, range.clone());
    if !keep_lists {
        return spans
            .into_iter()
            .map(|span| Block {
                span,
                is_list: false,
            })
            .collect();
    }

    let runs = list_runs(text, range);
    let mut blocks: Vec<Block> = Vec::with_capacity(spans.len());
    for span in spans {
        let run = runs
            .iter()
            .find(|r| span.start < r.end && r.start < span.end);

        let continues_run = match (run, blocks.last()) {
            (Some(run), Some(last)) => last.is_list && last.span.end > run.start,
            _ => false,
        };

        if continues_run {
            if let Some(last) = blocks.last_mut() {
                last.span.end = last.span.end.max(span.end);
            }
        } else {
            blocks.push(Block {
                span,
                is_list: run.is_some(),
            });
        }
    }
    blocks
}

/// Greedy paragraph packing shared by the simple strategy and the
/// legal fallback.
///
/// Consecutive blocks are accumulated while the group stays within
/// `target_size`. A paragraph larger than the target is cut at
/// sentence boundaries; a list block larger than the target is kept
/// whole. A trailing group shorter than `min_size` joins the previous
/// segment.
pub(crate) fn pack_paragraphs(
    text: &str,
    range: Range<usize>,
    config: &ChunkConfig,
    keep_lists: bool,
) -> Vec<RawSegment> {
    let target = config.target_size();
    let mut segments = Vec::new();
    let mut current: Option<(Range<usize>, usize, bool)> = None;

    for block in paragraph_blocks(text, range, keep_lists) {
        if let Some((span, count, all_lists)) = current.take() {
            if char_len(text, span.start..block.span.end) <= target {
                current = Some((
                    span.start..block.span.end,
                    count + 1,
                    all_lists && block.is_list,
                ));
                continue;
            }
            segments.push(group_segment(text, span, count, all_lists));
        }

        if char_len(text, block.span.clone()) <= target {
            current = Some((block.span, 1, block.is_list));
        } else if block.is_list {
            segments.push(RawSegment::from_span(
                text,
                block.span.start,
                block.span.end,
                SegmentKind::ListGroup,
            ));
        } else {
            segments.extend(split_to_fit(text, block.span, target).into_iter().map(
                |piece| RawSegment::from_span(text, piece.start, piece.end, SegmentKind::Paragraph),
            ));
        }
    }

    if let Some((span, count, all_lists)) = current {
        segments.push(group_segment(text, span, count, all_lists));
    }

    absorb_short_tail(text, &mut segments, config.min_size());
    segments
}

fn group_segment(text: &str, span: Range<usize>, count: usize, all_lists: bool) -> RawSegment {
    let kind = if count == 1 && all_lists {
        SegmentKind::ListGroup
    } else {
        SegmentKind::Paragraph
    };
    RawSegment::from_span(text, span.start, span.end, kind)
}

/// Merge a final segment shorter than `min_size` into its predecessor
pub(crate) fn absorb_short_tail(text: &str, segments: &mut Vec<RawSegment>, min_size: usize) {
    if segments.len() < 2 {
        return;
    }
    let short = segments.last().is_some_and(|s| s.char_len() < min_size);
    if !short {
        return;
    }
    if let Some(tail) = segments.pop() {
        if let Some(prev) = segments.last_mut() {
            let label = prev.label.take().or(tail.label);
            *prev = RawSegment::from_span(text, prev.start, tail.end, prev.kind);
            prev.label = label;
        }
    }
}

/// Cut `span` into pieces of at most `target` characters.
///
/// Each cut is placed at the last sentence boundary at or before the
/// size limit; failing that, at the last whitespace before it; failing
/// that, at the first whitespace after it. A single word longer than
/// the target is never broken.
pub(crate) fn split_to_fit(text: &str, span: Range<usize>, target: usize) -> Vec<Range<usize>> {
    let boundaries = sentence_boundaries(text, span.clone());
    let mut pieces = Vec::new();
    let mut start = skip_whitespace(text, span.start, span.end);

    while start < span.end {
        if char_len(text, start..span.end) <= target {
            pieces.extend(trim_span(text, start..span.end));
            break;
        }

        let limit = advance_chars(text, start, target);
        let cut = boundaries
            .iter()
            .copied()
            .filter(|&b| b > start && b <= limit)
            .last()
            .or_else(|| last_whitespace(text, start..limit))
            .or_else(|| first_whitespace(text, limit..span.end))
            .unwrap_or(span.end);

        pieces.extend(trim_span(text, start..cut));
        start = skip_whitespace(text, cut, span.end);
    }
    pieces
}

/// Byte position of the last whitespace character in `range` that has
/// non-whitespace text before it
pub(crate) fn last_whitespace(text: &str, range: Range<usize>) -> Option<usize> {
    let slice = text.get(range.clone())?;
    slice
        .char_indices()
        .rev()
        .find(|&(i, c)| i > 0 && c.is_whitespace())
        .map(|(i, _)| range.start + i)
}

/// Byte position of the first whitespace character in `range`
pub(crate) fn first_whitespace(text: &str, range: Range<usize>) -> Option<usize> {
    let slice = text.get(range.clone())?;
    slice
        .char_indices()
        .find(|&(_, c)| c.is_whitespace())
        .map(|(i, _)| range.start + i)
}
