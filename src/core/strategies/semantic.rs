//! Topic-boundary segmentation for narrative and technical text.
//!
//! Primary boundaries are discourse markers at sentence starts,
//! heading-like lines and large formatting breaks. When they are too
//! sparse to keep units near the target size, paragraph breaks become
//! secondary boundaries: a unit is only cut there when it would
//! otherwise outgrow the target.

use std::collections::BTreeMap;
use std::ops::Range;

use super::SegmentationStrategy;
use crate::core::patterns::{
    advance_chars, char_len, discourse_marker_at, formatting_breaks, has_content,
    is_heading_line, line_spans, paragraph_breaks, sentence_boundaries, sentence_starts,
    skip_whitespace, trim_span,
};
use crate::core::types::{ChunkConfig, RawSegment, SegmentKind};

/// Default maximum length of a heading-like line, in characters
pub const DEFAULT_HEADING_MAX_CHARS: usize = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Boundary {
    Primary,
    Secondary,
}

/// Topic block strategy
#[derive(Debug, Clone)]
pub struct SemanticStrategy {
    config: ChunkConfig,
    heading_max_chars: usize,
}

impl SemanticStrategy {
    pub const NAME: &'static str = "semantic";

    pub fn new(config: &ChunkConfig) -> Self {
        Self {
            config: config.clone(),
            heading_max_chars: DEFAULT_HEADING_MAX_CHARS,
        }
    }

    /// Override the maximum length of a line treated as a heading
    pub fn with_heading_max_chars(mut self, max_chars: usize) -> Self {
        self.heading_max_chars = max_chars;
        self
    }

    /// Heading lines keyed by the position of their first character.
    ///
    /// A line only counts when it opens the document or follows a blank
    /// line, so a wrapped sentence cannot pass for a heading.
    fn headings<'t>(&self, text: &'t str) -> BTreeMap<usize, &'t str> {
        let mut headings = BTreeMap::new();
        let mut after_blank = true;
        for line in line_spans(text) {
            let content = &text[line.clone()];
            if content.trim().is_empty() {
                after_blank = true;
                continue;
            }
            if after_blank && is_heading_line(content, self.heading_max_chars) {
                headings.insert(skip_whitespace(text, line.start, line.end), content.trim());
            }
            after_blank = false;
        }
        headings
    }

    fn boundaries(
        &self,
        text: &str,
        headings: &BTreeMap<usize, &str>,
    ) -> BTreeMap<usize, Boundary> {
        let mut boundaries: BTreeMap<usize, Boundary> = sentence_starts(text)
            .into_iter()
            .filter(|&pos| discourse_marker_at(text, pos).is_some())
            .chain(headings.keys().copied())
            .chain(formatting_breaks(text))
            .map(|pos| (pos, Boundary::Primary))
            .collect();

        let total = char_len(text, 0..text.len());
        if (boundaries.len() + 1).saturating_mul(self.config.target_size()) < total {
            tracing::debug!(
                "{} topic boundaries for {} chars, adding paragraph breaks",
                boundaries.len(),
                total
            );
            for pos in paragraph_breaks(text) {
                boundaries.entry(pos).or_insert(Boundary::Secondary);
            }
        }
        boundaries
    }

    /// Group the text between boundaries into candidate units
    fn units(
        &self,
        text: &str,
        content: Range<usize>,
        boundaries: &BTreeMap<usize, Boundary>,
    ) -> Vec<Range<usize>> {
        let target = self.config.target_size();
        let mut units = Vec::new();
        let mut unit_start = content.start;

        let cuts: Vec<(usize, Boundary)> = boundaries
            .range(content.start + 1..content.end)
            .map(|(&pos, &kind)| (pos, kind))
            .collect();

        for (i, &(pos, kind)) in cuts.iter().enumerate() {
            let cut = match kind {
                Boundary::Primary => true,
                Boundary::Secondary => {
                    let piece_end = cuts.get(i + 1).map_or(content.end, |&(next, _)| next);
                    char_len(text, unit_start..piece_end) > target
                }
            };
            if cut {
                units.extend(trim_span(text, unit_start..pos));
                unit_start = pos;
            }
        }
        units.extend(trim_span(text, unit_start..content.end));
        units
    }
}

/// Join each unit shorter than `min_size` with the unit after it. The
/// last unit of the document may stay short.
fn merge_short_units(text: &str, units: Vec<Range<usize>>, min_size: usize) -> Vec<Range<usize>> {
    let mut merged = Vec::with_capacity(units.len());
    let mut pending: Option<Range<usize>> = None;

    for unit in units {
        let span = match pending.take() {
            Some(open) => open.start..unit.end,
            None => unit,
        };
        if char_len(text, span.clone()) < min_size {
            pending = Some(span);
        } else {
            merged.push(span);
        }
    }
    merged.extend(pending);
    merged
}

/// Halve `span` until every piece fits `target`.
///
/// Each cut goes to the sentence boundary closest to the midpoint, or
/// to the closest whitespace when the span has no sentence boundary. A
/// span with neither is kept whole.
fn split_at_midpoint(text: &str, span: Range<usize>, target: usize, out: &mut Vec<Range<usize>>) {
    if char_len(text, span.clone()) <= target {
        out.push(span);
        return;
    }

    let Some(cut) = midpoint_cut(text, span.clone()) else {
        out.push(span);
        return;
    };

    for half in [span.start..cut, cut..span.end] {
        if let Some(half) = trim_span(text, half) {
            split_at_midpoint(text, half, target, out);
        }
    }
}

fn midpoint_cut(text: &str, span: Range<usize>) -> Option<usize> {
    let mid = advance_chars(text, span.start, char_len(text, span.clone()) / 2);

    sentence_boundaries(text, span.clone())
        .into_iter()
        .filter(|&b| b > span.start && has_content(text, b..span.end))
        .min_by_key(|&b| b.abs_diff(mid))
        .or_else(|| {
            text.get(span.clone())?
                .char_indices()
                .filter(|&(i, c)| i > 0 && c.is_whitespace())
                .map(|(i, _)| span.start + i)
                .min_by_key(|&pos| pos.abs_diff(mid))
        })
}

impl SegmentationStrategy for SemanticStrategy {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn segment(&self, text: &str) -> Vec<RawSegment> {
        let Some(content) = trim_span(text, 0..text.len()) else {
            return Vec::new();
        };

        let headings = self.headings(text);
        let boundaries = self.boundaries(text, &headings);
        let units = self.units(text, content, &boundaries);
        let units = merge_short_units(text, units, self.config.min_size());

        let mut segments = Vec::new();
        for unit in units {
            let label = headings.get(&unit.start).copied();
            let mut pieces = Vec::new();
            split_at_midpoint(text, unit, self.config.target_size(), &mut pieces);

            segments.extend(pieces.into_iter().map(|piece| {
                let segment =
                    RawSegment::from_span(text, piece.start, piece.end, SegmentKind::TopicBlock);
                match label {
                    Some(label) => segment.with_label(label),
                    None => segment,
                }
            }));
        }

        tracing::debug!(
            "semantic strategy produced {} segments ({} boundaries)",
            segments.len(),
            boundaries.len()
        );
        segments
    }
}
