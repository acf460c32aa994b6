//! Uniform post-processing applied to every strategy's output.
//!
//! The passes run in a fixed order: span normalisation, merging of
//! undersized segments, then overlap injection and metadata. Each pass
//! is a pure function of its input so results are reproducible.

use std::ops::Range;

use crate::core::error::{ChunkError, Result};
use crate::core::patterns::{char_len, has_content, is_word_boundary, skip_whitespace};
use crate::core::types::{Chunk, RawSegment, SegmentKind};

/// A segment reduced to its span in the source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Piece {
    pub range: Range<usize>,
    pub label: Option<String>,
    pub kind: SegmentKind,
}

impl Piece {
    /// One paragraph covering the whole text
    pub fn whole(text: &str) -> Self {
        Self {
            range: 0..text.len(),
            label: None,
            kind: SegmentKind::Paragraph,
        }
    }

    /// Trimmed length in characters
    fn size(&self, text: &str) -> usize {
        text.get(self.range.clone())
            .map_or(0, |s| s.trim().chars().count())
    }
}

/// Validate, order and clip raw segments, then stretch their spans so
/// they partition `text`.
///
/// Segments are sorted by position (stable, so ties keep strategy
/// order). A segment overlapping its predecessor is clipped to start
/// where the predecessor ends; segments left empty or holding only
/// whitespace are dropped. Text between two segments is given to the
/// earlier one, and leading text to the first.
///
/// # Errors
///
/// Returns `ChunkError::InvalidSegment` for a span that is reversed,
/// out of bounds or not on a character boundary.
pub(crate) fn normalize(text: &str, mut segments: Vec<RawSegment>) -> Result<Vec<Piece>> {
    for seg in &segments {
        if seg.start > seg.end || seg.end > text.len() {
            return Err(ChunkError::InvalidSegment(format!(
                "span {}..{} is outside a document of {} bytes",
                seg.start,
                seg.end,
                text.len()
            )));
        }
        if !text.is_char_boundary(seg.start) || !text.is_char_boundary(seg.end) {
            return Err(ChunkError::InvalidSegment(format!(
                "span {}..{} does not fall on character boundaries",
                seg.start, seg.end
            )));
        }
    }

    segments.sort_by_key(|seg| (seg.start, seg.end));

    let mut pieces: Vec<Piece> = Vec::with_capacity(segments.len());
    let mut cursor = 0;
    for seg in segments {
        let start = seg.start.max(cursor);
        if start >= seg.end || !has_content(text, start..seg.end) {
            continue;
        }
        cursor = seg.end;
        pieces.push(Piece {
            range: start..seg.end,
            label: seg.label,
            kind: seg.kind,
        });
    }

    if let Some(first) = pieces.first_mut() {
        first.range.start = 0;
    }
    for i in 1..pieces.len() {
        pieces[i - 1].range.end = pieces[i].range.start;
    }
    if let Some(last) = pieces.last_mut() {
        last.range.end = text.len();
    }

    Ok(pieces)
}

/// Concatenate undersized pieces with a neighbour.
///
/// A piece shorter than `min_size` joins the following piece, or the
/// preceding one when it is last. This repeats until every piece meets
/// the minimum or a single piece remains.
pub(crate) fn merge_short(text: &str, mut pieces: Vec<Piece>, min_size: usize) -> Vec<Piece> {
    let mut i = 0;
    while pieces.len() > 1 && i < pieces.len() {
        if pieces[i].size(text) >= min_size {
            i += 1;
            continue;
        }

        if i + 1 < pieces.len() {
            let next = pieces.remove(i + 1);
            let current = pieces[i].clone();
            pieces[i] = join(text, current, next);
        } else {
            let last = pieces.remove(i);
            let previous = pieces[i - 1].clone();
            pieces[i - 1] = join(text, previous, last);
            i -= 1;
        }
    }
    pieces
}

/// Join two adjacent pieces. The larger one (the earlier on a tie)
/// supplies label and kind; a missing label is taken from the other.
fn join(text: &str, first: Piece, second: Piece) -> Piece {
    let range = first.range.start..second.range.end;
    let (major, minor) = if second.size(text) > first.size(text) {
        (second, first)
    } else {
        (first, second)
    };
    Piece {
        range,
        label: major.label.or(minor.label),
        kind: major.kind,
    }
}

/// The last `overlap` characters of `core`, moved forward to the next
/// word start when the cut falls inside a word
pub(crate) fn overlap_tail(core: &str, overlap: usize) -> &str {
    if overlap == 0 {
        return "";
    }

    let total = core.chars().count();
    let mut start = if total <= overlap {
        0
    } else {
        core.char_indices()
            .nth(total - overlap)
            .map_or(core.len(), |(i, _)| i)
    };

    if !is_word_boundary(core, start) {
        start = core[start..]
            .find(char::is_whitespace)
            .map_or(core.len(), |offset| start + offset);
    }
    start = skip_whitespace(core, start, core.len());

    &core[start..]
}

/// Turn partitioning pieces into chunks: inject overlap from each
/// predecessor's core text and attach offsets and sequence numbers.
pub(crate) fn build_chunks(
    document_id: &str,
    text: &str,
    pieces: Vec<Piece>,
    overlap: usize,
) -> Vec<Chunk> {
    let mut chunks = Vec::with_capacity(pieces.len());
    let mut char_start = 0;
    let mut previous_core: Option<&str> = None;

    for (sequence_index, piece) in pieces.into_iter().enumerate() {
        let core = text.get(piece.range.clone()).unwrap_or_default().trim();
        let char_end = char_start + char_len(text, piece.range.clone());

        let tail = previous_core.map_or("", |prev| overlap_tail(prev, overlap));
        let (chunk_text, overlap_len) = if tail.is_empty() {
            (core.to_string(), 0)
        } else {
            (format!("{tail} {core}"), tail.len() + 1)
        };

        chunks.push(Chunk {
            document_id: document_id.to_string(),
            sequence_index,
            text: chunk_text,
            overlap_len,
            char_start,
            char_end,
            byte_start: piece.range.start,
            byte_end: piece.range.end,
            label: piece.label,
            kind: piece.kind,
        });

        char_start = char_end;
        previous_core = Some(core);
    }
    chunks
}
