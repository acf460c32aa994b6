//! Boundary and structure detectors.
//!
//! Every function here is pure: it takes the source text (and
//! optionally a byte range inside it) and returns byte offsets that
//! fall on character boundaries. Strategies combine these detectors;
//! tests can assert exact positions without running the pipeline.

use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::Range;

/// Blank line: newline, optional horizontal whitespace, newline
static PARAGRAPH_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n[ \t\r]*\n").unwrap());

/// Sentence terminator with optional closing quotes/brackets, followed
/// by whitespace
static SENTENCE_END: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"([.!?…]+["'»”’)\]]*)\s"#).unwrap());

/// Article, section and chapter headers at line start
static HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?im)^[ \t]*((?:art[íi]culo|art\.|article|secci[óo]n|sec\.|section|cap[íi]tulo|cap\.|t[íi]tulo|chapter)[ \t]*(?:\d+(?:\.\d+)*|(?-i:[IVXLCDM]+))(?:[ \t]+(?:bis|ter|quater))?)(?:[ \t]*[.:)\-–—º°]|[ \t\r]*$)",
    )
    .unwrap()
});

/// Numbered list marker at line start ("1)", "2.")
static LIST_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^[ \t]*(\d{1,3})[.)][ \t]+\S").unwrap());

/// Topic-shift phrases at the start of a sentence
static DISCOURSE_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(?:por otro lado|por otra parte|en cambio|sin embargo|no obstante|además|asimismo|en conclusión|en resumen|por último|however|on the other hand|in contrast|moreover|furthermore|in conclusion)\b",
    )
    .unwrap()
});

/// Two or more consecutive blank lines
static WIDE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n[ \t\r]*\n[ \t\r]*\n\s*").unwrap());

/// Separator line such as "***", "---" or "==="
static SEPARATOR_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[ \t]*[*\-_=](?:[ \t]*[*\-_=]){2,}[ \t\r]*$").unwrap());

/// Rank of a structural header. Ordering: Chapter > Section > Article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HeaderRank {
    Article,
    Section,
    Chapter,
}

/// A recognised structural header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// Byte offset of the header text
    pub start: usize,
    /// Byte offset just past the header label
    pub end: usize,
    pub rank: HeaderRank,
    /// Header text as written, e.g. "Artículo 6.1"
    pub label: String,
}

/// A numbered list item marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListItem {
    /// Byte offset of the marker
    pub start: usize,
    pub number: u32,
}

/// Number of characters in `text[span]`
pub fn char_len(text: &str, span: Range<usize>) -> usize {
    text.get(span).map_or(0, |s| s.chars().count())
}

/// Whether `text[span]` contains anything besides whitespace
pub fn has_content(text: &str, span: Range<usize>) -> bool {
    text.get(span).is_some_and(|s| !s.trim().is_empty())
}

/// Shrink a span to exclude leading and trailing whitespace.
///
/// Returns `None` when the span holds only whitespace.
pub fn trim_span(text: &str, span: Range<usize>) -> Option<Range<usize>> {
    let slice = text.get(span.clone())?;
    let trimmed = slice.trim();
    if trimmed.is_empty() {
        return None;
    }
    let start = span.start + (slice.len() - slice.trim_start().len());
    Some(start..start + trimmed.len())
}

/// First non-whitespace position at or after `pos` (capped at `limit`)
pub fn skip_whitespace(text: &str, pos: usize, limit: usize) -> usize {
    match text.get(pos..limit) {
        Some(rest) => pos + (rest.len() - rest.trim_start().len()),
        None => limit,
    }
}

/// Byte offset reached after advancing `chars` characters from `start`
pub fn advance_chars(text: &str, start: usize, chars: usize) -> usize {
    text.get(start..)
        .and_then(|rest| rest.char_indices().nth(chars).map(|(i, _)| start + i))
        .unwrap_or(text.len())
}

/// Whether a cut at `pos` would not split a word
pub fn is_word_boundary(text: &str, pos: usize) -> bool {
    if pos == 0 || pos >= text.len() {
        return true;
    }
    if !text.is_char_boundary(pos) {
        return false;
    }
    let before = text[..pos].chars().next_back();
    let after = text[pos..].chars().next();
    matches!(before, Some(c) if c.is_whitespace()) || matches!(after, Some(c) if c.is_whitespace())
}

/// Blank-line-delimited blocks inside `range`, each trimmed
pub fn paragraph_spans(text: &str, range: Range<usize>) -> Vec<Range<usize>> {
    let Some(slice) = text.get(range.clone()) else {
        return Vec::new();
    };

    let mut spans = Vec::new();
    let mut cursor = 0;
    for m in PARAGRAPH_BREAK.find_iter(slice) {
        if let Some(span) = trim_span(text, range.start + cursor..range.start + m.start()) {
            spans.push(span);
        }
        cursor = m.end();
    }
    if let Some(span) = trim_span(text, range.start + cursor..range.end) {
        spans.push(span);
    }
    spans
}

/// Start of the content following each blank-line break
pub fn paragraph_breaks(text: &str) -> Vec<usize> {
    PARAGRAPH_BREAK
        .find_iter(text)
        .map(|m| skip_whitespace(text, m.end(), text.len()))
        .filter(|&pos| pos < text.len())
        .collect()
}

/// Byte positions just past each sentence terminator inside `range`.
///
/// A terminator only counts when the next word does not start with a
/// lower-case letter or a digit, so "etc. y" or "art. 6" stay in one
/// sentence.
pub fn sentence_boundaries(text: &str, range: Range<usize>) -> Vec<usize> {
    let Some(slice) = text.get(range.clone()) else {
        return Vec::new();
    };

    SENTENCE_END
        .captures_iter(slice)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let punct = caps.get(1)?;
            let next_word = skip_whitespace(slice, whole.end(), slice.len());
            let continues = slice[next_word..]
                .chars()
                .next()
                .is_some_and(|c| c.is_lowercase() || c.is_ascii_digit());
            (!continues).then_some(range.start + punct.end())
        })
        .collect()
}

/// Positions where a sentence or a line starts (first non-whitespace
/// character), in document order
pub fn sentence_starts(text: &str) -> Vec<usize> {
    let len = text.len();
    let mut starts = vec![skip_whitespace(text, 0, len)];
    starts.extend(
        sentence_boundaries(text, 0..len)
            .into_iter()
            .map(|b| skip_whitespace(text, b, len)),
    );
    starts.extend(
        text.match_indices('\n')
            .map(|(i, _)| skip_whitespace(text, i + 1, len)),
    );
    starts.retain(|&p| p < len);
    starts.sort_unstable();
    starts.dedup();
    starts
}

/// Lines of `text` as byte spans, excluding the line terminator
pub fn line_spans(text: &str) -> Vec<Range<usize>> {
    let mut spans = Vec::new();
    let mut offset = 0;
    for line in text.split_inclusive('\n') {
        let content = line.trim_end_matches(['\n', '\r']);
        spans.push(offset..offset + content.len());
        offset += line.len();
    }
    spans
}

/// All article, section and chapter headers in document order
pub fn detect_headers(text: &str) -> Vec<Header> {
    HEADER
        .captures_iter(text)
        .filter_map(|caps| {
            let label = caps.get(1)?;
            Some(Header {
                start: label.start(),
                end: label.end(),
                rank: header_rank(label.as_str()),
                label: label.as_str().trim().to_string(),
            })
        })
        .collect()
}

fn header_rank(label: &str) -> HeaderRank {
    let lower = label.to_lowercase();
    if lower.starts_with("art") {
        HeaderRank::Article
    } else if lower.starts_with("sec") {
        HeaderRank::Section
    } else {
        HeaderRank::Chapter
    }
}

/// Numbered list markers at line start inside `range`
pub fn list_items(text: &str, range: Range<usize>) -> Vec<ListItem> {
    let Some(slice) = text.get(range.clone()) else {
        return Vec::new();
    };

    LIST_ITEM
        .captures_iter(slice)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let number = caps.get(1)?.as_str().parse().ok()?;
            let marker = skip_whitespace(slice, whole.start(), slice.len());
            Some(ListItem {
                start: range.start + marker,
                number,
            })
        })
        .collect()
}

/// Spans covering runs of consecutively numbered list items.
///
/// A run needs at least two items numbered `n, n+1, ...`. It ends at
/// the first blank line after its last item (or at `range.end`).
pub fn list_runs(text: &str, range: Range<usize>) -> Vec<Range<usize>> {
    let items = list_items(text, range.clone());
    let mut runs = Vec::new();

    let mut i = 0;
    while i < items.len() {
        let mut j = i;
        while j + 1 < items.len() && items[j + 1].number == items[j].number + 1 {
            j += 1;
        }

        if j > i {
            let last = items[j].start;
            let end = text
                .get(last..range.end)
                .and_then(|rest| PARAGRAPH_BREAK.find(rest))
                .map_or(range.end, |m| last + m.start());
            if let Some(span) = trim_span(text, items[i].start..end) {
                runs.push(span);
            }
        }
        i = j + 1;
    }
    runs
}

/// Discourse marker starting exactly at `pos`, if any
pub fn discourse_marker_at(text: &str, pos: usize) -> Option<&str> {
    let rest = text.get(pos..)?;
    DISCOURSE_MARKER.find(rest).map(|m| m.as_str())
}

/// Whether a line looks like a heading: short, starts with a capital
/// letter, holds no sentence break, has no terminal punctuation and is
/// not a list item
pub fn is_heading_line(line: &str, max_chars: usize) -> bool {
    let line = line.trim();
    let count = line.chars().count();
    if count < 2 || count > max_chars {
        return false;
    }

    if LIST_ITEM.is_match(line) || SENTENCE_END.is_match(line) {
        return false;
    }

    if line
        .chars()
        .next_back()
        .is_some_and(|c| matches!(c, '.' | ',' | ';' | ':' | '!' | '?' | '…'))
    {
        return false;
    }

    line.chars()
        .find(|c| c.is_alphabetic())
        .is_some_and(|c| c.is_uppercase())
}

/// Start of the content following each large formatting break
/// (two or more blank lines, or a separator line)
pub fn formatting_breaks(text: &str) -> Vec<usize> {
    let len = text.len();
    let mut breaks: Vec<usize> = WIDE_BREAK.find_iter(text).map(|m| m.end()).collect();
    breaks.extend(
        SEPARATOR_LINE
            .find_iter(text)
            .map(|m| skip_whitespace(text, m.end(), len)),
    );
    breaks.retain(|&p| p > 0 && p < len);
    breaks.sort_unstable();
    breaks.dedup();
    breaks
}
