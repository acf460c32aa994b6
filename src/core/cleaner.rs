//! Text cleanup for extracted documents.
//!
//! Removes extraction noise (page numbers, URLs, PDF hyphenation) and
//! normalises whitespace before a document reaches the chunker. The
//! engine never cleans on its own: chunk offsets refer to whatever text
//! the caller passes in.

use once_cell::sync::Lazy;
use regex::Regex;

static URL: Lazy<Regex> = Lazy::new(|| Regex::new(r"https?://\S+|www\.\S+").unwrap());

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap()
});

/// Word hyphenated across a line end
static HYPHENATED_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\w)-\n(\w)").unwrap());

static BROKEN_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\w)\n(\w)").unwrap());

static PAGE_NUMBER_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^[ \t]*\d+[ \t]*$").unwrap());

static PAGE_LABEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:página|pagina|page)[ \t]*\d+").unwrap());

static HORIZONTAL_SPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t]+").unwrap());

static TRAILING_SPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)[ \t]+$").unwrap());

static EXTRA_BLANK_LINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());

/// Which cleanup steps to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CleaningOptions {
    pub remove_urls: bool,
    pub remove_emails: bool,
    pub fix_pdf_artifacts: bool,
    /// Join `word\nword` into `word word`. Off by default because it
    /// can glue a structural header onto the previous line.
    pub join_broken_lines: bool,
    pub remove_page_numbers: bool,
    pub normalize_whitespace: bool,
}

impl Default for CleaningOptions {
    fn default() -> Self {
        Self {
            remove_urls: true,
            remove_emails: false,
            fix_pdf_artifacts: true,
            join_broken_lines: false,
            remove_page_numbers: true,
            normalize_whitespace: true,
        }
    }
}

/// Cleaner for text extracted from documents
pub struct TextCleaner;

impl TextCleaner {
    /// Run the configured cleanup steps.
    ///
    /// Line breaks are always normalised first; whitespace is
    /// normalised last so removals don't leave gaps behind.
    ///
    /// # Example
    ///
    /// ```
    /// use segmenta::core::cleaner::{CleaningOptions, TextCleaner};
    ///
    /// let raw = "Texto con  espacios\r\nver https://example.com\r\n\r\n\r\n\r\n12\r\nFin";
    /// let clean = TextCleaner::clean(raw, &CleaningOptions::default());
    /// assert_eq!(clean, "Texto con espacios\nver\n\nFin");
    /// ```
    pub fn clean(text: &str, options: &CleaningOptions) -> String {
        let mut text = Self::normalize_line_breaks(text);

        if options.fix_pdf_artifacts {
            text = Self::fix_pdf_artifacts(&text);
        }
        if options.join_broken_lines {
            text = Self::join_broken_lines(&text);
        }
        if options.remove_urls {
            text = Self::remove_urls(&text);
        }
        if options.remove_emails {
            text = Self::remove_emails(&text);
        }
        if options.remove_page_numbers {
            text = Self::remove_page_numbers(&text);
        }
        if options.normalize_whitespace {
            text = Self::remove_extra_whitespace(&text);
        }

        text
    }

    /// Convert `\r\n` and lone `\r` to `\n`
    pub fn normalize_line_breaks(text: &str) -> String {
        text.replace("\r\n", "\n").replace('\r', "\n")
    }

    /// Rejoin words split by a hyphen at the end of a line
    pub fn fix_pdf_artifacts(text: &str) -> String {
        HYPHENATED_BREAK.replace_all(text, "${1}${2}").into_owned()
    }

    pub fn join_broken_lines(text: &str) -> String {
        BROKEN_LINE.replace_all(text, "${1} ${2}").into_owned()
    }

    pub fn remove_urls(text: &str) -> String {
        URL.replace_all(text, "").into_owned()
    }

    pub fn remove_emails(text: &str) -> String {
        EMAIL.replace_all(text, "").into_owned()
    }

    /// Drop number-only lines and "Página N" / "Page N" labels
    pub fn remove_page_numbers(text: &str) -> String {
        let text = PAGE_NUMBER_LINE.replace_all(text, "");
        PAGE_LABEL.replace_all(&text, "").into_owned()
    }

    /// Collapse runs of spaces and tabs, allow at most one blank line
    /// in a row and trim the ends
    pub fn remove_extra_whitespace(text: &str) -> String {
        let text = HORIZONTAL_SPACE.replace_all(text, " ");
        let text = TRAILING_SPACE.replace_all(&text, "");
        let text = EXTRA_BLANK_LINES.replace_all(&text, "\n\n");
        text.trim().to_string()
    }
}
