//! Output formatting for CLI commands
//!
//! Human output is coloured (respects NO_COLOR); JSON output is pretty
//! printed to stdout.

use serde::Serialize;

/// Colour palette shared by the commands
pub mod colors {
    use colored::{ColoredString, Colorize};

    pub fn label(s: &str) -> ColoredString {
        s.bold()
    }

    pub fn document_id(s: &str) -> ColoredString {
        s.cyan()
    }

    pub fn file_path(s: &str) -> ColoredString {
        s.blue().bold()
    }

    pub fn number(s: &str) -> ColoredString {
        s.yellow()
    }

    pub fn success(s: &str) -> ColoredString {
        s.green()
    }

    pub fn warning(s: &str) -> ColoredString {
        s.yellow().bold()
    }

    pub fn dim(s: &str) -> ColoredString {
        s.dimmed()
    }

    /// Segment kind tag ("article", "topic-block", ...)
    pub fn kind(s: &str) -> ColoredString {
        s.magenta()
    }

    /// Chunk sequence number
    pub fn sequence(s: &str) -> ColoredString {
        s.green().bold()
    }
}

const BYTE_UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

/// Format a byte count with binary units ("1.5 KB")
pub fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        return format!("{bytes} B");
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < BYTE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{value:.1} {}", BYTE_UNITS[unit])
}

/// Format elapsed seconds ("250ms", "2.50s", "2m 5.0s")
pub fn format_duration(secs: f64) -> String {
    match secs {
        s if s < 1.0 => format!("{:.0}ms", s * 1000.0),
        s if s < 60.0 => format!("{s:.2}s"),
        s => {
            let mins = (s / 60.0).floor();
            format!("{mins:.0}m {:.1}s", s - mins * 60.0)
        }
    }
}

/// Single-line preview of `text`, at most `max_chars` characters.
///
/// Line breaks are flattened to spaces and a cut preview ends in "...".
pub fn preview(text: &str, max_chars: usize) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");

    if flat.chars().count() <= max_chars {
        return flat;
    }

    let cut: String = flat.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{}...", cut.trim_end())
}

/// Pretty-print `data` as JSON on stdout
pub fn print_json<T: Serialize>(data: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

/// Print a warning on stderr
pub fn print_warning(message: &str) {
    eprintln!("{}: {}", colors::warning("Warning"), message);
}

/// Print a section title
pub fn print_header(title: &str) {
    println!("{}", colors::label(title));
}
