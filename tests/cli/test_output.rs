//! Tests for CLI output formatting helpers
//!
//! Tests the output formatting utilities:
//! - Byte formatting (KB, MB, GB)
//! - Duration formatting (ms, s, m)
//! - Chunk text previews
//! - Print helpers (print_json, print_warning, print_header)

use segmenta::cli::output::{
    format_bytes, format_duration, preview, print_header, print_json, print_warning,
};

// =============================================================================
// format_bytes tests
// =============================================================================

/// Test byte formatting with various sizes
#[test]
fn test_format_bytes_various_sizes() {
    assert_eq!(format_bytes(0), "0 B");
    assert_eq!(format_bytes(1023), "1023 B");
    assert_eq!(format_bytes(1024), "1.0 KB");
    assert_eq!(format_bytes(10240), "10.0 KB");
    assert_eq!(format_bytes(1572864), "1.5 MB");
    assert_eq!(format_bytes(10737418240), "10.0 GB");
}

/// Test byte formatting edge cases
#[test]
fn test_format_bytes_edge_cases() {
    assert_eq!(format_bytes(1048576 - 1), "1024.0 KB"); // Just under 1 MB
    assert_eq!(format_bytes(1048576), "1.0 MB"); // Exactly 1 MB
}

// =============================================================================
// format_duration tests
// =============================================================================

#[test]
fn test_format_duration_various_times() {
    assert_eq!(format_duration(0.0), "0ms");
    assert_eq!(format_duration(0.25), "250ms");
    assert_eq!(format_duration(2.5), "2.50s");
    assert_eq!(format_duration(125.0), "2m 5.0s");
}

// =============================================================================
// preview tests
// =============================================================================

#[test]
fn test_preview_flattens_lines() {
    assert_eq!(
        preview("Artículo 2. Requisitos.\n1) Estar matriculado.", 80),
        "Artículo 2. Requisitos. 1) Estar matriculado."
    );
}

#[test]
fn test_preview_truncates_on_chars() {
    let text = "ñññññ ááááá ééééé";
    assert_eq!(preview(text, 9), "ñññññ...");
    assert_eq!(preview(text, 17), text);
}

// =============================================================================
// print helpers
// =============================================================================

/// Print helpers write to stdout/stderr without panicking
#[test]
fn test_print_helpers() {
    print_warning("Skipped vacio.txt");
    print_header("Strategies:");
    assert!(print_json(&serde_json::json!({"total_chunks": 3})).is_ok());
}
