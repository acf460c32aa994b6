// Test helper functions

use segmenta::{Chunk, ChunkConfig};

/// Build a config, panicking on invalid values
#[allow(dead_code)] // Used in integration tests
pub fn config(strategy: &str, target: usize, overlap: usize, min: usize) -> ChunkConfig {
    ChunkConfig::new(target, overlap, min, strategy).expect("valid test config")
}

/// Labels of `chunks` in order
#[allow(dead_code)] // Used in integration tests
pub fn labels(chunks: &[Chunk]) -> Vec<Option<&str>> {
    chunks.iter().map(|c| c.label.as_deref()).collect()
}

/// Chunks tile `text`: contiguous byte and char ranges from start to
/// end, each core text being its trimmed source slice
#[allow(dead_code)] // Used in integration tests
pub fn assert_partition(text: &str, chunks: &[Chunk]) {
    assert!(!chunks.is_empty(), "Expected at least one chunk");

    let first = &chunks[0];
    assert_eq!(first.byte_start, 0, "First chunk must start at byte 0");
    assert_eq!(first.char_start, 0, "First chunk must start at char 0");

    let last = &chunks[chunks.len() - 1];
    assert_eq!(last.byte_end, text.len(), "Last chunk must end at text end");
    assert_eq!(
        last.char_end,
        text.chars().count(),
        "Last chunk must end at the last char"
    );

    for pair in chunks.windows(2) {
        assert_eq!(pair[0].byte_end, pair[1].byte_start, "Byte gap or overlap");
        assert_eq!(pair[0].char_end, pair[1].char_start, "Char gap or overlap");
    }

    for chunk in chunks {
        let source = &text[chunk.byte_start..chunk.byte_end];
        assert_eq!(source.chars().count(), chunk.char_len());
        assert_eq!(chunk.core_text(), source.trim());
    }
}

/// Sequence indexes run 0..n and offsets increase
#[allow(dead_code)] // Used in integration tests
pub fn assert_ordered(chunks: &[Chunk]) {
    for (i, chunk) in chunks.iter().enumerate() {
        assert_eq!(chunk.sequence_index, i);
    }
    for pair in chunks.windows(2) {
        assert!(pair[0].byte_start < pair[1].byte_start);
    }
}

/// Every chunk meets the minimum size unless it is the only one
#[allow(dead_code)] // Used in integration tests
pub fn assert_min_size(chunks: &[Chunk], min: usize) {
    if chunks.len() < 2 {
        return;
    }
    for chunk in chunks {
        let size = chunk.core_text().chars().count();
        assert!(
            size >= min,
            "Chunk {} has {} chars, below minimum {}",
            chunk.sequence_index,
            size,
            min
        );
    }
}

/// Overlap text is a bounded suffix of the previous chunk's core text,
/// joined to the core by a single space
#[allow(dead_code)] // Used in integration tests
pub fn assert_overlap(chunks: &[Chunk], overlap: usize) {
    if let Some(first) = chunks.first() {
        assert_eq!(first.overlap_len, 0, "First chunk cannot carry overlap");
    }

    for pair in chunks.windows(2) {
        let (previous, chunk) = (&pair[0], &pair[1]);
        let tail = chunk.overlap_text();

        assert!(tail.chars().count() <= overlap);
        assert!(
            previous.core_text().ends_with(tail),
            "Overlap '{}' is not a suffix of the previous chunk",
            tail
        );

        if chunk.overlap_len == 0 {
            assert_eq!(chunk.text, chunk.core_text());
        } else {
            assert_eq!(chunk.text, format!("{} {}", tail, chunk.core_text()));
        }
    }
}

/// All structural invariants at once
#[allow(dead_code)] // Used in integration tests
pub fn assert_valid_chunks(text: &str, chunks: &[Chunk], config: &ChunkConfig) {
    assert_partition(text, chunks);
    assert_ordered(chunks);
    assert_min_size(chunks, config.min_size());
    assert_overlap(chunks, config.overlap());
}
