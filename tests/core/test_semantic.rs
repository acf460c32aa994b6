//! Semantic strategy through the full pipeline
//!
//! The essay fixture has three headings and two discourse markers
//! ("Sin embargo", "Por otro lado"), giving five topic blocks of
//! 159/138/81/76/76 chars.

use crate::common::{assert_valid_chunks, config, labels, prose, ESSAY};
use segmenta::{Chunker, SegmentKind};

#[test]
fn test_topic_blocks_follow_headings_and_markers() {
    let chunker = Chunker::new();
    let config = config("semantic", 300, 0, 20);
    let chunks = chunker.chunk("informe", ESSAY, &config).unwrap();

    assert_valid_chunks(ESSAY, &chunks, &config);
    assert_eq!(
        labels(&chunks),
        vec![
            Some("Introducción"),
            Some("Metodología"),
            None,
            Some("Resultados"),
            None,
        ]
    );
    assert!(chunks.iter().all(|c| c.kind == SegmentKind::TopicBlock));
    assert!(chunks[2].core_text().starts_with("Sin embargo,"));
    assert!(chunks[4].core_text().starts_with("Por otro lado,"));
}

#[test]
fn test_oversized_block_split_keeps_label() {
    let chunker = Chunker::new();
    let config = config("semantic", 100, 0, 20);
    let chunks = chunker.chunk("informe", ESSAY, &config).unwrap();

    assert_valid_chunks(ESSAY, &chunks, &config);
    assert_eq!(chunks[0].label.as_deref(), Some("Introducción"));
    assert_eq!(chunks[1].label.as_deref(), Some("Introducción"));
    assert!(chunks[0].core_text().ends_with("de forma desigual."));
    assert!(chunks[1].core_text().starts_with("Los glaciares"));

    for chunk in &chunks {
        assert!(chunk.core_text().chars().count() <= 100);
    }
}

#[test]
fn test_large_target_merges_nothing_across_headings() {
    let chunker = Chunker::new();
    let chunks = chunker
        .chunk("informe", ESSAY, &config("semantic", 2000, 0, 20))
        .unwrap();

    // Topic boundaries are cut regardless of how much room is left
    assert_eq!(chunks.len(), 5);
}

#[test]
fn test_sparse_boundaries_fall_back_to_paragraphs() {
    let chunker = Chunker::new();
    let text = prose(12);
    let config = config("semantic", 300, 0, 20);
    let chunks = chunker.chunk("prosa", &text, &config).unwrap();

    assert_valid_chunks(&text, &chunks, &config);
    assert!(chunks.len() > 1);
    for chunk in &chunks {
        assert!(chunk.core_text().chars().count() <= 300);
        // Cuts land on paragraph starts
        assert!(chunk.core_text().starts_with("El párrafo número"));
    }
}

#[test]
fn test_short_topic_merged_forward() {
    let chunker = Chunker::new();
    let text = "Resumen\n\nSin embargo, esto es breve. \
                Por otro lado, este bloque es bastante más largo que el anterior.";
    let chunks = chunker
        .chunk("breve", text, &config("semantic", 300, 0, 40))
        .unwrap();

    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].text, text);
    assert_eq!(chunks[0].label.as_deref(), Some("Resumen"));
}
