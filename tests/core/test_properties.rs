//! Invariants that hold for every strategy and configuration
//!
//! Each test runs the full pipeline over the shared fixtures with a
//! grid of sizes and checks the structural guarantees of the output.

use crate::common::{assert_valid_chunks, config, prose, ESSAY, MULTILINGUAL, STATUTE};
use segmenta::{ChunkError, Chunker, Document};

const STRATEGIES: [&str; 3] = ["simple", "legal", "semantic"];

/// (target, overlap, min)
const SIZES: [(usize, usize, usize); 4] = [(60, 20, 5), (120, 0, 10), (200, 30, 20), (500, 100, 50)];

fn corpus() -> Vec<(&'static str, String)> {
    vec![
        ("statute", STATUTE.to_string()),
        ("essay", ESSAY.to_string()),
        ("prose", prose(30)),
        ("multilingual", MULTILINGUAL.to_string()),
    ]
}

#[test]
fn test_all_strategies_preserve_invariants() {
    let chunker = Chunker::new();

    for strategy in STRATEGIES {
        for (target, overlap, min) in SIZES {
            let config = config(strategy, target, overlap, min);
            for (name, text) in corpus() {
                let chunks = chunker
                    .chunk(name, &text, &config)
                    .unwrap_or_else(|e| panic!("{strategy}/{name}/{target}: {e}"));

                assert_valid_chunks(&text, &chunks, &config);
                assert!(chunks.iter().all(|c| c.document_id == name));
            }
        }
    }
}

#[test]
fn test_chunking_is_deterministic() {
    let chunker = Chunker::new();

    for strategy in STRATEGIES {
        let config = config(strategy, 200, 30, 20);
        for (name, text) in corpus() {
            let first = chunker.chunk(name, &text, &config).unwrap();
            let second = chunker.chunk(name, &text, &config).unwrap();
            assert_eq!(first, second, "{strategy}/{name} is not deterministic");
        }
    }
}

#[test]
fn test_simple_packs_paragraphs_up_to_target() {
    let chunker = Chunker::new();
    let text = prose(30);

    // Two 117-118 char paragraphs fit in 300, three do not
    let chunks = chunker
        .chunk("prose", &text, &config("simple", 300, 0, 20))
        .unwrap();

    assert_eq!(chunks.len(), 15);
    assert!(chunks[0].core_text().starts_with("El párrafo número 1 "));
    assert!(chunks[0].core_text().contains("número 2 "));
    assert!(chunks[1].core_text().starts_with("El párrafo número 3 "));
}

#[test]
fn test_overlap_repeats_previous_tail() {
    let chunker = Chunker::new();
    let text = prose(4);
    let chunks = chunker
        .chunk("prose", &text, &config("simple", 150, 40, 20))
        .unwrap();

    assert_eq!(chunks.len(), 4);
    for pair in chunks.windows(2) {
        let tail = pair[1].overlap_text();
        assert!(!tail.is_empty());
        assert!(pair[0].core_text().ends_with(tail));
        assert!(pair[1].text.starts_with(tail));
        // Overlap starts on a word
        assert!(!tail.starts_with(char::is_whitespace));
        let before = &pair[0].core_text()[..pair[0].core_text().len() - tail.len()];
        assert!(before.ends_with(char::is_whitespace));
    }
}

#[test]
fn test_zero_overlap_keeps_core_text() {
    let chunker = Chunker::new();
    let text = prose(6);
    let chunks = chunker
        .chunk("prose", &text, &config("simple", 150, 0, 20))
        .unwrap();

    for chunk in &chunks {
        assert_eq!(chunk.overlap_len, 0);
        assert_eq!(chunk.text, chunk.core_text());
    }
}

#[test]
fn test_single_chunk_when_text_fits() {
    let chunker = Chunker::new();
    let text = "Texto breve de un solo párrafo.";

    for strategy in STRATEGIES {
        let chunks = chunker
            .chunk("breve", text, &config(strategy, 800, 100, 100))
            .unwrap();
        assert_eq!(chunks.len(), 1, "{strategy}");
        assert_eq!(chunks[0].text, text);
    }
}

#[test]
fn test_whitespace_document_is_rejected() {
    let chunker = Chunker::new();

    for strategy in STRATEGIES {
        let result = chunker.chunk("vacio", " \n\n\t ", &config(strategy, 200, 0, 20));
        assert!(
            matches!(result, Err(ChunkError::EmptyDocument(ref id)) if id == "vacio"),
            "{strategy}"
        );
    }
}

#[test]
fn test_unknown_strategy_is_fatal() {
    let chunker = Chunker::new();
    let config = config("fancy", 200, 0, 20);

    let result = chunker.chunk("doc", STATUTE, &config);
    assert!(matches!(result, Err(ChunkError::UnknownStrategy(ref name)) if name == "fancy"));

    let documents = vec![Document::new("doc", STATUTE)];
    let result = chunker.chunk_documents(&documents, &config);
    assert!(matches!(result, Err(ChunkError::UnknownStrategy(_))));
}

#[test]
fn test_batch_keeps_document_order() {
    let chunker = Chunker::new();
    let documents = vec![
        Document::new("reglamento", STATUTE),
        Document::new("vacio", ""),
        Document::new("informe", ESSAY),
    ];

    let batch = chunker
        .chunk_documents(&documents, &config("legal", 300, 30, 20))
        .unwrap();

    assert_eq!(batch.documents_chunked, 2);
    assert_eq!(batch.skipped.len(), 1);
    assert_eq!(batch.skipped[0].document_id, "vacio");

    let statute_chunks = batch.chunks_for("reglamento").count();
    assert!(statute_chunks > 0);
    assert!(batch.chunks[..statute_chunks]
        .iter()
        .all(|c| c.document_id == "reglamento"));
    assert!(batch.chunks[statute_chunks..]
        .iter()
        .all(|c| c.document_id == "informe"));
    assert_eq!(batch.chunks_for("informe").next().map(|c| c.sequence_index), Some(0));
}
