//! Loading files from disk and chunking them

use crate::common::{assert_valid_chunks, config, TestCorpus, ESSAY, STATUTE};
use segmenta::core::cleaner::CleaningOptions;
use segmenta::core::input::{DocumentLoader, FileWalker};
use segmenta::{Chunker, Config};

fn default_loader(cleaning: Option<CleaningOptions>) -> DocumentLoader {
    let input = Config::default().input;
    let walker = FileWalker::new(
        &input.include_patterns,
        &input.exclude_patterns,
        input.max_file_size_mb,
    )
    .unwrap();
    DocumentLoader::new(walker, cleaning)
}

#[test]
fn test_load_corpus_in_path_order() {
    let corpus = TestCorpus::small();
    let loaded = default_loader(None)
        .load(&[corpus.path().to_path_buf()])
        .unwrap();

    let ids: Vec<&str> = loaded.documents.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids.len(), 3);
    assert!(ids[0].ends_with("informe.md"));
    assert!(ids[1].ends_with("acta.txt"));
    assert!(ids[2].ends_with("reglamento.txt"));
    assert_eq!(loaded.documents[2].text, STATUTE);
}

#[test]
fn test_cleaning_keeps_structure() {
    let corpus = TestCorpus::small();
    let loaded = default_loader(Some(CleaningOptions::default()))
        .load(&[corpus.path().join("reglamento.txt")])
        .unwrap();

    assert_eq!(loaded.documents.len(), 1);
    assert_eq!(loaded.documents[0].text, STATUTE.trim_end());
}

#[test]
fn test_cleaning_strips_extraction_noise() {
    let corpus = TestCorpus::with_files(&[(
        "extraido.txt",
        "Informe anual  de la\r\nuniversi-\ndad.\n\n\n\n12\n\nMás información en https://example.com/informe",
    )]);

    let loaded = default_loader(Some(CleaningOptions::default()))
        .load(&[corpus.path().to_path_buf()])
        .unwrap();

    assert_eq!(
        loaded.documents[0].text,
        "Informe anual de la\nuniversidad.\n\nMás información en"
    );
}

#[test]
fn test_loaded_corpus_chunks_with_every_strategy() {
    let corpus = TestCorpus::small();
    let loaded = default_loader(Some(CleaningOptions::default()))
        .load(&[corpus.path().to_path_buf()])
        .unwrap();
    let chunker = Chunker::new();

    for strategy in ["simple", "legal", "semantic"] {
        let config = config(strategy, 250, 30, 25);
        let batch = chunker.chunk_documents(&loaded.documents, &config).unwrap();

        assert_eq!(batch.documents_chunked, 3);
        assert!(batch.skipped.is_empty());

        for document in &loaded.documents {
            let chunks: Vec<_> = batch.chunks_for(&document.id).cloned().collect();
            assert_valid_chunks(&document.text, &chunks, &config);
        }
    }
}

#[test]
fn test_file_root_bypasses_include_patterns() {
    let corpus = TestCorpus::with_files(&[("informe.rst", ESSAY)]);
    let loaded = default_loader(None)
        .load(&[corpus.path().join("informe.rst")])
        .unwrap();

    assert_eq!(loaded.documents.len(), 1);

    let from_dir = default_loader(None)
        .load(&[corpus.path().to_path_buf()])
        .unwrap();
    assert!(from_dir.documents.is_empty());
}
