//! Chunk command - split files into chunks

use crate::cli::output::{
    colors, format_bytes, format_duration, preview, print_json, print_warning,
};
use crate::cli::OutputFormat;
use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::input::{DocumentLoader, FileWalker};
use crate::core::strategies::{SegmentationStrategy, SemanticStrategy};
use crate::core::types::{Chunk, ChunkConfig, ChunkBatch};
use crate::core::Chunker;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;

/// Characters of chunk text shown per line in human output
const PREVIEW_CHARS: usize = 72;

/// Arguments for the chunk command
#[derive(Args, Debug, Default)]
pub struct ChunkArgs {
    /// Files or directories to chunk
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Segmentation strategy (see list-strategies)
    #[arg(long, short = 's')]
    pub strategy: Option<String>,

    /// Target chunk size in characters
    #[arg(long)]
    pub chunk_size: Option<usize>,

    /// Overlap between adjacent chunks in characters
    #[arg(long)]
    pub overlap: Option<usize>,

    /// Minimum chunk size in characters
    #[arg(long)]
    pub min_size: Option<usize>,

    /// Factor by which a legal unit may exceed the chunk size
    #[arg(long)]
    pub legal_tolerance: Option<f64>,

    /// Glob patterns to include (can be specified multiple times)
    #[arg(long, short = 'i')]
    pub include: Vec<String>,

    /// Glob patterns to exclude (can be specified multiple times)
    #[arg(long, short = 'e')]
    pub exclude: Vec<String>,

    /// Chunk the text exactly as read, without cleanup
    #[arg(long)]
    pub no_clean: bool,

    /// Document ID to use instead of the file path (single file only)
    #[arg(long)]
    pub id: Option<String>,

    /// Print the full text of every chunk
    #[arg(long)]
    pub full: bool,
}

/// A file or document that produced no chunks
#[derive(Debug, Clone, Serialize)]
pub struct SkippedEntry {
    pub source: String,
    pub reason: String,
}

/// Chunking result response
#[derive(Debug, Serialize)]
pub struct ChunkReport {
    pub config: ChunkConfig,
    pub documents_chunked: usize,
    pub total_chunks: usize,
    pub input_bytes: u64,
    pub duration_secs: f64,
    pub skipped: Vec<SkippedEntry>,
    pub chunks: Vec<Chunk>,
}

impl ChunkReport {
    fn new(config: ChunkConfig, batch: ChunkBatch, input_bytes: u64, duration_secs: f64) -> Self {
        let skipped = batch
            .skipped
            .into_iter()
            .map(|s| SkippedEntry {
                source: s.document_id,
                reason: s.reason,
            })
            .collect();

        Self {
            config,
            documents_chunked: batch.documents_chunked,
            total_chunks: batch.chunks.len(),
            input_bytes,
            duration_secs,
            skipped,
            chunks: batch.chunks,
        }
    }
}

/// Engine configuration from the loaded config with flag overrides
pub fn chunk_config(args: &ChunkArgs, config: &Config) -> Result<ChunkConfig> {
    let settings = &config.chunking;
    let chunk_config = ChunkConfig::new(
        args.chunk_size.unwrap_or(settings.chunk_size),
        args.overlap.unwrap_or(settings.chunk_overlap),
        args.min_size.unwrap_or(settings.min_chunk_size),
        settings.strategy.as_str(),
    )?
    .with_legal_tolerance(args.legal_tolerance.unwrap_or(settings.legal_tolerance))?;

    match &args.strategy {
        Some(strategy) => chunk_config.with_strategy(strategy.as_str()),
        None => Ok(chunk_config),
    }
}

/// Chunker with the built-in strategies, the semantic one tuned by
/// the `[semantic]` settings
pub fn build_chunker(config: &Config) -> Chunker {
    let heading_max_chars = config.semantic.heading_max_chars;
    let mut chunker = Chunker::new();
    chunker
        .registry_mut()
        .register(SemanticStrategy::NAME, move |c: &ChunkConfig| {
            Box::new(SemanticStrategy::new(c).with_heading_max_chars(heading_max_chars))
                as Box<dyn SegmentationStrategy>
        });
    chunker
}

/// Load, clean and chunk the inputs named by `args`
pub fn build_report(
    args: &ChunkArgs,
    config: &Config,
) -> std::result::Result<ChunkReport, Box<dyn std::error::Error>> {
    let chunk_config = chunk_config(args, config)?;
    let chunker = build_chunker(config);

    // Fail on a bad strategy name before touching the filesystem
    chunker.validate(&chunk_config)?;

    let include = if args.include.is_empty() {
        config.input.include_patterns.clone()
    } else {
        args.include.clone()
    };
    let exclude = if args.exclude.is_empty() {
        config.input.exclude_patterns.clone()
    } else {
        args.exclude.clone()
    };
    let walker = FileWalker::new(&include, &exclude, config.input.max_file_size_mb)?;

    let cleaning = (config.cleaning.enabled && !args.no_clean).then(|| config.cleaning.options());
    let start = Instant::now();
    let mut loaded = DocumentLoader::new(walker, cleaning).load(&args.paths)?;

    if let Some(id) = &args.id {
        match loaded.documents.as_mut_slice() {
            [document] => document.id = id.clone(),
            documents => {
                return Err(format!(
                    "--id needs exactly one input document, found {}",
                    documents.len()
                )
                .into())
            }
        }
    }

    let input_bytes = loaded
        .documents
        .iter()
        .map(|d| d.text.len() as u64)
        .sum();

    let batch = chunker.chunk_documents(&loaded.documents, &chunk_config)?;
    let mut report = ChunkReport::new(
        chunk_config,
        batch,
        input_bytes,
        start.elapsed().as_secs_f64(),
    );

    report.skipped.extend(loaded.skipped.into_iter().map(|s| SkippedEntry {
        source: s.path.display().to_string(),
        reason: s.reason,
    }));

    Ok(report)
}

/// Execute the chunk command
pub fn execute(
    args: ChunkArgs,
    config: &Config,
    format: OutputFormat,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let report = build_report(&args, config)?;

    for entry in &report.skipped {
        print_warning(&format!("Skipped {}: {}", entry.source, entry.reason));
    }

    match format {
        OutputFormat::Human => print_human(&report, args.full),
        OutputFormat::Json => {
            print_json(&report)?;
        }
    }

    Ok(())
}

fn print_human(report: &ChunkReport, full: bool) {
    let mut current_document: Option<&str> = None;

    for chunk in &report.chunks {
        if current_document != Some(chunk.document_id.as_str()) {
            if current_document.is_some() {
                println!();
            }
            println!("{}", colors::file_path(&chunk.document_id));
            current_document = Some(chunk.document_id.as_str());
        }

        let label = chunk
            .label
            .as_deref()
            .map(|l| format!(" {l}"))
            .unwrap_or_default();
        println!(
            "  {} {}{} {}",
            colors::sequence(&format!("#{}", chunk.sequence_index)),
            colors::kind(chunk.kind.as_str()),
            label,
            colors::dim(&format!(
                "[{}..{}, {} chars]",
                chunk.char_start,
                chunk.char_end,
                chunk.char_len()
            ))
        );

        if full {
            for line in chunk.text.lines() {
                println!("    {line}");
            }
        } else {
            println!("    {}", preview(&chunk.text, PREVIEW_CHARS));
        }
    }

    if !report.chunks.is_empty() {
        println!();
    }
    println!(
        "{} {} documents ({}) into {} chunks with '{}' in {}",
        colors::success("Chunked"),
        colors::number(&report.documents_chunked.to_string()),
        format_bytes(report.input_bytes),
        colors::number(&report.total_chunks.to_string()),
        colors::document_id(report.config.strategy_name()),
        format_duration(report.duration_secs)
    );
}
