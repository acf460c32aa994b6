//! Configuration management for segmenta.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.

use crate::core::cleaner::CleaningOptions;
use crate::core::error::{ChunkError, Result};
use crate::core::strategies::semantic::DEFAULT_HEADING_MAX_CHARS;
use crate::core::types::{
    ChunkConfig, DEFAULT_LEGAL_TOLERANCE, DEFAULT_MIN_SIZE, DEFAULT_OVERLAP, DEFAULT_STRATEGY,
    DEFAULT_TARGET_SIZE,
};
use crate::core::xdg::XdgDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub chunking: ChunkingSettings,
    #[serde(default)]
    pub semantic: SemanticSettings,
    #[serde(default)]
    pub cleaning: CleaningSettings,
    #[serde(default)]
    pub input: InputSettings,
}

/// Chunking configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChunkingSettings {
    /// Target chunk size in characters (not bytes!)
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,

    /// Character overlap between consecutive chunks
    #[serde(default = "default_chunk_overlap")]
    pub chunk_overlap: usize,

    /// Chunks shorter than this are merged with a neighbour
    #[serde(default = "default_min_chunk_size")]
    pub min_chunk_size: usize,

    /// Registered strategy name
    #[serde(default = "default_strategy")]
    pub strategy: String,

    /// How far a legal unit may exceed `chunk_size` and still be kept
    /// in one piece
    #[serde(default = "default_legal_tolerance")]
    pub legal_tolerance: f64,
}

/// Semantic strategy configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SemanticSettings {
    /// Longest line (in characters) treated as a heading
    #[serde(default = "default_heading_max_chars")]
    pub heading_max_chars: usize,
}

/// Text cleaning configuration, applied before chunking
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CleaningSettings {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_true")]
    pub remove_urls: bool,

    #[serde(default)]
    pub remove_emails: bool,

    /// Rejoin words hyphenated across line ends
    #[serde(default = "default_true")]
    pub fix_pdf_artifacts: bool,

    /// Join lines broken mid-sentence (can hide headers, off by default)
    #[serde(default)]
    pub join_broken_lines: bool,

    #[serde(default = "default_true")]
    pub remove_page_numbers: bool,

    #[serde(default = "default_true")]
    pub normalize_whitespace: bool,
}

/// Input file selection
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InputSettings {
    /// File patterns to include (glob syntax)
    #[serde(default = "default_include_patterns")]
    pub include_patterns: Vec<String>,

    /// File patterns to exclude (glob syntax)
    #[serde(default = "default_exclude_patterns")]
    pub exclude_patterns: Vec<String>,

    /// Maximum file size in MB (skip larger files)
    #[serde(default = "default_max_file_size")]
    pub max_file_size_mb: usize,
}

// Default value functions
fn default_chunk_size() -> usize {
    DEFAULT_TARGET_SIZE
}

fn default_chunk_overlap() -> usize {
    DEFAULT_OVERLAP
}

fn default_min_chunk_size() -> usize {
    DEFAULT_MIN_SIZE
}

fn default_strategy() -> String {
    DEFAULT_STRATEGY.to_string()
}

fn default_legal_tolerance() -> f64 {
    DEFAULT_LEGAL_TOLERANCE
}

fn default_heading_max_chars() -> usize {
    DEFAULT_HEADING_MAX_CHARS
}

fn default_true() -> bool {
    true
}

fn default_max_file_size() -> usize {
    10
}

fn default_include_patterns() -> Vec<String> {
    vec!["*.txt".to_string(), "*.md".to_string()]
}

fn default_exclude_patterns() -> Vec<String> {
    vec!["**/.git/**".to_string(), "**/target/**".to_string()]
}

impl Default for ChunkingSettings {
    fn default() -> Self {
        Self {
            chunk_size: default_chunk_size(),
            chunk_overlap: default_chunk_overlap(),
            min_chunk_size: default_min_chunk_size(),
            strategy: default_strategy(),
            legal_tolerance: default_legal_tolerance(),
        }
    }
}

impl Default for SemanticSettings {
    fn default() -> Self {
        Self {
            heading_max_chars: default_heading_max_chars(),
        }
    }
}

impl Default for CleaningSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            remove_urls: true,
            remove_emails: false,
            fix_pdf_artifacts: true,
            join_broken_lines: false,
            remove_page_numbers: true,
            normalize_whitespace: true,
        }
    }
}

impl CleaningSettings {
    /// Cleaner options matching these settings
    pub fn options(&self) -> CleaningOptions {
        CleaningOptions {
            remove_urls: self.remove_urls,
            remove_emails: self.remove_emails,
            fix_pdf_artifacts: self.fix_pdf_artifacts,
            join_broken_lines: self.join_broken_lines,
            remove_page_numbers: self.remove_page_numbers,
            normalize_whitespace: self.normalize_whitespace,
        }
    }
}

impl Default for InputSettings {
    fn default() -> Self {
        Self {
            include_patterns: default_include_patterns(),
            exclude_patterns: default_exclude_patterns(),
            max_file_size_mb: default_max_file_size(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| ChunkError::InvalidConfig(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    pub fn load() -> Result<Self> {
        Self::load_with_xdg(&XdgDirs::new())
    }

    /// Load config, looking for the file under `xdg`
    pub fn load_with_xdg(xdg: &XdgDirs) -> Result<Self> {
        let mut config = match xdg.locate_config() {
            Some(source) => {
                tracing::debug!("Loading config from {:?}", source.path());
                Self::from_file(source.path())?
            }
            None => {
                tracing::debug!("No config file found, using defaults");
                Self::default()
            }
        };

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        if let Ok(chunk_size) = env::var("SEGMENTA_CHUNK_SIZE") {
            if let Ok(size) = chunk_size.parse() {
                self.chunking.chunk_size = size;
            }
        }
        if let Ok(overlap) = env::var("SEGMENTA_CHUNK_OVERLAP") {
            if let Ok(o) = overlap.parse() {
                self.chunking.chunk_overlap = o;
            }
        }
        if let Ok(min_size) = env::var("SEGMENTA_MIN_CHUNK_SIZE") {
            if let Ok(size) = min_size.parse() {
                self.chunking.min_chunk_size = size;
            }
        }
        if let Ok(strategy) = env::var("SEGMENTA_STRATEGY") {
            if !strategy.trim().is_empty() {
                self.chunking.strategy = strategy.trim().to_string();
            }
        }
        if let Ok(tolerance) = env::var("SEGMENTA_LEGAL_TOLERANCE") {
            if let Ok(t) = tolerance.parse() {
                self.chunking.legal_tolerance = t;
            }
        }
        if let Ok(cleaning) = env::var("SEGMENTA_CLEANING") {
            if let Ok(enabled) = cleaning.parse() {
                self.cleaning.enabled = enabled;
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        self.chunk_config()?;

        if self.semantic.heading_max_chars == 0 {
            return Err(ChunkError::InvalidConfig(
                "Heading max chars must be non-zero".to_string(),
            ));
        }

        if self.input.max_file_size_mb == 0 {
            return Err(ChunkError::InvalidConfig(
                "Max file size must be non-zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Build the immutable engine configuration from `[chunking]`
    pub fn chunk_config(&self) -> Result<ChunkConfig> {
        ChunkConfig::new(
            self.chunking.chunk_size,
            self.chunking.chunk_overlap,
            self.chunking.min_chunk_size,
            self.chunking.strategy.as_str(),
        )?
        .with_legal_tolerance(self.chunking.legal_tolerance)
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Strategy: {}", self.chunking.strategy);
        tracing::info!("  Chunk size: {} chars", self.chunking.chunk_size);
        tracing::info!("  Overlap: {} chars", self.chunking.chunk_overlap);
        tracing::info!("  Min chunk size: {} chars", self.chunking.min_chunk_size);
        tracing::info!("  Legal tolerance: {}", self.chunking.legal_tolerance);
        tracing::info!(
            "  Heading max chars: {}",
            self.semantic.heading_max_chars
        );
        tracing::info!("  Cleaning enabled: {}", self.cleaning.enabled);
        tracing::info!(
            "  Include patterns: {} patterns",
            self.input.include_patterns.len()
        );
        tracing::info!(
            "  Exclude patterns: {} patterns",
            self.input.exclude_patterns.len()
        );
        tracing::info!("  Max file size: {} MB", self.input.max_file_size_mb);
    }
}
