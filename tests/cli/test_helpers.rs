//! CLI test helpers
//!
//! Provides utilities for testing CLI commands including:
//! - A configuration that ignores the user's config file and env vars
//! - Chunk arguments with small, test-friendly sizes

use segmenta::cli::commands::ChunkArgs;
use segmenta::Config;
use std::path::PathBuf;

/// Default configuration, untouched by the environment
pub fn test_config() -> Config {
    Config::default()
}

/// Arguments chunking `paths` with `strategy` at target 200, min 20,
/// no overlap
pub fn chunk_args(paths: &[PathBuf], strategy: &str) -> ChunkArgs {
    ChunkArgs {
        paths: paths.to_vec(),
        strategy: Some(strategy.to_string()),
        chunk_size: Some(200),
        overlap: Some(0),
        min_size: Some(20),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_args_defaults() {
        let args = chunk_args(&[PathBuf::from("a.txt")], "legal");
        assert_eq!(args.strategy.as_deref(), Some("legal"));
        assert!(args.include.is_empty());
        assert!(!args.no_clean);
        assert!(args.id.is_none());
    }

    #[test]
    fn test_config_is_valid() {
        assert!(test_config().validate().is_ok());
    }
}
