//! Tests for the show-config CLI command

use crate::cli::test_helpers::test_config;
use segmenta::cli::commands::config::{execute, ConfigArgs, ConfigResponse};
use segmenta::cli::OutputFormat;

#[test]
fn test_show_config_human() {
    let result = execute(ConfigArgs { all: true }, &test_config(), OutputFormat::Human);
    assert!(result.is_ok());
}

#[test]
fn test_show_config_json() {
    let result = execute(ConfigArgs::default(), &test_config(), OutputFormat::Json);
    assert!(result.is_ok());
}

#[test]
fn test_config_response_flattens_sections() {
    let response = ConfigResponse {
        config_file: "/tmp/segmenta/config.toml".to_string(),
        config: test_config(),
    };

    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["config_file"], "/tmp/segmenta/config.toml");
    assert_eq!(json["chunking"]["strategy"], "simple");
    assert_eq!(json["chunking"]["chunk_size"], 800);
    assert_eq!(json["semantic"]["heading_max_chars"], 80);
    assert_eq!(json["cleaning"]["enabled"], true);
}
