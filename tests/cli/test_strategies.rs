//! Tests for the list-strategies CLI command

use crate::cli::test_helpers::test_config;
use segmenta::cli::commands::strategies::{execute, list, StrategiesArgs};
use segmenta::cli::OutputFormat;

#[test]
fn test_list_builtin_strategies() {
    let response = list(&test_config());

    assert_eq!(response.strategies, vec!["legal", "semantic", "simple"]);
    assert_eq!(response.default, "simple");
}

#[test]
fn test_list_reports_configured_default() {
    let mut config = test_config();
    config.chunking.strategy = "legal".to_string();

    assert_eq!(list(&config).default, "legal");
}

#[test]
fn test_execute_both_formats() {
    for format in [OutputFormat::Human, OutputFormat::Json] {
        let result = execute(StrategiesArgs::default(), &test_config(), format);
        assert!(result.is_ok());
    }
}
