//! List-strategies command - show registered chunking strategies

use crate::cli::commands::chunk::build_chunker;
use crate::cli::output::{colors, print_header, print_json};
use crate::cli::OutputFormat;
use crate::core::config::Config;
use clap::Args;
use serde::Serialize;

/// Arguments for the list-strategies command
#[derive(Args, Debug, Default)]
pub struct StrategiesArgs {}

/// Strategy listing response
#[derive(Debug, Serialize)]
pub struct StrategiesResponse {
    pub default: String,
    pub strategies: Vec<String>,
}

/// Strategies known to the CLI, with the configured default
pub fn list(config: &Config) -> StrategiesResponse {
    let chunker = build_chunker(config);
    StrategiesResponse {
        default: config.chunking.strategy.clone(),
        strategies: chunker
            .registry()
            .names()
            .into_iter()
            .map(String::from)
            .collect(),
    }
}

/// Execute the list-strategies command
pub fn execute(
    _args: StrategiesArgs,
    config: &Config,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let response = list(config);

    match format {
        OutputFormat::Human => {
            print_header("Strategies:");
            for name in &response.strategies {
                if *name == response.default {
                    println!("  {} {}", name, colors::dim("(default)"));
                } else {
                    println!("  {name}");
                }
            }
        }
        OutputFormat::Json => {
            print_json(&response)?;
        }
    }

    Ok(())
}
