//! Config command - show the effective configuration

use crate::cli::output::print_json;
use crate::cli::OutputFormat;
use crate::core::config::Config;
use crate::core::xdg::XdgDirs;
use clap::Args;
use serde::Serialize;

/// Arguments for the config command
#[derive(Args, Debug, Default)]
pub struct ConfigArgs {
    /// Also show input and cleaning settings
    #[arg(long, short = 'a')]
    pub all: bool,
}

/// Configuration response
#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    pub config_file: String,
    #[serde(flatten)]
    pub config: Config,
}

/// Execute the config command
pub fn execute(
    args: ConfigArgs,
    config: &Config,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let config_file = XdgDirs::new()
        .locate_config()
        .map(|source| source.path().display().to_string())
        .unwrap_or_else(|| "(defaults)".to_string());
    let response = ConfigResponse {
        config_file,
        config: config.clone(),
    };

    match format {
        OutputFormat::Human => {
            let config = &response.config;
            println!("Configuration:");
            println!("  config_file: {}", response.config_file);
            println!("  chunking:");
            println!("    strategy: {}", config.chunking.strategy);
            println!("    chunk_size: {}", config.chunking.chunk_size);
            println!("    chunk_overlap: {}", config.chunking.chunk_overlap);
            println!("    min_chunk_size: {}", config.chunking.min_chunk_size);
            println!("    legal_tolerance: {}", config.chunking.legal_tolerance);
            println!("  semantic:");
            println!(
                "    heading_max_chars: {}",
                config.semantic.heading_max_chars
            );
            if args.all {
                println!("  cleaning:");
                println!("    enabled: {}", config.cleaning.enabled);
                println!("    remove_urls: {}", config.cleaning.remove_urls);
                println!("    remove_emails: {}", config.cleaning.remove_emails);
                println!(
                    "    fix_pdf_artifacts: {}",
                    config.cleaning.fix_pdf_artifacts
                );
                println!(
                    "    join_broken_lines: {}",
                    config.cleaning.join_broken_lines
                );
                println!(
                    "    remove_page_numbers: {}",
                    config.cleaning.remove_page_numbers
                );
                println!(
                    "    normalize_whitespace: {}",
                    config.cleaning.normalize_whitespace
                );
                println!("  input:");
                println!("    include_patterns: {:?}", config.input.include_patterns);
                println!("    exclude_patterns: {:?}", config.input.exclude_patterns);
                println!("    max_file_size_mb: {}", config.input.max_file_size_mb);
            }
        }
        OutputFormat::Json => {
            print_json(&response)?;
        }
    }

    Ok(())
}
