//! CLI adapter for segmenta
//!
//! Command-line front end for the chunking engine: loads files from
//! disk, runs them through the configured strategy and prints the
//! resulting chunks.
//!
//! # Architecture
//!
//! ```text
//! +------------------+      +------------------+
//! |      cli/        | ---> |      core/       |
//! | (clap adapter)   |      |  (domain logic)  |
//! +------------------+      +------------------+
//! ```

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

/// segmenta - Structure-aware document chunking for RAG pipelines
///
/// Splits plain-text documents into overlapping, metadata-tagged chunks
/// using simple, legal or semantic segmentation.
#[derive(Parser, Debug)]
#[command(name = "segmenta")]
#[command(version)]
#[command(about = "Structure-aware document chunking", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Log line format (logs go to stderr, filtered by RUST_LOG)
    #[arg(long, global = true, default_value = "compact")]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for scripting
    Json,
}

/// Format of log lines written to stderr
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum LogFormat {
    /// Single-line human-readable logs (default)
    #[default]
    Compact,
    /// Structured JSON logs
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Chunk files or directories
    Chunk(commands::ChunkArgs),

    /// List registered chunking strategies
    #[command(name = "list-strategies")]
    ListStrategies(commands::StrategiesArgs),

    /// Show the effective configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  segmenta completions bash > ~/.local/share/bash-completion/completions/segmenta
    ///   zsh:   segmenta completions zsh > ~/.zfunc/_segmenta
    ///   fish:  segmenta completions fish > ~/.config/fish/completions/segmenta.fish
    Completions(commands::CompletionsArgs),
}

/// Run the CLI with the provided arguments
pub fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let format = cli.format;

    match cli.command {
        // Completions need no configuration
        Commands::Completions(args) => commands::completions::execute(args),
        Commands::Chunk(args) => commands::chunk::execute(args, &load_config()?, format),
        Commands::ListStrategies(args) => {
            commands::strategies::execute(args, &load_config()?, format)
        }
        Commands::ShowConfig(args) => commands::config::execute(args, &load_config()?, format),
    }
}

fn load_config() -> crate::core::Result<crate::core::config::Config> {
    let config = crate::core::config::Config::load()?;
    config.log_config();
    Ok(config)
}
