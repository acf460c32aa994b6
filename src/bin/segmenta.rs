//! segmenta CLI - chunk documents from the command line
//!
//! # Examples
//!
//! ```bash
//! # Chunk a statute with the legal strategy
//! segmenta chunk reglamento.txt --strategy legal
//!
//! # Chunk a directory and emit JSON
//! segmenta chunk docs/ --format json > chunks.json
//!
//! # List strategies
//! segmenta list-strategies
//! ```

use clap::Parser;
use segmenta::cli::{run, Cli, LogFormat};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_logging(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "segmenta=warn".into());
    let registry = tracing_subscriber::registry().with(filter);

    // stdout carries command output; logs always go to stderr
    match format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Compact => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .compact()
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_format);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
