//! Command-line interface for dataforge
//!
//! # Usage Examples
//!
//! ## File Output
//! ```bash
//! # 10 files named 1_users.json .. 10_users.json, 1000 records each
//! dataforge ./out --files-count 10 --file-name users \
//!   --data-schema '{"id": "int:rand(1,100000)", "email": "str:rand", "created": "timestamp:"}'
//!
//! # Same, across 4 parallel workers, clearing old *.json files first
//! dataforge ./out --files-count 10 --multiprocessing 4 --clear-path
//!
//! # Schema from a file, uuid-prefixed names
//! dataforge ./out --data-schema ./schema.json --file-prefix uuid
//! ```
//!
//! ## Console Output
//! ```bash
//! # Records go to stdout, logs to stderr
//! dataforge . --files-count 0 --data-lines 5 > sample.jsonl
//! ```
//!
//! ## Configuration
//! ```bash
//! # Write dataforge.toml with the built-in defaults
//! dataforge --init-config
//!
//! # Use another config file
//! dataforge ./out --config ./team.toml
//! ```
//!
//! Set `RUST_LOG=debug` for per-file and per-worker logs.

use anyhow::Context;
use clap::Parser;
use dataforge::config::{init_config, ConfigFile, DEFAULT_CONFIG_FILE};
use dataforge::{Cli, GenerateConfig};
use std::path::PathBuf;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tokio::select! {
        result = run() => {
            if let Err(e) = result {
                eprintln!("Error: {e:#}");
                std::process::exit(1);
            }
        }
        Ok(()) = tokio::signal::ctrl_c() => {
            tracing::warn!("Operation interrupted by user (Ctrl+C)");
            std::process::exit(130);
        }
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    // Initialize tracing; stdout is reserved for console-mode records
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.init_config {
        let path = cli
            .config
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
        init_config(&path)?;
        return Ok(());
    }

    tracing::info!("============================================================");
    tracing::info!("dataforge {} - test data generation", env!("CARGO_PKG_VERSION"));
    tracing::info!("============================================================");

    let config_file =
        ConfigFile::load(cli.config.as_deref()).context("Failed to load configuration")?;
    let config = GenerateConfig::merge(&cli, &config_file)?
        .validate()
        .context("Invalid parameters")?;

    dataforge::execute(&config).await?;

    tracing::info!("============================================================");
    tracing::info!("Data generation completed successfully");
    tracing::info!("============================================================");
    Ok(())
}
