//! Command line definition.

use clap::Parser;
use forge_populate_jsonl::OutputArgs;
use std::path::PathBuf;

/// Generate synthetic JSON Lines test data from a field schema.
#[derive(Parser, Clone, Debug)]
#[command(name = "dataforge", version, about, long_about = None)]
pub struct Cli {
    /// Directory to write files into (ignored when files count is 0)
    #[arg(required_unless_present = "init_config")]
    pub path: Option<PathBuf>,

    #[command(flatten)]
    pub output: OutputArgs,

    /// Schema as JSON text or a path to a JSON file
    #[arg(long, alias = "data_schema")]
    pub data_schema: Option<String>,

    /// Number of parallel workers for file generation
    #[arg(long)]
    pub multiprocessing: Option<usize>,

    /// Base random seed (same seed = same data, timestamps aside)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Path to the configuration file
    #[arg(long, env = "DATAFORGE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Write a default configuration file and exit
    #[arg(long, alias = "init_config")]
    pub init_config: bool,
}
