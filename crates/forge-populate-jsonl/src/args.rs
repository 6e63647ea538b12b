//! CLI argument definitions for JSON Lines output.
//!
//! Every value is optional so that anything not given on the command line
//! can fall back to the configuration file.

use crate::naming::FilePrefix;
use clap::Args;

/// Output arguments shared by console and file mode.
#[derive(Args, Clone, Debug, Default)]
pub struct OutputArgs {
    /// Number of files to generate (0 prints records to stdout)
    #[arg(long, alias = "files_count")]
    pub files_count: Option<u64>,

    /// Base name for generated files
    #[arg(long, alias = "file_name")]
    pub file_name: Option<String>,

    /// Prefix strategy for file names
    #[arg(long, value_enum, alias = "file_prefix")]
    pub file_prefix: Option<FilePrefix>,

    /// Number of records per file (or printed to stdout)
    #[arg(long, alias = "data_lines")]
    pub data_lines: Option<u64>,

    /// Remove existing *.json files from the output path before generating
    #[arg(long, alias = "clear_path")]
    pub clear_path: bool,
}
