//! Run configuration: config file, command line merge and validation.

pub mod file;

pub use file::{init_config, ConfigFile, DEFAULT_CONFIG_FILE};

use crate::cli::Cli;
use anyhow::Context;
use forge_populate_jsonl::{FilePrefix, OutputSettings};
use std::path::PathBuf;

/// Characters that may not appear in a base file name.
pub const INVALID_FILE_NAME_CHARS: [char; 9] = ['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Effective settings for one run, after merging the command line over the
/// config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateConfig {
    /// Output directory (ignored in console mode)
    pub path: PathBuf,
    /// Number of files; 0 selects console mode
    pub files_count: u64,
    pub file_name: String,
    pub file_prefix: FilePrefix,
    /// Records per file, or printed to the console
    pub data_lines: u64,
    /// Worker count for file generation
    pub multiprocessing: usize,
    pub clear_path: bool,
    /// Literal JSON schema or path to a JSON schema file
    pub data_schema: String,
    /// Base seed; `None` seeds from entropy
    pub seed: Option<u64>,
}

impl GenerateConfig {
    /// Merge command line arguments over a config file. Arguments win.
    pub fn merge(cli: &Cli, config: &ConfigFile) -> anyhow::Result<Self> {
        let path = cli
            .path
            .clone()
            .context("Output path is required (use '.' for the current directory)")?;
        let defaults = &config.defaults;

        Ok(Self {
            path,
            files_count: cli.output.files_count.unwrap_or(defaults.files_count),
            file_name: cli
                .output
                .file_name
                .clone()
                .unwrap_or_else(|| defaults.file_name.clone()),
            file_prefix: cli.output.file_prefix.unwrap_or(defaults.file_prefix),
            data_lines: cli.output.data_lines.unwrap_or(defaults.data_lines),
            multiprocessing: cli.multiprocessing.unwrap_or(defaults.multiprocessing),
            clear_path: cli.output.clear_path,
            data_schema: cli
                .data_schema
                .clone()
                .unwrap_or_else(|| config.schema.default_schema.clone()),
            seed: cli.seed,
        })
    }

    /// Whether records go to stdout instead of files.
    pub fn is_console_mode(&self) -> bool {
        self.files_count == 0
    }

    /// Naming settings for file output.
    pub fn output_settings(&self) -> OutputSettings {
        OutputSettings::new(self.file_name.clone(), self.file_prefix)
    }

    /// Check every parameter, correcting those that can be corrected.
    ///
    /// `multiprocessing` is clamped to the CPU count and the output path is
    /// canonicalized in file mode.
    pub fn validate(self) -> anyhow::Result<Self> {
        self.validate_with_cpus(forge_distributed::available_workers())
    }

    /// [`validate`](Self::validate) against an explicit CPU count.
    pub fn validate_with_cpus(mut self, cpus: usize) -> anyhow::Result<Self> {
        tracing::info!("Validating parameters...");

        if self.data_lines == 0 {
            anyhow::bail!("data_lines must be > 0, got: {}", self.data_lines);
        }

        if self.multiprocessing < 1 {
            anyhow::bail!("multiprocessing must be >= 1, got: {}", self.multiprocessing);
        }
        let cpus = cpus.max(1);
        if self.multiprocessing > cpus {
            tracing::warn!(
                "multiprocessing value {} exceeds CPU count ({}), setting multiprocessing to {}",
                self.multiprocessing,
                cpus,
                cpus
            );
            self.multiprocessing = cpus;
        }

        validate_file_name(&self.file_name)?;

        if self.is_console_mode() {
            tracing::info!("files_count is 0: data will be output to console");
        } else {
            if !self.path.exists() {
                anyhow::bail!("Path does not exist: {}", self.path.display());
            }
            if !self.path.is_dir() {
                anyhow::bail!("Path exists but is not a directory: {}", self.path.display());
            }
            self.path = std::fs::canonicalize(&self.path)
                .with_context(|| format!("Failed to resolve path: {}", self.path.display()))?;
        }

        if self.data_schema.trim().is_empty() {
            anyhow::bail!("Schema cannot be empty");
        }

        Ok(self)
    }
}

fn validate_file_name(file_name: &str) -> anyhow::Result<()> {
    if file_name.trim().is_empty() {
        anyhow::bail!("file_name cannot be empty");
    }
    if let Some(c) = file_name.chars().find(|c| INVALID_FILE_NAME_CHARS.contains(c)) {
        anyhow::bail!("file_name contains invalid character '{c}': {file_name}");
    }
    Ok(())
}
