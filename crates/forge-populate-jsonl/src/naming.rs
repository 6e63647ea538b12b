//! Output file naming.

use clap::ValueEnum;
use forge_generator::generators::uuid::generate_uuid_v4;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Extension used for every generated file.
pub const FILE_EXTENSION: &str = "json";

/// Number of hex characters in a `random` prefix.
pub const RANDOM_PREFIX_LEN: usize = 6;

/// How the per-file prefix is chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FilePrefix {
    /// Sequential file index, starting at 1
    #[default]
    Count,
    /// Random lowercase hex
    Random,
    /// Random UUID v4
    Uuid,
}

impl FilePrefix {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilePrefix::Count => "count",
            FilePrefix::Random => "random",
            FilePrefix::Uuid => "uuid",
        }
    }

    /// Whether two calls with the same index can produce different names.
    pub fn is_random(&self) -> bool {
        !matches!(self, FilePrefix::Count)
    }
}

impl fmt::Display for FilePrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilePrefix {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "count" => Ok(FilePrefix::Count),
            "random" => Ok(FilePrefix::Random),
            "uuid" => Ok(FilePrefix::Uuid),
            other => Err(format!(
                "Invalid file prefix '{other}'. Must be 'count', 'random', or 'uuid'"
            )),
        }
    }
}

/// Naming settings shared by every file of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputSettings {
    /// Base name, without prefix or extension
    pub file_name: String,
    pub file_prefix: FilePrefix,
}

impl OutputSettings {
    pub fn new(file_name: impl Into<String>, file_prefix: FilePrefix) -> Self {
        Self {
            file_name: file_name.into(),
            file_prefix,
        }
    }

    /// Build the file name for the file at `index`.
    pub fn file_name_for<R: Rng>(&self, index: u64, rng: &mut R) -> String {
        file_name(&self.file_name, self.file_prefix, index, rng)
    }
}

/// Build `{prefix}_{base}.json` for the given prefix strategy.
///
/// `index` is only used by [`FilePrefix::Count`].
pub fn file_name<R: Rng>(base: &str, prefix: FilePrefix, index: u64, rng: &mut R) -> String {
    let prefix = match prefix {
        FilePrefix::Count => index.to_string(),
        FilePrefix::Random => random_hex(rng, RANDOM_PREFIX_LEN),
        FilePrefix::Uuid => generate_uuid_v4(rng).hyphenated().to_string(),
    };
    format!("{prefix}_{base}.{FILE_EXTENSION}")
}

fn random_hex<R: Rng>(rng: &mut R, len: usize) -> String {
    const HEX: &[u8; 16] = b"0123456789abcdef";
    (0..len)
        .map(|_| HEX[rng.gen_range(0..HEX.len())] as char)
        .collect()
}
