//! `dataforge.toml` configuration file.
//!
//! ```toml
//! [defaults]
//! files_count = 10
//! file_name = "generated_data"
//! file_prefix = "count"
//! data_lines = 1000
//! multiprocessing = 1
//!
//! [schema]
//! default_schema = '{"id": "int:rand", "timestamp": "timestamp:", "value": "str:rand"}'
//! ```

use anyhow::Context;
use forge_populate_jsonl::FilePrefix;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "dataforge.toml";

pub const DEFAULT_FILES_COUNT: u64 = 10;
pub const DEFAULT_FILE_NAME: &str = "generated_data";
pub const DEFAULT_DATA_LINES: u64 = 1000;
pub const DEFAULT_MULTIPROCESSING: usize = 1;
pub const DEFAULT_SCHEMA: &str =
    r#"{"id": "int:rand", "timestamp": "timestamp:", "value": "str:rand"}"#;

const CONFIG_HEADER: &str = "# dataforge default configuration\n\
# Keys match the command line argument names\n\n";

/// Parsed configuration file. Missing keys take the built-in defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub defaults: DefaultsSection,
    pub schema: SchemaSection,
}

/// `[defaults]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsSection {
    pub files_count: u64,
    pub file_name: String,
    pub file_prefix: FilePrefix,
    pub data_lines: u64,
    pub multiprocessing: usize,
}

impl Default for DefaultsSection {
    fn default() -> Self {
        Self {
            files_count: DEFAULT_FILES_COUNT,
            file_name: DEFAULT_FILE_NAME.to_string(),
            file_prefix: FilePrefix::Count,
            data_lines: DEFAULT_DATA_LINES,
            multiprocessing: DEFAULT_MULTIPROCESSING,
        }
    }
}

/// `[schema]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemaSection {
    /// Literal JSON schema or path to a JSON file
    pub default_schema: String,
}

impl Default for SchemaSection {
    fn default() -> Self {
        Self {
            default_schema: DEFAULT_SCHEMA.to_string(),
        }
    }
}

impl ConfigFile {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        toml::from_str(content).context("Failed to parse configuration TOML")
    }

    /// Load configuration from a file.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Load the configuration for a run.
    ///
    /// An explicit path must exist. Without one, `dataforge.toml` in the
    /// working directory is used if present, otherwise built-in defaults.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        if let Some(path) = explicit {
            let config = Self::from_file(path)?;
            tracing::info!("Configuration loaded from '{}'", path.display());
            return Ok(config);
        }

        let path = Path::new(DEFAULT_CONFIG_FILE);
        if !path.exists() {
            tracing::warn!(
                "Configuration file '{}' not found. Using built-in defaults.",
                path.display()
            );
            return Ok(Self::default());
        }

        let config = Self::from_file(path)?;
        tracing::info!("Configuration loaded from '{}'", path.display());
        Ok(config)
    }

    /// Render as TOML with a short header comment.
    pub fn to_toml_string(&self) -> anyhow::Result<String> {
        let body = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        Ok(format!("{CONFIG_HEADER}{body}"))
    }
}

/// Write a default configuration file unless one already exists.
///
/// Returns `true` if the file was created.
pub fn init_config(path: &Path) -> anyhow::Result<bool> {
    if path.exists() {
        tracing::info!("Configuration file '{}' already exists", path.display());
        return Ok(false);
    }

    let content = ConfigFile::default().to_toml_string()?;
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write config file: {}", path.display()))?;

    tracing::info!("Created default configuration file: {}", path.display());
    Ok(true)
}
