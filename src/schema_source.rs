//! Resolving `--data-schema` into a raw schema.

use anyhow::Context;
use forge_core::RawSchema;
use std::path::{Path, PathBuf};

/// Where a schema comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaSource {
    /// Inline JSON text
    Literal(String),
    /// Path to a JSON file
    File(PathBuf),
}

impl SchemaSource {
    /// Decide whether `input` names a schema file or holds JSON text.
    ///
    /// Input is a file when it looks like a path (ends in `.json` or contains
    /// a path separator) and that file exists.
    pub fn detect(input: &str) -> Self {
        let trimmed = input.trim();
        let looks_like_path =
            trimmed.ends_with(".json") || trimmed.contains('/') || trimmed.contains('\\');

        if looks_like_path && Path::new(trimmed).is_file() {
            SchemaSource::File(PathBuf::from(trimmed))
        } else {
            SchemaSource::Literal(input.to_string())
        }
    }

    /// Read and parse the schema.
    pub fn load(&self) -> anyhow::Result<RawSchema> {
        match self {
            SchemaSource::File(path) => {
                tracing::info!("Loading schema from file: {}", path.display());
                RawSchema::from_file(path)
                    .with_context(|| format!("Failed to load schema from {}", path.display()))
            }
            SchemaSource::Literal(json) => {
                tracing::debug!("Parsing schema from JSON string");
                RawSchema::from_json_str(json).context("Invalid JSON in data schema")
            }
        }
    }
}

/// Detect and load a schema in one step.
pub fn load_raw_schema(input: &str) -> anyhow::Result<RawSchema> {
    SchemaSource::detect(input).load()
}
