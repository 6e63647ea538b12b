//! dataforge library
//!
//! Generates synthetic JSON Lines test data from a compact field schema.
//!
//! # Features
//!
//! - Compact schema notation: `{"age": "int:rand(18,65)", "status": "str:[a, b]"}`
//! - Console output or any number of files with count/random/uuid prefixes
//! - Parallel file generation with per-worker seeding
//! - Reproducible runs with `--seed`
//!
//! # Workspace Crates
//!
//! - `forge_core` - schema compiler, plan and record types
//! - `forge_generator` - record generation from a compiled plan
//! - `forge_populate_jsonl` - JSON Lines output, file naming, cleanup
//! - `forge_distributed` - work partitioning and parallel workers
//!
//! # CLI Usage
//!
//! ```bash
//! # 3 files of 100 records each in ./out
//! dataforge ./out --files-count 3 --data-lines 100 \
//!   --data-schema '{"id": "int:rand", "name": "str:rand", "ts": "timestamp:"}'
//!
//! # Print 5 records to stdout
//! dataforge . --files-count 0 --data-lines 5
//!
//! # Write dataforge.toml with the built-in defaults
//! dataforge --init-config
//! ```

pub mod cli;
pub mod config;
pub mod generate;
pub mod schema_source;

pub use cli::Cli;
pub use config::{ConfigFile, GenerateConfig};
pub use generate::{execute, GenerateSummary};
pub use schema_source::{load_raw_schema, SchemaSource};
