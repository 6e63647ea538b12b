//! JSON Lines output for dataforge.
//!
//! This crate turns generated records into JSON Lines, either on standard
//! output or in a set of named files inside a target directory.
//!
//! # Output format
//!
//! One JSON object per line, fields in plan order, no enclosing array:
//!
//! ```text
//! {"id":42,"timestamp":1706543210.123456,"value":"3f2b6c1e-..."}
//! {"id":7,"timestamp":1706543210.123461,"value":"a90d1f44-..."}
//! ```
//!
//! # File naming
//!
//! | Prefix   | File name                 |
//! |----------|---------------------------|
//! | `count`  | `{index}_{name}.json`     |
//! | `random` | `{6 hex chars}_{name}.json` |
//! | `uuid`   | `{uuid v4}_{name}.json`   |
//!
//! # Example
//!
//! ```ignore
//! use forge_populate_jsonl::{FilePrefix, JsonlPopulator, OutputSettings};
//!
//! let settings = OutputSettings::new("users", FilePrefix::Count);
//! let mut populator = JsonlPopulator::with_seed(plan, settings, 42);
//!
//! let output = populator.populate_file(Path::new("out"), 1, 1000)?;
//! println!("Wrote {} rows to {}", output.metrics.rows_written, output.path.display());
//! ```

pub mod args;
pub mod cleanup;
pub mod error;
pub mod naming;
pub mod populator;

pub use args::OutputArgs;
pub use cleanup::clear_directory;
pub use error::JsonlPopulatorError;
pub use naming::{file_name, FilePrefix, OutputSettings};
pub use populator::{write_jsonl, FileOutput, JsonlPopulator, PopulateMetrics, DEFAULT_BUFFER_SIZE};
