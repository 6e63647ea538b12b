//! Record generator for dataforge.
//!
//! This crate executes a compiled [`GenerationPlan`](forge_core::GenerationPlan)
//! into [`Record`](forge_core::Record)s. Every validity check happened at
//! compile time, so generation has no error path.
//!
//! # Architecture
//!
//! ```text
//! GenerationPlan (compiled schema)
//!        │
//!        ▼
//! ┌──────────────────┐
//! │ RecordGenerator  │
//! │                  │
//! │  - plan          │
//! │  - rng (StdRng)  │
//! └────────┬─────────┘
//!          │
//!          ▼
//!    Record { field -> FieldValue, in plan order }
//! ```
//!
//! # Example
//!
//! ```rust
//! use forge_core::{FieldValue, GenerationPlan, RawSchema};
//! use forge_generator::RecordGenerator;
//!
//! let raw = RawSchema::from_json_str(r#"{"id": "int:rand(1,1)", "label": "str:fixed"}"#).unwrap();
//! let plan = GenerationPlan::compile(&raw).unwrap();
//!
//! let mut generator = RecordGenerator::with_seed(plan, 42);
//! let record = generator.next_record();
//! assert_eq!(record.get_field("id"), Some(&FieldValue::Integer(1)));
//! ```
//!
//! # Value resolution
//!
//! | Kind / Strategy  | Value                                          |
//! |------------------|------------------------------------------------|
//! | timestamp / *    | current time, float epoch seconds              |
//! | str / rand       | random UUID v4, hyphenated (36 chars)          |
//! | int / rand       | uniform integer in `[0, 10000]`                |
//! | * / list         | uniform choice from the list                   |
//! | int / range      | uniform integer in `[low, high]`               |
//! | * / static       | the fixed value                                |
//! | str / empty      | `""`                                           |
//! | int / empty      | `null`                                         |

pub mod generator;
pub mod generators;

// Re-exports for convenience
pub use generator::{generate_record, RecordGenerator, RecordIterator};
