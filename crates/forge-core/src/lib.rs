//! Core types for the dataforge record generator.
//!
//! This crate provides the foundational types shared by every other
//! dataforge crate, including:
//!
//! - [`FieldKind`] - The three scalar kinds a field can hold
//! - [`GenerationPlan`] - The compiled, immutable form of a user schema
//! - [`Record`] / [`FieldValue`] - One generated JSON-object-shaped record
//! - [`RawSchema`] - The `field -> "kind:strategy"` mapping read from JSON
//!
//! # Architecture
//!
//! ```text
//! forge-core (this crate)
//!    │
//!    ├─── forge-generator        (executes a GenerationPlan into Records)
//!    │
//!    ├─── forge-populate-jsonl   (writes Records as JSON Lines)
//!    │
//!    └─── forge-distributed      (fans file generation out to workers)
//! ```
//!
//! # Example
//!
//! ```rust
//! use forge_core::{GenerationPlan, RawSchema, Strategy};
//!
//! let raw = RawSchema::from_json_str(r#"{"age": "int:rand(18,65)", "name": "str:rand"}"#).unwrap();
//! let plan = GenerationPlan::compile(&raw).unwrap();
//!
//! assert_eq!(plan.field_names(), vec!["age", "name"]);
//! assert_eq!(
//!     plan.get_field("age").unwrap().strategy,
//!     Strategy::Range { low: 18, high: 65 }
//! );
//! ```

pub mod schema;
pub mod types;
pub mod values;

// Re-exports for convenience
pub use schema::{
    CompileError, CompileWarning, FieldDescriptor, GenerationPlan, RawSchema, SchemaSourceError,
    Strategy,
};
pub use types::{FieldKind, ScalarValue};
pub use values::{FieldValue, Record};
