//! Schema definitions and the schema compiler.
//!
//! A dataforge schema is a JSON object mapping field names to instruction
//! strings:
//!
//! ```json
//! {
//!   "id": "int:rand(1,1000)",
//!   "status": "str:[active, inactive]",
//!   "created_at": "timestamp:",
//!   "note": "str:"
//! }
//! ```
//!
//! ## Type Hierarchy
//!
//! - `RawSchema` - Ordered `field -> instruction` pairs, as read from JSON
//! - `FieldDescriptor` - One compiled field: kind plus strategy
//! - `GenerationPlan` - All compiled fields, immutable, in schema order
//!
//! Compilation validates everything that can be validated up front, so
//! record generation from a plan never fails.

pub mod instruction;

use crate::types::{FieldKind, ScalarValue};
use instruction::{
    classify_strategy, parse_range_bounds, split_instruction, StrategyToken,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

// ============================================================================
// Error Types
// ============================================================================

/// Error type for schema compilation.
///
/// Every field-level variant names the field and the raw instruction text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompileError {
    /// Instruction has no `kind:strategy` separator
    #[error("Field '{field}': instruction must have the form 'kind:strategy', got '{instruction}'")]
    MalformedInstruction { field: String, instruction: String },

    /// Kind keyword is not one of the supported kinds
    #[error(
        "Field '{field}': unknown kind '{kind}' in '{instruction}' (expected one of: {expected})",
        expected = FieldKind::keywords().join(", ")
    )]
    UnknownKind {
        field: String,
        instruction: String,
        kind: String,
    },

    /// `rand(a,b)` used with a kind other than `int`
    #[error("Field '{field}': range strategy requires kind 'int', got '{kind}' in '{instruction}'")]
    RangeOnNonInteger {
        field: String,
        instruction: String,
        kind: FieldKind,
    },

    /// Range bounds are not integers or are reversed
    #[error("Field '{field}': invalid range in '{instruction}': {reason}")]
    InvalidRange {
        field: String,
        instruction: String,
        reason: String,
    },

    /// Bracketed list cannot be parsed
    #[error("Field '{field}': malformed list in '{instruction}': {reason}")]
    MalformedList {
        field: String,
        instruction: String,
        reason: String,
    },

    /// List element does not parse as the field's kind
    #[error("Field '{field}': list element '{element}' is not a valid {kind} value in '{instruction}'")]
    TypeMismatchInList {
        field: String,
        instruction: String,
        kind: FieldKind,
        element: String,
    },

    /// Static value does not parse as the field's kind
    #[error("Field '{field}': '{value}' is not a valid {kind} value in '{instruction}'")]
    InvalidStaticValue {
        field: String,
        instruction: String,
        kind: FieldKind,
        value: String,
    },

    /// Field name is empty
    #[error("Field name cannot be empty (instruction: '{instruction}')")]
    EmptyFieldName { field: String, instruction: String },

    /// Schema has no fields
    #[error("Schema cannot be empty")]
    EmptySchema,

    /// Same field name appears twice
    #[error("Field '{field}' is defined more than once (second definition: '{instruction}')")]
    DuplicateField { field: String, instruction: String },
}

impl CompileError {
    /// Name of the offending field, if the error is field-level.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::MalformedInstruction { field, .. }
            | Self::UnknownKind { field, .. }
            | Self::RangeOnNonInteger { field, .. }
            | Self::InvalidRange { field, .. }
            | Self::MalformedList { field, .. }
            | Self::TypeMismatchInList { field, .. }
            | Self::InvalidStaticValue { field, .. }
            | Self::EmptyFieldName { field, .. }
            | Self::DuplicateField { field, .. } => Some(field),
            Self::EmptySchema => None,
        }
    }
}

/// Non-fatal diagnostic produced during compilation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileWarning {
    /// A timestamp field carried strategy text, which is ignored
    TimestampStrategyIgnored { field: String, strategy: String },
}

impl std::fmt::Display for CompileWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TimestampStrategyIgnored { field, strategy } => write!(
                f,
                "Field '{field}': timestamp fields always use the current time, ignoring '{strategy}'"
            ),
        }
    }
}

/// Error type for loading a raw schema from JSON.
#[derive(Debug, thiserror::Error)]
pub enum SchemaSourceError {
    /// Error reading schema file
    #[error("Failed to read schema file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing JSON
    #[error("Failed to parse schema JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Top-level JSON value is not an object
    #[error("Schema must be a JSON object, got {0}")]
    NotAnObject(&'static str),

    /// A field's instruction is not a JSON string
    #[error("Field '{field}': instruction must be a string, got {found}")]
    NonStringInstruction { field: String, found: &'static str },
}

// ============================================================================
// Raw Schema
// ============================================================================

/// Uncompiled schema: ordered `(field name, instruction)` pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawSchema {
    entries: Vec<(String, String)>,
}

impl RawSchema {
    /// Build a raw schema from pairs, keeping their order.
    pub fn new<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Parse a raw schema from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, SchemaSourceError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        Self::from_json_value(&value)
    }

    /// Load a raw schema from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SchemaSourceError> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Convert an already-parsed JSON object into a raw schema.
    pub fn from_json_value(value: &serde_json::Value) -> Result<Self, SchemaSourceError> {
        let object = value
            .as_object()
            .ok_or_else(|| SchemaSourceError::NotAnObject(json_type_name(value)))?;

        let entries = object
            .iter()
            .map(|(field, instruction)| match instruction {
                serde_json::Value::String(s) => Ok((field.clone(), s.clone())),
                other => Err(SchemaSourceError::NonStringInstruction {
                    field: field.clone(),
                    found: json_type_name(other),
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { entries })
    }

    /// Iterate over `(field, instruction)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(f, i)| (f.as_str(), i.as_str()))
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the schema has no fields.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render back to compact JSON, fields in order.
    pub fn to_json_string(&self) -> String {
        let object: serde_json::Map<String, serde_json::Value> = self
            .entries
            .iter()
            .map(|(f, i)| (f.clone(), serde_json::Value::String(i.clone())))
            .collect();
        serde_json::Value::Object(object).to_string()
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

// ============================================================================
// Compiled Plan
// ============================================================================

/// How a field's value is produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Strategy {
    /// Fresh random value per record (current time for timestamps)
    Random,

    /// Uniform choice from a non-empty list
    List {
        /// Candidate values, in the order they were written
        values: Vec<ScalarValue>,
    },

    /// Uniform integer in a range
    Range {
        /// Minimum value (inclusive)
        low: i64,
        /// Maximum value (inclusive)
        high: i64,
    },

    /// Same value on every record
    Static {
        /// The value to emit
        value: ScalarValue,
    },

    /// The kind's empty value: `null` for int, `""` for str
    Empty,
}

/// Compiled descriptor of a single field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Field name
    pub name: String,

    /// Scalar kind
    pub kind: FieldKind,

    /// Generation strategy, already validated against `kind`
    pub strategy: Strategy,
}

impl FieldDescriptor {
    /// Create a descriptor. No validation is done here; use
    /// [`GenerationPlan::compile`] for user input.
    pub fn new(name: impl Into<String>, kind: FieldKind, strategy: Strategy) -> Self {
        Self {
            name: name.into(),
            kind,
            strategy,
        }
    }
}

/// Compiled, immutable generation plan.
///
/// Workers each hold their own clone; nothing mutates a plan after
/// compilation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationPlan {
    fields: Vec<FieldDescriptor>,
}

impl GenerationPlan {
    /// Compile a raw schema, logging any warnings.
    pub fn compile(raw: &RawSchema) -> Result<Self, CompileError> {
        let (plan, warnings) = Self::compile_with_warnings(raw)?;
        for warning in &warnings {
            tracing::warn!("{warning}");
        }
        tracing::debug!("Schema compiled: {} field(s)", plan.len());
        Ok(plan)
    }

    /// Compile a raw schema and return the warnings instead of logging them.
    ///
    /// Fails on the first invalid field; no partial plan is produced.
    pub fn compile_with_warnings(
        raw: &RawSchema,
    ) -> Result<(Self, Vec<CompileWarning>), CompileError> {
        if raw.is_empty() {
            return Err(CompileError::EmptySchema);
        }

        let mut seen = HashSet::with_capacity(raw.len());
        let mut fields = Vec::with_capacity(raw.len());
        let mut warnings = Vec::new();

        for (name, instruction) in raw.iter() {
            if name.trim().is_empty() {
                return Err(CompileError::EmptyFieldName {
                    field: name.to_string(),
                    instruction: instruction.to_string(),
                });
            }
            if !seen.insert(name) {
                return Err(CompileError::DuplicateField {
                    field: name.to_string(),
                    instruction: instruction.to_string(),
                });
            }
            tracing::trace!("Compiling field: {name} = {instruction}");
            fields.push(compile_field(name, instruction, &mut warnings)?);
        }

        Ok((Self { fields }, warnings))
    }

    /// Get a field descriptor by name.
    pub fn get_field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// All descriptors in schema order.
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// All field names in schema order.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the plan has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

// ============================================================================
// Field Compilation
// ============================================================================

fn compile_field(
    name: &str,
    instruction: &str,
    warnings: &mut Vec<CompileWarning>,
) -> Result<FieldDescriptor, CompileError> {
    let (kind_text, strategy_text) = split_instruction(instruction).ok_or_else(
        || CompileError::MalformedInstruction {
            field: name.to_string(),
            instruction: instruction.to_string(),
        },
    )?;

    let kind: FieldKind = kind_text
        .parse()
        .map_err(|_| CompileError::UnknownKind {
            field: name.to_string(),
            instruction: instruction.to_string(),
            kind: kind_text.to_string(),
        })?;

    // Timestamps are always "now"; whatever follows the colon is ignored
    if kind == FieldKind::Timestamp {
        let ignored = strategy_text.trim();
        if !ignored.is_empty() {
            warnings.push(CompileWarning::TimestampStrategyIgnored {
                field: name.to_string(),
                strategy: ignored.to_string(),
            });
        }
        return Ok(FieldDescriptor::new(name, kind, Strategy::Random));
    }

    let token = classify_strategy(strategy_text).map_err(|reason| {
        CompileError::MalformedList {
            field: name.to_string(),
            instruction: instruction.to_string(),
            reason,
        }
    })?;

    let strategy = match token {
        StrategyToken::Empty => Strategy::Empty,

        StrategyToken::Random => Strategy::Random,

        StrategyToken::Range(args) => {
            if kind != FieldKind::Integer {
                return Err(CompileError::RangeOnNonInteger {
                    field: name.to_string(),
                    instruction: instruction.to_string(),
                    kind,
                });
            }
            let (low, high) = parse_range_bounds(args).map_err(|reason| {
                CompileError::InvalidRange {
                    field: name.to_string(),
                    instruction: instruction.to_string(),
                    reason,
                }
            })?;
            Strategy::Range { low, high }
        }

        StrategyToken::List(items) => Strategy::List {
            values: compile_list(name, instruction, kind, items)?,
        },

        StrategyToken::Literal(text) => {
            let value = parse_scalar(kind, text).ok_or_else(|| CompileError::InvalidStaticValue {
                field: name.to_string(),
                instruction: instruction.to_string(),
                kind,
                value: text.to_string(),
            })?;
            Strategy::Static { value }
        }
    };

    Ok(FieldDescriptor::new(name, kind, strategy))
}

fn compile_list(
    name: &str,
    instruction: &str,
    kind: FieldKind,
    items: Vec<String>,
) -> Result<Vec<ScalarValue>, CompileError> {
    items
        .into_iter()
        .map(|item| {
            parse_scalar(kind, &item).ok_or_else(|| CompileError::TypeMismatchInList {
                field: name.to_string(),
                instruction: instruction.to_string(),
                kind,
                element: item,
            })
        })
        .collect()
}

/// Parse text as a value of `kind`. Timestamps have no literal form.
fn parse_scalar(kind: FieldKind, text: &str) -> Option<ScalarValue> {
    match kind {
        FieldKind::Integer => text.trim().parse::<i64>().ok().map(ScalarValue::Integer),
        FieldKind::String => Some(ScalarValue::String(text.to_string())),
        FieldKind::Timestamp => None,
    }
}
