//! Scalar kinds and compile-time values.
//!
//! `FieldKind` is the type universe of a dataforge schema. There are exactly
//! three kinds, named in instructions by their keyword:
//!
//! | Keyword     | Kind        | JSON output                         |
//! |-------------|-------------|-------------------------------------|
//! | `timestamp` | `Timestamp` | float seconds since the Unix epoch  |
//! | `str`       | `String`    | string                              |
//! | `int`       | `Integer`   | integer, or `null` when empty       |

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Scalar data type of a schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Wall-clock time at generation
    Timestamp,
    /// Text
    String,
    /// 64-bit signed integer
    Integer,
}

impl FieldKind {
    /// All kinds, in the order they are listed in error messages.
    pub const ALL: [FieldKind; 3] = [FieldKind::Timestamp, FieldKind::String, FieldKind::Integer];

    /// The keyword used for this kind in an instruction string.
    pub fn keyword(&self) -> &'static str {
        match self {
            FieldKind::Timestamp => "timestamp",
            FieldKind::String => "str",
            FieldKind::Integer => "int",
        }
    }

    /// Keywords of every supported kind, for diagnostics.
    pub fn keywords() -> Vec<&'static str> {
        Self::ALL.iter().map(|k| k.keyword()).collect()
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl FromStr for FieldKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "timestamp" => Ok(FieldKind::Timestamp),
            "str" => Ok(FieldKind::String),
            "int" => Ok(FieldKind::Integer),
            _ => Err(format!("Unknown field kind: {s}")),
        }
    }
}

/// A kind-typed value fixed at compile time (list elements, static values).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScalarValue {
    Integer(i64),
    String(String),
}

impl ScalarValue {
    /// The kind this value belongs to.
    pub fn kind(&self) -> FieldKind {
        match self {
            ScalarValue::Integer(_) => FieldKind::Integer,
            ScalarValue::String(_) => FieldKind::String,
        }
    }

    /// Try to get this value as an integer.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ScalarValue::Integer(i) => Some(*i),
            ScalarValue::String(_) => None,
        }
    }

    /// Try to get this value as a string slice.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ScalarValue::String(s) => Some(s),
            ScalarValue::Integer(_) => None,
        }
    }
}

impl From<i64> for ScalarValue {
    fn from(value: i64) -> Self {
        ScalarValue::Integer(value)
    }
}

impl From<&str> for ScalarValue {
    fn from(value: &str) -> Self {
        ScalarValue::String(value.to_string())
    }
}

impl From<String> for ScalarValue {
    fn from(value: String) -> Self {
        ScalarValue::String(value)
    }
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarValue::Integer(i) => write!(f, "{i}"),
            ScalarValue::String(s) => f.write_str(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_keywords_round_trip() {
        for kind in FieldKind::ALL {
            assert_eq!(kind.keyword().parse::<FieldKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_kind_rejects_long_names() {
        // Only the short keywords are accepted
        assert!("string".parse::<FieldKind>().is_err());
        assert!("integer".parse::<FieldKind>().is_err());
        assert!("float".parse::<FieldKind>().is_err());
        assert!("".parse::<FieldKind>().is_err());
    }

    #[test]
    fn test_scalar_value_kind() {
        assert_eq!(ScalarValue::from(7).kind(), FieldKind::Integer);
        assert_eq!(ScalarValue::from("x").kind(), FieldKind::String);
        assert_eq!(ScalarValue::from(7).as_i64(), Some(7));
        assert_eq!(ScalarValue::from("x").as_i64(), None);
        assert_eq!(ScalarValue::from("x").as_str(), Some("x"));
    }
}
