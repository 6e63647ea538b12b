//! Generated values and records.
//!
//! A [`Record`] is what the generator hands to a writer: an ordered list of
//! `(field name, value)` pairs. Field order always matches the order of the
//! [`GenerationPlan`](crate::GenerationPlan) it was generated from, and the
//! `Serialize` impl keeps that order so JSON Lines output is stable.

use crate::types::ScalarValue;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// A single generated field value.
///
/// Serializes to the natural JSON scalar: `null`, a number or a string.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Empty integer field
    Null,
    Integer(i64),
    String(String),
    /// Seconds since the Unix epoch, sub-second precision
    Timestamp(f64),
}

impl FieldValue {
    /// Check if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Try to get this value as an integer.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get this value as a string slice.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as a timestamp in epoch seconds.
    pub fn as_timestamp(&self) -> Option<f64> {
        match self {
            Self::Timestamp(t) => Some(*t),
            _ => None,
        }
    }
}

impl From<ScalarValue> for FieldValue {
    fn from(value: ScalarValue) -> Self {
        match value {
            ScalarValue::Integer(i) => FieldValue::Integer(i),
            ScalarValue::String(s) => FieldValue::String(s),
        }
    }
}

impl From<&ScalarValue> for FieldValue {
    fn from(value: &ScalarValue) -> Self {
        value.clone().into()
    }
}

/// One generated record, fields in plan order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Vec<(String, FieldValue)>,
}

impl Record {
    /// Create an empty record with room for `capacity` fields.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: Vec::with_capacity(capacity),
        }
    }

    /// Append a field. Callers are responsible for keeping names unique.
    pub fn push(&mut self, name: impl Into<String>, value: FieldValue) {
        self.fields.push((name.into(), value));
    }

    /// Get a field value by name.
    pub fn get_field(&self, name: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }

    /// Field names in output order.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Iterate over `(name, value)` pairs in output order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Convert to a `serde_json::Value` object (field order preserved).
    pub fn to_json(&self) -> serde_json::Value {
        let map: serde_json::Map<String, serde_json::Value> = self
            .fields
            .iter()
            .map(|(name, value)| {
                let json = match value {
                    FieldValue::Null => serde_json::Value::Null,
                    FieldValue::Integer(i) => serde_json::Value::from(*i),
                    FieldValue::String(s) => serde_json::Value::from(s.as_str()),
                    FieldValue::Timestamp(t) => serde_json::Value::from(*t),
                };
                (name.clone(), json)
            })
            .collect();
        serde_json::Value::Object(map)
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> Record {
        let mut record = Record::with_capacity(4);
        record.push("id", FieldValue::Integer(1));
        record.push("label", FieldValue::String("fixed".to_string()));
        record.push("empty", FieldValue::Null);
        record.push("ts", FieldValue::Timestamp(1706543210.5));
        record
    }

    #[test]
    fn test_serialize_preserves_field_order() {
        let json = serde_json::to_string(&sample_record()).unwrap();
        assert_eq!(
            json,
            r#"{"id":1,"label":"fixed","empty":null,"ts":1706543210.5}"#
        );
    }

    #[test]
    fn test_to_json_matches_serialize() {
        let record = sample_record();
        let via_value = serde_json::to_string(&record.to_json()).unwrap();
        let direct = serde_json::to_string(&record).unwrap();
        assert_eq!(via_value, direct);
    }

    #[test]
    fn test_get_field() {
        let record = sample_record();
        assert_eq!(record.get_field("id"), Some(&FieldValue::Integer(1)));
        assert!(record.get_field("empty").unwrap().is_null());
        assert_eq!(record.get_field("missing"), None);
        assert_eq!(record.field_names(), vec!["id", "label", "empty", "ts"]);
        assert_eq!(record.len(), 4);
    }

    #[test]
    fn test_scalar_conversion() {
        assert_eq!(
            FieldValue::from(ScalarValue::Integer(5)),
            FieldValue::Integer(5)
        );
        assert_eq!(
            FieldValue::from(&ScalarValue::String("a".to_string())),
            FieldValue::String("a".to_string())
        );
    }
}
