//! Static and empty value generators.

use forge_core::{FieldKind, FieldValue, ScalarValue};

/// Return the compiled static value unchanged.
pub fn generate_static(value: &ScalarValue) -> FieldValue {
    FieldValue::from(value)
}

/// The empty value of a kind: `""` for strings, `null` otherwise.
pub fn empty_value(kind: FieldKind) -> FieldValue {
    match kind {
        FieldKind::String => FieldValue::String(String::new()),
        FieldKind::Integer | FieldKind::Timestamp => FieldValue::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_values() {
        assert_eq!(generate_static(&42.into()), FieldValue::Integer(42));
        assert_eq!(
            generate_static(&"hello".into()),
            FieldValue::String("hello".to_string())
        );
    }

    #[test]
    fn test_empty_values() {
        assert_eq!(
            empty_value(FieldKind::String),
            FieldValue::String(String::new())
        );
        assert_eq!(empty_value(FieldKind::Integer), FieldValue::Null);
    }
}
