//! Timestamp value generator.

use chrono::{DateTime, Utc};
use forge_core::FieldValue;

/// Generate the current UTC time as float epoch seconds.
///
/// This is NOT deterministic - the clock is read on every call, so two
/// timestamp fields in the same record can differ slightly.
pub fn generate_timestamp_now() -> FieldValue {
    FieldValue::Timestamp(epoch_seconds(Utc::now()))
}

/// Convert a UTC datetime to seconds since the epoch, microsecond precision.
pub fn epoch_seconds(dt: DateTime<Utc>) -> f64 {
    dt.timestamp_micros() as f64 / 1_000_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch_seconds() {
        let dt = DateTime::from_timestamp(1_706_543_210, 500_000_000).unwrap();
        assert_eq!(epoch_seconds(dt), 1_706_543_210.5);
    }

    #[test]
    fn test_timestamp_close_to_now() {
        let before = epoch_seconds(Utc::now());
        let value = generate_timestamp_now().as_timestamp().unwrap();
        let after = epoch_seconds(Utc::now());

        assert!(value >= before);
        assert!(value <= after);
    }
}
