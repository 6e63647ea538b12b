//! Individual value generators for each strategy.
//!
//! This module maps a compiled [`FieldDescriptor`] to the function that
//! produces its value.

pub mod list;
pub mod numeric;
pub mod static_value;
pub mod timestamp;
pub mod uuid;

use forge_core::{FieldDescriptor, FieldKind, FieldValue, Strategy};
use rand::Rng;

/// Generate one value for a field descriptor.
pub fn generate_value<R: Rng>(descriptor: &FieldDescriptor, rng: &mut R) -> FieldValue {
    match (descriptor.kind, &descriptor.strategy) {
        // Strategy is irrelevant for timestamps
        (FieldKind::Timestamp, _) => timestamp::generate_timestamp_now(),

        (FieldKind::String, Strategy::Random) => uuid::generate_uuid_string(rng),

        (FieldKind::Integer, Strategy::Random) => numeric::generate_int_rand(rng),

        (_, Strategy::Range { low, high }) => numeric::generate_int_range(rng, *low, *high),

        (_, Strategy::List { values }) => list::choose_from_list(rng, values),

        (_, Strategy::Static { value }) => static_value::generate_static(value),

        (kind, Strategy::Empty) => static_value::empty_value(kind),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_dispatch_by_kind_and_strategy() {
        let mut rng = StdRng::seed_from_u64(42);

        let ts = FieldDescriptor::new("t", FieldKind::Timestamp, Strategy::Random);
        assert!(generate_value(&ts, &mut rng).as_timestamp().is_some());

        let s = FieldDescriptor::new("s", FieldKind::String, Strategy::Random);
        assert_eq!(generate_value(&s, &mut rng).as_str().unwrap().len(), 36);

        let i = FieldDescriptor::new("i", FieldKind::Integer, Strategy::Random);
        assert!(generate_value(&i, &mut rng).as_i64().is_some());

        let e = FieldDescriptor::new("e", FieldKind::Integer, Strategy::Empty);
        assert!(generate_value(&e, &mut rng).is_null());
    }
}
