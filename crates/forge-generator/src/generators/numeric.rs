//! Numeric value generators.

use forge_core::FieldValue;
use rand::Rng;

/// Upper bound (inclusive) for `int:rand`.
pub const DEFAULT_INT_MAX: i64 = 10_000;

/// Generate a random integer in `[0, DEFAULT_INT_MAX]`.
pub fn generate_int_rand<R: Rng>(rng: &mut R) -> FieldValue {
    generate_int_range(rng, 0, DEFAULT_INT_MAX)
}

/// Generate a random integer in the given range (inclusive on both ends).
pub fn generate_int_range<R: Rng>(rng: &mut R, low: i64, high: i64) -> FieldValue {
    FieldValue::Integer(rng.gen_range(low..=high))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_int_range() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let value = generate_int_range(&mut rng, 10, 20);
            if let FieldValue::Integer(v) = value {
                assert!((10..=20).contains(&v));
            } else {
                panic!("Expected Integer value");
            }
        }
    }

    #[test]
    fn test_generate_int_range_single_value() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10 {
            assert_eq!(generate_int_range(&mut rng, 5, 5), FieldValue::Integer(5));
        }
    }

    #[test]
    fn test_generate_int_range_hits_both_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let values: Vec<i64> = (0..1000)
            .filter_map(|_| generate_int_range(&mut rng, 0, 3).as_i64())
            .collect();

        assert!(values.contains(&0));
        assert!(values.contains(&3));
    }

    #[test]
    fn test_generate_int_rand_default_range() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..1000 {
            let v = generate_int_rand(&mut rng).as_i64().unwrap();
            assert!((0..=DEFAULT_INT_MAX).contains(&v));
        }
    }

    #[test]
    fn test_generate_int_range_extremes() {
        let mut rng = StdRng::seed_from_u64(42);
        // Full i64 span must not overflow
        let v = generate_int_range(&mut rng, i64::MIN, i64::MAX);
        assert!(v.as_i64().is_some());
    }
}
