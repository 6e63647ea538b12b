//! UUID value generator.

use forge_core::FieldValue;
use rand::Rng;
use uuid::Uuid;

/// Generate a random UUID v4 using the provided RNG.
pub fn generate_uuid_v4<R: Rng>(rng: &mut R) -> Uuid {
    // Generate 16 random bytes
    let mut bytes = [0u8; 16];
    rng.fill(&mut bytes);

    // Set version (4) and variant (RFC 4122) bits
    bytes[6] = (bytes[6] & 0x0f) | 0x40; // Version 4
    bytes[8] = (bytes[8] & 0x3f) | 0x80; // Variant RFC 4122

    Uuid::from_bytes(bytes)
}

/// Generate a random UUID v4 rendered in hyphenated 8-4-4-4-12 form.
pub fn generate_uuid_string<R: Rng>(rng: &mut R) -> FieldValue {
    FieldValue::String(generate_uuid_v4(rng).hyphenated().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_uuid_string_format() {
        let mut rng = StdRng::seed_from_u64(42);
        let value = generate_uuid_string(&mut rng);
        let text = value.as_str().unwrap();

        assert_eq!(text.len(), 36);
        let groups: Vec<usize> = text.split('-').map(str::len).collect();
        assert_eq!(groups, vec![8, 4, 4, 4, 12]);
        assert!(text
            .chars()
            .all(|c| c == '-' || (c.is_ascii_hexdigit() && !c.is_ascii_uppercase())));
    }

    #[test]
    fn test_uuid_uniqueness() {
        let mut rng = StdRng::seed_from_u64(42);
        let value1 = generate_uuid_string(&mut rng);
        let value2 = generate_uuid_string(&mut rng);
        assert_ne!(value1, value2);
    }

    #[test]
    fn test_uuid_deterministic() {
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);

        assert_eq!(generate_uuid_v4(&mut rng1), generate_uuid_v4(&mut rng2));
    }

    #[test]
    fn test_uuid_version() {
        let mut rng = StdRng::seed_from_u64(42);
        let uuid = generate_uuid_v4(&mut rng);
        assert_eq!(uuid.get_version_num(), 4);
    }
}
