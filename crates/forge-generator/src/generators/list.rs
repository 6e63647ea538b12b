//! List choice generator.

use forge_core::{FieldValue, ScalarValue};
use rand::seq::SliceRandom;
use rand::Rng;

/// Pick one value uniformly from a compiled list.
///
/// Compiled lists are never empty; an empty slice yields `Null`.
pub fn choose_from_list<R: Rng>(rng: &mut R, values: &[ScalarValue]) -> FieldValue {
    values
        .choose(rng)
        .map(FieldValue::from)
        .unwrap_or(FieldValue::Null)
}
