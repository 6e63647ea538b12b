//! Main record generator.

use crate::generators::generate_value;
use forge_core::{GenerationPlan, Record};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generate one record from a plan using the given RNG.
///
/// Fields are resolved in plan order. Stateless apart from the RNG and the
/// wall clock, so it can be called from any number of workers as long as
/// each brings its own RNG.
pub fn generate_record<R: Rng>(plan: &GenerationPlan, rng: &mut R) -> Record {
    let mut record = Record::with_capacity(plan.len());
    for field in plan.fields() {
        record.push(field.name.clone(), generate_value(field, rng));
    }
    record
}

/// Record generator owning a plan and its own entropy source.
pub struct RecordGenerator {
    /// Compiled plan (read-only)
    plan: GenerationPlan,
    /// Random number generator for this generator only
    rng: StdRng,
}

impl RecordGenerator {
    /// Create a generator seeded from OS entropy.
    pub fn new(plan: GenerationPlan) -> Self {
        Self::with_rng(plan, StdRng::from_entropy())
    }

    /// Create a generator with a fixed seed.
    ///
    /// Same seed and plan give the same non-timestamp values.
    pub fn with_seed(plan: GenerationPlan, seed: u64) -> Self {
        Self::with_rng(plan, StdRng::seed_from_u64(seed))
    }

    /// Create a generator with an already-constructed RNG.
    pub fn with_rng(plan: GenerationPlan, rng: StdRng) -> Self {
        tracing::debug!("RecordGenerator initialized with {} field(s)", plan.len());
        Self { plan, rng }
    }

    /// Generate the next record.
    pub fn next_record(&mut self) -> Record {
        generate_record(&self.plan, &mut self.rng)
    }

    /// Lazily generate `count` records.
    pub fn records(&mut self, count: u64) -> RecordIterator<'_> {
        RecordIterator {
            generator: self,
            remaining: count,
        }
    }

    /// Eagerly generate `count` records.
    pub fn generate_many(&mut self, count: usize) -> Vec<Record> {
        tracing::trace!("Generating {count} record(s)");
        (0..count).map(|_| self.next_record()).collect()
    }
}

/// Iterator that lazily generates records.
pub struct RecordIterator<'a> {
    generator: &'a mut RecordGenerator,
    remaining: u64,
}

impl Iterator for RecordIterator<'_> {
    type Item = Record;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;
        Some(self.generator.next_record())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RecordIterator<'_> {}
