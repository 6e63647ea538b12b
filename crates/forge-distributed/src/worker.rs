//! Worker execution for parallel file generation.

use crate::error::DistributedError;
use crate::partitioner::WorkerAssignment;
use forge_core::GenerationPlan;
use forge_generator::RecordGenerator;
use forge_populate_jsonl::{FileOutput, JsonlPopulator, JsonlPopulatorError, OutputSettings};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::{Path, PathBuf};
use std::time::{Instant, SystemTime, UNIX_EPOCH};
use tracing::{debug, info};

/// Build the RNG for a worker.
///
/// Seeded assignments are reproducible. Unseeded ones mix OS entropy with
/// the worker id and a nanosecond timestamp, so workers started in the same
/// instant still diverge.
pub fn worker_rng(assignment: &WorkerAssignment) -> StdRng {
    match assignment.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => {
            let nanos = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or_default();
            let mixed = rand::random::<u64>()
                ^ nanos.rotate_left(17)
                ^ (assignment.worker_id as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);
            StdRng::seed_from_u64(mixed)
        }
    }
}

/// Write every file of one assignment, in index order.
pub fn run_worker(
    plan: GenerationPlan,
    assignment: &WorkerAssignment,
    dir: &Path,
    settings: OutputSettings,
    lines: u64,
) -> Result<Vec<FileOutput>, JsonlPopulatorError> {
    let start = Instant::now();
    debug!(
        "Worker {}: starting, will create {} file(s)",
        assignment.worker_id, assignment.file_count
    );

    let generator = RecordGenerator::with_rng(plan, worker_rng(assignment));
    let mut populator = JsonlPopulator::from_generator(generator, settings);
    let outputs = populator.populate_files(
        dir,
        assignment.start_index,
        assignment.file_count,
        lines,
    )?;

    debug!(
        "Worker {}: completed, created {} file(s) in {:?}",
        assignment.worker_id,
        outputs.len(),
        start.elapsed()
    );

    Ok(outputs)
}

/// Run all assignments concurrently on the blocking thread pool.
///
/// The first failing worker fails the whole call; files already written by
/// other workers stay on disk. Outputs are returned sorted by file index.
pub async fn generate_files_parallel(
    plan: &GenerationPlan,
    assignments: &[WorkerAssignment],
    dir: &Path,
    settings: &OutputSettings,
    lines: u64,
) -> Result<Vec<FileOutput>, DistributedError> {
    let total_files: u64 = assignments.iter().map(|a| a.file_count).sum();
    info!(
        "Starting parallel generation: {} file(s) with {} worker(s)",
        total_files,
        assignments.len()
    );

    let mut handles = Vec::with_capacity(assignments.len());
    for assignment in assignments {
        let plan = plan.clone();
        let assignment = assignment.clone();
        let dir: PathBuf = dir.to_path_buf();
        let settings = settings.clone();
        let worker_id = assignment.worker_id;

        let handle = tokio::task::spawn_blocking(move || {
            run_worker(plan, &assignment, &dir, settings, lines)
        });
        handles.push((worker_id, handle));
    }

    let mut outputs = Vec::with_capacity(total_files as usize);
    for (worker_id, handle) in handles {
        let result = handle
            .await
            .map_err(|source| DistributedError::WorkerJoin { worker_id, source })?;
        let worker_outputs =
            result.map_err(|source| DistributedError::Worker { worker_id, source })?;
        outputs.extend(worker_outputs);
    }

    outputs.sort_by_key(|output| output.index);

    info!(
        "Parallel generation completed: {} file(s) created",
        outputs.len()
    );

    Ok(outputs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::partitioner::partition_files;
    use forge_core::RawSchema;
    use forge_populate_jsonl::FilePrefix;
    use rand::Rng;
    use tempfile::TempDir;

    fn test_plan() -> GenerationPlan {
        let raw = RawSchema::new([("id", "int:rand"), ("value", "str:rand")]);
        GenerationPlan::compile(&raw).unwrap()
    }

    #[test]
    fn test_seeded_worker_rng_is_reproducible() {
        let assignment = WorkerAssignment {
            worker_id: 1,
            start_index: 1,
            file_count: 1,
            seed: Some(42),
        };

        let a: u64 = worker_rng(&assignment).gen();
        let b: u64 = worker_rng(&assignment).gen();
        assert_eq!(a, b);
    }

    #[test]
    fn test_unseeded_workers_diverge() {
        let assignments = partition_files(2, 2, None);

        let a: u64 = worker_rng(&assignments[0]).gen();
        let b: u64 = worker_rng(&assignments[1]).gen();
        assert_ne!(a, b);
    }

    #[test]
    fn test_run_worker_writes_assigned_range() {
        let temp_dir = TempDir::new().unwrap();
        let assignment = WorkerAssignment {
            worker_id: 2,
            start_index: 5,
            file_count: 3,
            seed: Some(1),
        };
        let settings = OutputSettings::new("data", FilePrefix::Count);

        let outputs = run_worker(test_plan(), &assignment, temp_dir.path(), settings, 4).unwrap();

        let indices: Vec<u64> = outputs.iter().map(|o| o.index).collect();
        assert_eq!(indices, vec![5, 6, 7]);
        assert!(temp_dir.path().join("7_data.json").exists());
    }

    #[tokio::test]
    async fn test_generate_files_parallel() {
        let temp_dir = TempDir::new().unwrap();
        let settings = OutputSettings::new("data", FilePrefix::Count);
        let assignments = partition_files(10, 3, Some(42));

        let outputs =
            generate_files_parallel(&test_plan(), &assignments, temp_dir.path(), &settings, 5)
                .await
                .unwrap();

        let indices: Vec<u64> = outputs.iter().map(|o| o.index).collect();
        assert_eq!(indices, (1..=10).collect::<Vec<_>>());

        for output in &outputs {
            let content = std::fs::read_to_string(&output.path).unwrap();
            assert_eq!(content.lines().count(), 5);
        }
    }

    #[tokio::test]
    async fn test_worker_failure_fails_run() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing");
        let settings = OutputSettings::new("data", FilePrefix::Count);
        let assignments = partition_files(4, 2, Some(1));

        let err = generate_files_parallel(&test_plan(), &assignments, &missing, &settings, 1)
            .await
            .unwrap_err();

        assert!(matches!(err, DistributedError::Worker { .. }));
    }
}
