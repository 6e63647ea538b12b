//! Work partitioning for parallel file generation.
//!
//! Distributes files across workers in contiguous, near-equal index ranges.

/// Work assigned to one worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerAssignment {
    /// 1-based worker id, used in logs
    pub worker_id: usize,
    /// First file index this worker writes (file indices start at 1)
    pub start_index: u64,
    /// Number of files this worker writes
    pub file_count: u64,
    /// RNG seed, or `None` to seed from entropy
    pub seed: Option<u64>,
}

impl WorkerAssignment {
    /// Last file index this worker writes (inclusive).
    pub fn end_index(&self) -> u64 {
        self.start_index + self.file_count.saturating_sub(1)
    }
}

/// Split `total` files into `workers` near-equal buckets.
///
/// The first `total % workers` buckets get one extra file. A worker count of
/// zero is treated as one.
pub fn distribute_work(total: u64, workers: usize) -> Vec<u64> {
    let workers = workers.max(1);
    let per_worker = total / workers as u64;
    let remainder = (total % workers as u64) as usize;

    let distribution: Vec<u64> = (0..workers)
        .map(|i| per_worker + u64::from(i < remainder))
        .collect();

    tracing::debug!(
        "Work distribution for {total} file(s) across {workers} worker(s): {distribution:?}"
    );

    distribution
}

/// Partition files into worker assignments.
///
/// Workers with no files are skipped. Seeds are `base_seed + i` for the
/// i-th bucket when a base seed is given.
pub fn partition_files(
    total: u64,
    workers: usize,
    base_seed: Option<u64>,
) -> Vec<WorkerAssignment> {
    let mut assignments = Vec::new();
    let mut next_index = 1;

    for (i, file_count) in distribute_work(total, workers).into_iter().enumerate() {
        if file_count == 0 {
            continue;
        }

        assignments.push(WorkerAssignment {
            worker_id: i + 1,
            start_index: next_index,
            file_count,
            seed: base_seed.map(|seed| seed.wrapping_add(i as u64)),
        });
        next_index += file_count;
    }

    assignments
}

/// Whether running on several workers is worthwhile.
pub fn should_parallelize(files: u64, workers: usize) -> bool {
    files > 1 && workers > 1
}

/// Number of CPUs available to run workers on.
pub fn available_workers() -> usize {
    num_cpus::get()
}

/// Describe the partitioning plan for logging.
pub fn describe_partitioning(assignments: &[WorkerAssignment]) -> String {
    let mut lines = Vec::new();
    lines.push("Work distribution:".to_string());

    for assignment in assignments {
        let seed = match assignment.seed {
            Some(seed) => seed.to_string(),
            None => "entropy".to_string(),
        };
        lines.push(format!(
            "  worker-{}: files {}-{} ({} file(s), seed={})",
            assignment.worker_id,
            assignment.start_index,
            assignment.end_index(),
            assignment.file_count,
            seed
        ));
    }

    lines.join("\n")
}
