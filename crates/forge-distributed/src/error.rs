//! Error types for parallel generation.

use forge_populate_jsonl::JsonlPopulatorError;
use thiserror::Error;

/// Errors that can occur while running workers.
#[derive(Error, Debug)]
pub enum DistributedError {
    /// A worker failed while writing its files.
    #[error("Worker {worker_id} failed: {source}")]
    Worker {
        worker_id: usize,
        #[source]
        source: JsonlPopulatorError,
    },

    /// A worker task panicked or was cancelled.
    #[error("Worker {worker_id} did not complete: {source}")]
    WorkerJoin {
        worker_id: usize,
        #[source]
        source: tokio::task::JoinError,
    },
}
