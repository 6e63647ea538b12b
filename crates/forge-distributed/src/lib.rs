//! Parallel file generation for dataforge.
//!
//! Splits a file count across workers and runs each worker on Tokio's
//! blocking thread pool. Workers share nothing mutable: each one owns a
//! clone of the plan, its own RNG and a disjoint range of file indices.
//!
//! ## Architecture
//!
//! ```text
//!              files_count, workers, base_seed
//!                           │
//!                           ▼
//!                ┌─────────────────────┐
//!                │   partition_files   │
//!                └─────────────────────┘
//!                           │
//!           ┌───────────────┼───────────────┐
//!           ▼               ▼               ▼
//!    ┌────────────┐  ┌────────────┐  ┌────────────┐
//!    │  worker-1  │  │  worker-2  │  │  worker-N  │
//!    │ files 1..4 │  │ files 5..7 │  │ files ..10 │
//!    │ seed = b+0 │  │ seed = b+1 │  │ seed = b+n │
//!    └────────────┘  └────────────┘  └────────────┘
//!           │               │               │
//!           └───────────────┼───────────────┘
//!                           ▼
//!              created files, sorted by index
//! ```
//!
//! ## Example
//!
//! ```ignore
//! use forge_distributed::{generate_files_parallel, partition_files};
//!
//! let assignments = partition_files(10, 3, Some(42));
//! let outputs = generate_files_parallel(&plan, &assignments, &dir, &settings, 1000).await?;
//! assert_eq!(outputs.len(), 10);
//! ```

pub mod error;
pub mod partitioner;
pub mod worker;

pub use error::DistributedError;
pub use partitioner::{
    available_workers, describe_partitioning, distribute_work, partition_files,
    should_parallelize, WorkerAssignment,
};
pub use worker::{generate_files_parallel, run_worker, worker_rng};
