//! Parallel generation through the public API.

use forge_core::{GenerationPlan, RawSchema};
use forge_distributed::{generate_files_parallel, partition_files, should_parallelize};
use forge_populate_jsonl::{FilePrefix, OutputSettings};
use std::path::Path;
use tempfile::TempDir;

fn plan() -> GenerationPlan {
    let raw = RawSchema::from_json_str(r#"{"id": "int:rand(1,1000000)", "tag": "str:[a, b, c]"}"#)
        .unwrap();
    GenerationPlan::compile(&raw).unwrap()
}

fn read_all(dir: &Path, count: u64) -> Vec<String> {
    (1..=count)
        .map(|i| std::fs::read_to_string(dir.join(format!("{i}_data.json"))).unwrap())
        .collect()
}

#[test]
fn test_seeded_parallel_runs_are_reproducible() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    let settings = OutputSettings::new("data", FilePrefix::Count);
    let plan = plan();

    assert!(should_parallelize(7, 3));
    let assignments = partition_files(7, 3, Some(99));

    tokio_test::block_on(async {
        generate_files_parallel(&plan, &assignments, first.path(), &settings, 20)
            .await
            .unwrap();
        generate_files_parallel(&plan, &assignments, second.path(), &settings, 20)
            .await
            .unwrap();
    });

    assert_eq!(read_all(first.path(), 7), read_all(second.path(), 7));
}

#[tokio::test]
async fn test_more_workers_than_files() {
    let temp_dir = TempDir::new().unwrap();
    let settings = OutputSettings::new("data", FilePrefix::Random);
    let assignments = partition_files(3, 8, None);
    assert_eq!(assignments.len(), 3);

    let outputs = generate_files_parallel(&plan(), &assignments, temp_dir.path(), &settings, 2)
        .await
        .unwrap();

    assert_eq!(outputs.len(), 3);
    assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 3);
}

#[tokio::test]
async fn test_random_prefixes_never_share_a_file() {
    let temp_dir = TempDir::new().unwrap();
    let settings = OutputSettings::new("data", FilePrefix::Random);
    let assignments = partition_files(64, 8, None);

    let outputs = generate_files_parallel(&plan(), &assignments, temp_dir.path(), &settings, 3)
        .await
        .unwrap();

    let mut paths: Vec<_> = outputs.iter().map(|o| o.path.clone()).collect();
    paths.sort();
    paths.dedup();
    assert_eq!(paths.len(), 64);
    assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 64);
    for path in &paths {
        assert_eq!(std::fs::read_to_string(path).unwrap().lines().count(), 3);
    }
}
