//! File mode through the library API.

use clap::Parser;
use dataforge::{Cli, ConfigFile, GenerateConfig};
use tempfile::TempDir;

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter("dataforge=debug,forge_distributed=debug")
        .with_test_writer()
        .try_init()
        .ok();
}

fn config_from_args(args: &[&str]) -> GenerateConfig {
    let cli = Cli::try_parse_from(args).unwrap();
    GenerateConfig::merge(&cli, &ConfigFile::default())
        .unwrap()
        .validate_with_cpus(4)
        .unwrap()
}

#[tokio::test]
async fn test_default_schema_files() {
    init_logging();
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path().to_string_lossy().into_owned();

    let config = config_from_args(&["dataforge", &dir, "--files-count", "3", "--data-lines", "25"]);
    let summary = dataforge::execute(&config).await.unwrap();

    assert_eq!(summary.files.len(), 3);
    assert_eq!(summary.total_lines, 75);

    for (i, path) in summary.files.iter().enumerate() {
        let name = path.file_name().unwrap().to_string_lossy();
        assert_eq!(name, format!("{}_generated_data.json", i + 1));

        let content = std::fs::read_to_string(path).unwrap();
        assert_eq!(content.lines().count(), 25);
        for line in content.lines() {
            let json: serde_json::Value = serde_json::from_str(line).unwrap();
            let keys: Vec<&String> = json.as_object().unwrap().keys().collect();
            assert_eq!(keys, vec!["id", "timestamp", "value"]);
        }
    }
}

#[tokio::test]
async fn test_parallel_seeded_run_matches_itself() {
    init_logging();
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    let schema = r#"{"id": "int:rand(1,1000000)", "status": "str:[new, open, closed]", "note": "str:"}"#;

    for dir in [&first, &second] {
        let path = dir.path().to_string_lossy().into_owned();
        let config = config_from_args(&[
            "dataforge",
            &path,
            "--files-count",
            "6",
            "--data-lines",
            "10",
            "--multiprocessing",
            "3",
            "--seed",
            "1234",
            "--data-schema",
            schema,
        ]);
        dataforge::execute(&config).await.unwrap();
    }

    for i in 1..=6 {
        let name = format!("{i}_generated_data.json");
        assert_eq!(
            std::fs::read_to_string(first.path().join(&name)).unwrap(),
            std::fs::read_to_string(second.path().join(&name)).unwrap()
        );
    }
}

#[tokio::test]
async fn test_schema_file_and_uuid_prefix() {
    init_logging();
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("out");
    std::fs::create_dir(&out).unwrap();
    let schema_path = temp_dir.path().join("schema.json");
    std::fs::write(&schema_path, r#"{"id": "int:rand(1,1)", "label": "str:fixed", "empty": "int:"}"#)
        .unwrap();

    let config = config_from_args(&[
        "dataforge",
        &out.to_string_lossy(),
        "--files_count=2",
        "--file_prefix=uuid",
        "--file_name=records",
        "--data_lines=3",
        &format!("--data_schema={}", schema_path.display()),
    ]);
    let summary = dataforge::execute(&config).await.unwrap();

    assert_eq!(summary.files.len(), 2);
    for path in &summary.files {
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.ends_with("_records.json"));
        assert_eq!(name.len(), 36 + "_records.json".len());

        for line in std::fs::read_to_string(path).unwrap().lines() {
            assert_eq!(line, r#"{"id":1,"label":"fixed","empty":null}"#);
        }
    }
}

#[tokio::test]
async fn test_invalid_schema_fails_before_writing() {
    init_logging();
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path().to_string_lossy().into_owned();

    let config = config_from_args(&[
        "dataforge",
        &dir,
        "--data-schema",
        r#"{"age": "int:rand(10,abc)"}"#,
    ]);
    let err = dataforge::execute(&config).await.unwrap_err();

    assert!(format!("{err:#}").contains("age"));
    assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}
