//! Runs the compiled binary to check streams and exit codes.

use std::process::Command;
use tempfile::TempDir;

fn dataforge() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_dataforge"));
    command.env_remove("DATAFORGE_CONFIG").env("RUST_LOG", "info");
    command
}

#[test]
fn test_console_mode_stdout_is_pure_jsonl() {
    let temp_dir = TempDir::new().unwrap();

    let output = dataforge()
        .current_dir(temp_dir.path())
        .args([
            ".",
            "--files-count",
            "0",
            "--data-lines",
            "5",
            "--data-schema",
            r#"{"id": "int:rand(1,1)", "label": "str:fixed", "empty": "int:"}"#,
        ])
        .output()
        .unwrap();

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 5);
    for line in lines {
        assert_eq!(line, r#"{"id":1,"label":"fixed","empty":null}"#);
    }

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Mode: Console output"));
}

#[test]
fn test_compile_error_exits_with_status_one() {
    let temp_dir = TempDir::new().unwrap();

    let output = dataforge()
        .current_dir(temp_dir.path())
        .args([".", "--data-schema", r#"{"name": "float:rand"}"#])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("float"));
    assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}

#[test]
fn test_init_config_then_generate() {
    let temp_dir = TempDir::new().unwrap();

    let status = dataforge()
        .current_dir(temp_dir.path())
        .arg("--init-config")
        .status()
        .unwrap();
    assert!(status.success());
    assert!(temp_dir.path().join("dataforge.toml").exists());

    let config = std::fs::read_to_string(temp_dir.path().join("dataforge.toml")).unwrap();
    let config = config.replace("files_count = 10", "files_count = 2");
    std::fs::write(temp_dir.path().join("dataforge.toml"), config).unwrap();

    let status = dataforge()
        .current_dir(temp_dir.path())
        .args([".", "--data-lines", "3"])
        .status()
        .unwrap();
    assert!(status.success());

    assert!(temp_dir.path().join("1_generated_data.json").exists());
    assert!(temp_dir.path().join("2_generated_data.json").exists());
    assert!(!temp_dir.path().join("3_generated_data.json").exists());
}
