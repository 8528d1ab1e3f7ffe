use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn bin_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_correl"))
}

/// Run the binary inside `dir` with a clean correl environment.
fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(bin_path())
        .args(args)
        .current_dir(dir)
        .env_remove("CORREL_INPUT")
        .env_remove("CORREL_OUTPUT")
        .env_remove("CORREL_LOG")
        .output()
        .unwrap_or_else(|e| panic!("failed to run {:?} {:?}: {}", bin_path(), args, e))
}

fn read_json(path: &Path) -> serde_json::Value {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn default_paths_and_console_output() {
    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("correl.csv"),
        ",A,B,C\nA,,0.5,0.2\nB,,,0.9\nC,,,,\n",
    )
    .unwrap();

    let out = run_in(dir.path(), &[]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let stdout = String::from_utf8(out.stdout).unwrap();
    assert_eq!(
        stdout,
        "Converted 3 nodes to correl_data.json\nNodes: A, B, C\n"
    );

    let v = read_json(&dir.path().join("correl_data.json"));
    assert_eq!(v["nodes"], serde_json::json!(["A", "B", "C"]));
    assert_eq!(v["correlations"]["A"]["C"], serde_json::json!(0.2));
    assert_eq!(v["correlations"]["C"], serde_json::json!({}));
}

#[test]
fn positional_paths_override_defaults() {
    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(dir.path().join("m.csv"), ",X,Y\nX,1,-0.4\nY,-0.4,1\n").unwrap();

    let out = run_in(dir.path(), &["m.csv", "m.json"]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert!(!dir.path().join("correl_data.json").exists());

    let v = read_json(&dir.path().join("m.json"));
    assert_eq!(
        v["correlations"],
        serde_json::json!({"X": {"Y": -0.4}, "Y": {}})
    );
}

#[test]
fn project_config_file_is_honoured() {
    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(dir.path().join("matrix.csv"), ",A,B\nA,,0.1\n").unwrap();
    std::fs::write(
        dir.path().join("correl.toml"),
        "input_path = \"matrix.csv\"\noutput_path = \"matrix.json\"\n",
    )
    .unwrap();

    let out = run_in(dir.path(), &[]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert!(dir.path().join("matrix.json").exists());
}

#[test]
fn missing_input_fails_without_output() {
    let dir = tempfile::TempDir::new().unwrap();

    let out = run_in(dir.path(), &[]);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("[INPUT_NOT_FOUND]"), "stderr: {stderr}");
    assert!(!dir.path().join("correl_data.json").exists());
}

#[test]
fn shape_error_fails_without_output() {
    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(dir.path().join("correl.csv"), ",A,B\nA,,0.5,0.9\n").unwrap();

    let out = run_in(dir.path(), &[]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("[INPUT_SHAPE_ERROR]"), "stderr: {stderr}");
    assert!(!dir.path().join("correl_data.json").exists());
}

#[test]
fn blank_line_in_matrix_fails_without_output() {
    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(dir.path().join("correl.csv"), ",A,B\nA,,0.5\n\nB,,\n").unwrap();

    let out = run_in(dir.path(), &[]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("[INPUT_SHAPE_ERROR]"), "stderr: {stderr}");
    assert!(!dir.path().join("correl_data.json").exists());
}

#[test]
fn broken_config_file_reports_config_error() {
    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(dir.path().join("correl.csv"), ",A,B\nA,,0.5\n").unwrap();
    std::fs::write(dir.path().join("correl.toml"), "not = [valid").unwrap();

    let out = run_in(dir.path(), &[]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("[CONFIG_ERROR]"), "stderr: {stderr}");
}
