use std::path::PathBuf;
use std::process::{Command, Output};

fn unique_temp_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "fastblocks-{tag}-{}-{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("time should be after epoch")
            .as_nanos()
    ));
    std::fs::create_dir_all(&dir).expect("temp dir should be creatable");
    dir
}

fn run_insert(dir: &PathBuf, raw: &[u8], index: &str) -> (Output, PathBuf) {
    let data_path = dir.join("capture.dat");
    let index_path = dir.join("capture.index");
    let out_path = dir.join("framed.dat");
    std::fs::write(&data_path, raw).expect("data file should be writable");
    std::fs::write(&index_path, index).expect("index file should be writable");

    let output = Command::new(env!("CARGO_BIN_EXE_fastblocks"))
        .arg("--format")
        .arg("json")
        .arg("insert")
        .arg(&data_path)
        .arg(&index_path)
        .arg(&out_path)
        .output()
        .expect("insert command should run");
    (output, out_path)
}

#[test]
fn insert_frames_capture_and_reports_summary() {
    let dir = unique_temp_dir("insert-ok");
    let raw = [0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF, 0x11, 0x22];
    let index = "***MESSAGE @0***\n***MESSAGE @5***\n*** End of data @8***\n";

    let (output, out_path) = run_insert(&dir, &raw, index);

    assert!(output.status.success(), "stderr: {:?}", output.stderr);
    let framed = std::fs::read(&out_path).expect("output file should exist");
    assert_eq!(
        framed,
        [0x85, 0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0x83, 0xFF, 0x11, 0x22]
    );

    let stdout = String::from_utf8(output.stdout).expect("summary should be utf-8");
    let summary: serde_json::Value =
        serde_json::from_str(stdout.trim()).expect("summary should be JSON");
    assert_eq!(summary["messages"], 2);
    assert_eq!(summary["bytes_copied"], 8);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn insert_rejects_non_monotonic_index() {
    let dir = unique_temp_dir("insert-backwards");
    let raw = [0u8; 16];
    let index = "***MESSAGE @0***\n***MESSAGE @8***\n***MESSAGE @4***\n";

    let (output, _) = run_insert(&dir, &raw, index);

    assert_eq!(output.status.code(), Some(60));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("non-monotonic"), "stderr: {stderr}");

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn insert_rejects_malformed_index() {
    let dir = unique_temp_dir("insert-malformed");
    let raw = [1u8, 2, 3];
    let index = "***MESSAGE @0***\n***MESSAGE @***\n";

    let (output, _) = run_insert(&dir, &raw, index);

    assert_eq!(output.status.code(), Some(60));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("malformed index"), "stderr: {stderr}");

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn insert_rejects_truncated_data() {
    let dir = unique_temp_dir("insert-truncated");
    let raw = [1u8, 2, 3];
    let index = "***MESSAGE @0***\n*** End of data @8***\n";

    let (output, _) = run_insert(&dir, &raw, index);

    assert_eq!(output.status.code(), Some(60));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("truncated"), "stderr: {stderr}");

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn insert_fails_on_missing_data_file() {
    let dir = unique_temp_dir("insert-missing");
    let index_path = dir.join("capture.index");
    std::fs::write(&index_path, "*** End of data @0***\n").expect("index should be writable");

    let output = Command::new(env!("CARGO_BIN_EXE_fastblocks"))
        .arg("insert")
        .arg(dir.join("no-such-file.dat"))
        .arg(&index_path)
        .arg(dir.join("framed.dat"))
        .output()
        .expect("insert command should run");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed opening"), "stderr: {stderr}");

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn insert_usage_error_on_missing_args() {
    let output = Command::new(env!("CARGO_BIN_EXE_fastblocks"))
        .arg("insert")
        .arg("only-one-path.dat")
        .output()
        .expect("insert command should run");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage"), "stderr: {stderr}");
}

#[test]
fn version_prints_package_version() {
    let output = Command::new(env!("CARGO_BIN_EXE_fastblocks"))
        .arg("version")
        .output()
        .expect("version command should run");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")), "stdout: {stdout}");
}
