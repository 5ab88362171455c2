use std::path::PathBuf;
use std::process::Command;
use std::{fs, str};

const BIN: &str = env!("CARGO_BIN_EXE_wisp");
const SINGLE: &str = "tests/logs/single_run.log";

fn scratch_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("wisp_cli_{name}"))
}

#[test]
fn too_few_arguments_prints_usage_and_creates_nothing() {
    let fig_path = scratch_path("missing_arg.png");

    let output = Command::new(BIN)
        .args([SINGLE, fig_path.to_str().unwrap()])
        .output()
        .expect("should be able to spawn the binary");

    assert!(!output.status.success());
    let stderr = str::from_utf8(&output.stderr).expect("stderr should be utf-8");
    assert!(stderr.contains("Usage"), "stderr was: {stderr}");
    assert!(stderr.contains("<ANIMATION_FILE>"), "stderr was: {stderr}");
    assert!(!fig_path.exists());
}

#[test]
fn a_full_run_writes_both_artifacts() {
    let fig_path = scratch_path("plot.png");
    let gif_path = scratch_path("trail.gif");

    let output = Command::new(BIN)
        .args([
            SINGLE,
            fig_path.to_str().unwrap(),
            gif_path.to_str().unwrap(),
        ])
        .output()
        .expect("should be able to spawn the binary");

    assert!(
        output.status.success(),
        "stderr was: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("All done!!!"), "stdout was: {stdout}");
    assert!(fig_path.exists());
    assert!(gif_path.exists());

    fs::remove_file(fig_path).unwrap();
    fs::remove_file(gif_path).unwrap();
}

#[test]
fn a_malformed_log_exits_nonzero() {
    let fig_path = scratch_path("malformed.png");
    let gif_path = scratch_path("malformed.gif");

    let output = Command::new(BIN)
        .args([
            "tests/logs/bad_float.log",
            fig_path.to_str().unwrap(),
            gif_path.to_str().unwrap(),
        ])
        .output()
        .expect("should be able to spawn the binary");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("line 3"), "stderr was: {stderr}");
    assert!(!fig_path.exists());
    assert!(!gif_path.exists());
}

#[test]
fn an_empty_log_exits_nonzero() {
    let fig_path = scratch_path("empty.png");
    let gif_path = scratch_path("empty.gif");

    let output = Command::new(BIN)
        .args([
            "tests/logs/header_only.log",
            fig_path.to_str().unwrap(),
            gif_path.to_str().unwrap(),
        ])
        .output()
        .expect("should be able to spawn the binary");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no runs"), "stderr was: {stderr}");
}
