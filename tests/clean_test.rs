//! Integration tests for `fxbuild clean`
//!
//! The clean command resets the output directory while carrying the
//! sentinel file across unchanged.

mod common;

use common::TestProject;
use std::process::Command;

/// Helper to run fxbuild clean in a project directory
fn run_clean(project: &TestProject) -> std::process::Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_fxbuild"));
    cmd.current_dir(project.path());
    cmd.arg("clean");
    cmd.output().expect("Failed to execute fxbuild clean")
}

#[test]
fn test_clean_fails_without_manifest() {
    let project = TestProject::new();

    let output = run_clean(&project);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Manifest not found"), "stderr: {stderr}");
}

#[test]
fn test_clean_preserves_sentinel_and_drops_the_rest() {
    let project = TestProject::new();
    project.write_manifest();
    project.create_file("out/README.md", "build output lives here");
    project.create_file("out/Main.class", "bytecode");
    project.create_file("out/sub/Helper.class", "bytecode");

    let output = run_clean(&project);

    assert!(output.status.success());
    assert_eq!(project.read_file("out/README.md"), "build output lives here");
    assert!(!project.file_exists("out/Main.class"));
    assert!(!project.file_exists("out/sub"));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Preserved README.md"), "stdout: {stdout}");
}

#[test]
fn test_clean_creates_missing_output_dir() {
    let project = TestProject::new();
    project.write_manifest();

    let output = run_clean(&project);

    assert!(output.status.success());
    assert!(project.path().join("out").is_dir());
    assert!(!project.file_exists("out/README.md"));
}
