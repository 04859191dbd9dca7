//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.
#![allow(dead_code)]

use std::path::PathBuf;
use tempfile::TempDir;

/// Test project context
///
/// Creates a temporary directory for test projects and provides
/// utilities for setting up test scenarios.
pub struct TestProject {
    /// Temporary directory for the test project
    pub dir: TempDir,
}

impl TestProject {
    /// Create a new test project in a temporary directory
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Get the path to the test project directory
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Create a file in the test project
    pub fn create_file(&self, name: &str, content: &str) {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(path, content).expect("Failed to write file");
    }

    /// Create a directory in the test project
    pub fn create_dir(&self, name: &str) {
        let path = self.dir.path().join(name);
        std::fs::create_dir_all(path).expect("Failed to create directory");
    }

    /// Check if a file exists in the test project
    pub fn file_exists(&self, name: &str) -> bool {
        self.dir.path().join(name).exists()
    }

    /// Read a file from the test project
    #[allow(dead_code)]
    pub fn read_file(&self, name: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(name)).expect("Failed to read file")
    }

    /// Write the sample manifest into the project
    pub fn write_manifest(&self) {
        self.create_file("fxbuild.toml", SAMPLE_MANIFEST);
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

/// Sample manifest TOML for testing
pub const SAMPLE_MANIFEST: &str = r#"
[project]
name = "test-project"
main_class = "Main"

[javafx]
version = "21.0.2"
modules = ["javafx.controls", "javafx.fxml"]
"#;

/// Write an executable stub standing in for a toolchain binary.
///
/// The stub records its arguments, one per line, into `args_log`, optionally
/// prints a line to stdout or stderr, and exits with `exit_code`.
#[cfg(unix)]
#[allow(dead_code)]
pub fn write_stub_binary(
    project: &TestProject,
    name: &str,
    args_log: &str,
    stdout_line: Option<&str>,
    stderr_line: Option<&str>,
    exit_code: i32,
) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let log_path = project.path().join(args_log);
    let script_path = project.path().join(name);

    let mut script = format!("#!/bin/sh\nprintf '%s\\n' \"$@\" > \"{}\"\n", log_path.display());
    if let Some(line) = stdout_line {
        script.push_str(&format!("printf '%s\\n' \"{line}\"\n"));
    }
    if let Some(line) = stderr_line {
        script.push_str(&format!("printf '%s\\n' \"{line}\" >&2\n"));
    }
    script.push_str(&format!("exit {exit_code}\n"));

    std::fs::write(&script_path, script).expect("Failed to write stub script");
    let mut perms = std::fs::metadata(&script_path)
        .expect("Failed to stat stub script")
        .permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&script_path, perms).expect("Failed to mark stub executable");

    script_path
}

/// Read the arguments a stub recorded, one per line
#[cfg(unix)]
#[allow(dead_code)]
pub fn read_recorded_args(project: &TestProject, args_log: &str) -> Vec<String> {
    std::fs::read_to_string(project.path().join(args_log))
        .expect("Stub was never invoked")
        .lines()
        .map(str::to_string)
        .collect()
}
