//! Application launcher
//!
//! Runs a compiled main class against the same classpath the build produced,
//! with the JavaFX SDK on the module path.

use crate::core::classpath::build_classpath;
use crate::core::locate::find_archives;
use crate::core::manifest::Manifest;
use crate::error::{FxbuildError, LaunchError};
use crate::infra::toolchain::{JavaToolchain, LaunchSpec};
use std::path::Path;

/// Result of a successful application run
#[derive(Debug)]
pub struct LaunchResult {
    /// Captured standard output of the application
    pub stdout: String,
}

/// Launch `main_class` from the compiled output of the project.
pub fn launch_app(
    manifest: &Manifest,
    project_dir: &Path,
    toolchain: &JavaToolchain,
    main_class: &str,
) -> Result<LaunchResult, FxbuildError> {
    let out_dir = manifest.out_dir(project_dir);
    if !out_dir.exists() {
        return Err(LaunchError::OutputMissing { path: out_dir }.into());
    }

    let archives = find_archives(&manifest.lib_dir(project_dir));
    let classpath = build_classpath(&out_dir, &archives);
    let module_path = manifest.sdk_module_path(project_dir);

    tracing::info!("Launching application with main class: {main_class}");

    let output = toolchain
        .run(&LaunchSpec {
            classpath: &classpath,
            module_path: &module_path,
            modules: &manifest.javafx.modules,
            main_class,
        })
        .map_err(|e| LaunchError::RuntimeSpawn {
            program: toolchain.java_path().display().to_string(),
            error: e.to_string(),
        })?;

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();

    if !output.status.success() {
        return Err(LaunchError::RuntimeFailed {
            stdout,
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
        .into());
    }

    tracing::debug!("Application output: {}", stdout.trim_end());

    Ok(LaunchResult { stdout })
}
