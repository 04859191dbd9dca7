//! Build orchestration
//!
//! Drives a full compile: discover sources and archives, reset the output
//! directory, assemble the classpath, and invoke the compiler.

use std::path::{Path, PathBuf};

use crate::config::defaults;
use crate::core::classpath::build_classpath;
use crate::core::clean::reset_dir;
use crate::core::locate::{find_archives, find_sources};
use crate::core::manifest::Manifest;
use crate::error::{BuildError, FxbuildError};
use crate::infra::toolchain::{CompileSpec, JavaToolchain};

/// Outcome of a build run
#[derive(Debug, PartialEq, Eq)]
pub enum BuildOutcome {
    /// Compilation ran and succeeded
    Compiled {
        /// Directory holding the compiled classes
        out_dir: PathBuf,
        /// Number of source files compiled
        sources: usize,
        /// Number of archives on the classpath
        archives: usize,
    },
    /// No source files found; nothing was touched
    NothingToCompile,
}

/// Build the project rooted at `project_dir`.
///
/// A missing source root is fatal. An empty source set short-circuits
/// before any output mutation. A missing or empty library root is only a
/// diagnostic; compilation proceeds without dependencies.
pub fn build_project(
    manifest: &Manifest,
    project_dir: &Path,
    toolchain: &JavaToolchain,
) -> Result<BuildOutcome, FxbuildError> {
    let src_dir = manifest.src_dir(project_dir);
    let lib_dir = manifest.lib_dir(project_dir);
    let out_dir = manifest.out_dir(project_dir);

    tracing::info!("Starting build");

    if !src_dir.exists() {
        return Err(BuildError::SourceRootMissing { path: src_dir }.into());
    }

    let sources = find_sources(&src_dir);
    if sources.is_empty() {
        tracing::warn!("No source files to compile under {}", src_dir.display());
        return Ok(BuildOutcome::NothingToCompile);
    }

    if !lib_dir.exists() {
        tracing::warn!(
            "Library directory {} not found, compiling without dependencies",
            lib_dir.display()
        );
    }

    let archives = find_archives(&lib_dir);
    if archives.is_empty() && lib_dir.exists() {
        tracing::debug!(
            "No jar archives under {}, compiling without dependencies",
            lib_dir.display()
        );
    }

    reset_dir(&out_dir, defaults::PRESERVED_FILES)?;

    let classpath = build_classpath(&out_dir, &archives);

    // Module flags only make sense once the SDK is actually installed
    let module_path = manifest.sdk_module_path(project_dir);
    let module_path = module_path.exists().then_some(module_path);

    tracing::info!("Compiling {} source files", sources.len());

    let output = toolchain
        .compile(&CompileSpec {
            dest: &out_dir,
            classpath: &classpath,
            module_path: module_path.as_deref(),
            modules: &manifest.javafx.modules,
            sources: &sources,
        })
        .map_err(|e| BuildError::CompilerSpawn {
            program: toolchain.javac_path().display().to_string(),
            error: e.to_string(),
        })?;

    if !output.status.success() {
        return Err(BuildError::CompilerFailed {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
        .into());
    }

    tracing::info!("Compiled classes written to {}", out_dir.display());

    Ok(BuildOutcome::Compiled {
        out_dir,
        sources: sources.len(),
        archives: archives.len(),
    })
}
