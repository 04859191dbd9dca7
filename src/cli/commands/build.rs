//! Build command implementation
//!
//! Implements `fxbuild build` to compile the project sources.

use anyhow::Result;
use std::path::Path;

use crate::cli::output::{status, OutputConfig};
use crate::core::build::{build_project, BuildOutcome};
use crate::core::manifest::Manifest;
use crate::infra::toolchain::JavaToolchain;

/// Execute the build command
pub async fn execute(project_dir: &Path) -> Result<()> {
    let manifest = Manifest::load_from_project(project_dir)?;
    let toolchain = JavaToolchain::detect();

    tracing::info!("Building project: {}", manifest.project.name);

    let outcome = build_project(&manifest, project_dir, &toolchain)?;

    if OutputConfig::global().json {
        println!("{}", serde_json::to_string_pretty(&outcome_json(&outcome))?);
        return Ok(());
    }

    match outcome {
        BuildOutcome::Compiled {
            out_dir,
            sources,
            archives,
        } => {
            println!("{} Build complete!", status::SUCCESS);
            println!("  Sources compiled: {sources}");
            println!("  Archives on classpath: {archives}");
            println!("  Classes: {}", out_dir.display());
        }
        BuildOutcome::NothingToCompile => {
            println!("{} Nothing to compile", status::WARNING);
        }
    }

    Ok(())
}

fn outcome_json(outcome: &BuildOutcome) -> serde_json::Value {
    match outcome {
        BuildOutcome::Compiled {
            out_dir,
            sources,
            archives,
        } => serde_json::json!({
            "outcome": "compiled",
            "out_dir": out_dir,
            "sources": sources,
            "archives": archives,
        }),
        BuildOutcome::NothingToCompile => serde_json::json!({
            "outcome": "nothing-to-compile",
        }),
    }
}
