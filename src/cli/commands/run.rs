//! Run command implementation
//!
//! Implements `fxbuild run` to launch the compiled application.

use anyhow::Result;
use std::path::Path;

use crate::cli::output::{self, status};
use crate::core::launch::launch_app;
use crate::core::manifest::Manifest;
use crate::infra::toolchain::JavaToolchain;

/// Execute the run command
pub async fn execute(project_dir: &Path, main_class: Option<String>) -> Result<()> {
    let manifest = Manifest::load_from_project(project_dir)?;
    let toolchain = JavaToolchain::detect();

    let main_class = main_class.unwrap_or_else(|| manifest.project.main_class.clone());

    let spinner = output::create_spinner(&format!("Running {main_class}"));
    let result = launch_app(&manifest, project_dir, &toolchain, &main_class);
    spinner.finish_and_clear();

    let result = result?;
    if !result.stdout.is_empty() {
        print!("{}", result.stdout);
    }
    println!("{} Application exited cleanly", status::SUCCESS);

    Ok(())
}
