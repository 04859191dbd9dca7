//! CLI implementation for `fxbuild clean`
//!
//! Resets the output directory, preserving the sentinel files.

use anyhow::{Context, Result};
use std::path::Path;

use crate::cli::output::status;
use crate::config::defaults;
use crate::core::clean::reset_dir;
use crate::core::manifest::Manifest;

/// Execute the clean command
pub async fn execute(project_dir: &Path) -> Result<()> {
    let manifest = Manifest::load_from_project(project_dir)?;
    let out_dir = manifest.out_dir(project_dir);

    let result = reset_dir(&out_dir, defaults::PRESERVED_FILES)
        .with_context(|| "Failed to reset output directory")?;

    println!("{} Reset {}", status::SUCCESS, out_dir.display());
    for name in &result.preserved {
        println!("  Preserved {name}");
    }

    Ok(())
}
