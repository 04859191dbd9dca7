//! CLI command for `fxbuild sdk`
//!
//! Installs the JavaFX SDK into the project's library directory.

use anyhow::Result;
use std::path::Path;

use crate::cli::output::{self, status};
use crate::core::manifest::Manifest;
use crate::core::sdk::{install_sdk, InstallOptions, InstallOutcome};
use crate::infra::download::ProgressCallback;

/// Execute the sdk install command
pub async fn execute_install(project_dir: &Path, force: bool) -> Result<()> {
    let manifest = Manifest::load_from_project(project_dir)?;
    let options = InstallOptions { force };

    // Progress bar fed from the download callback; the total arrives with
    // the first chunk once the server reports a content length.
    let bar = output::create_download_bar(0);
    let bar_updater = bar.clone();
    let progress: ProgressCallback = Box::new(move |downloaded, total| {
        if total > 0 && bar_updater.length() != Some(total) {
            bar_updater.set_length(total);
        }
        bar_updater.set_position(downloaded);
    });

    let outcome = install_sdk(&manifest, project_dir, &options, Some(progress)).await;
    bar.finish_and_clear();

    match outcome? {
        InstallOutcome::Installed { sdk_dir } => {
            println!(
                "{} Installed JavaFX SDK {}",
                status::SUCCESS,
                manifest.javafx.version
            );
            println!("  Location: {}", sdk_dir.display());
        }
        InstallOutcome::AlreadyInstalled { sdk_dir } => {
            println!(
                "{} JavaFX SDK {} already installed at {}",
                status::INFO,
                manifest.javafx.version,
                sdk_dir.display()
            );
        }
    }

    Ok(())
}
