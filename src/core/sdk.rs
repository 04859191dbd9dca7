//! JavaFX SDK installation
//!
//! Downloads and unpacks the platform-specific OpenJFX SDK into the library
//! root. Repeat invocations are no-ops once the SDK is in place.

use std::path::{Path, PathBuf};

use crate::config::defaults;
use crate::config::urls;
use crate::core::manifest::Manifest;
use crate::error::{FxbuildError, SdkError};
use crate::infra::download::{DownloadManager, ProgressCallback};
use crate::infra::extract::unpack_zip;
use crate::infra::filesystem;
use crate::infra::platform::Platform;

/// SDK install options
#[derive(Debug, Default)]
pub struct InstallOptions {
    /// Reinstall even if the SDK is already present
    pub force: bool,
}

/// Outcome of an install run
#[derive(Debug)]
pub enum InstallOutcome {
    /// SDK downloaded and extracted
    Installed {
        /// Root of the installed SDK
        sdk_dir: PathBuf,
    },
    /// SDK already present; nothing downloaded
    AlreadyInstalled {
        /// Root of the existing SDK
        sdk_dir: PathBuf,
    },
}

/// Install the configured JavaFX SDK into the project's library root.
///
/// The extracted SDK's lib/ directory is what the launcher needs, so its
/// presence marks a completed install.
pub async fn install_sdk(
    manifest: &Manifest,
    project_dir: &Path,
    options: &InstallOptions,
    progress: Option<ProgressCallback>,
) -> Result<InstallOutcome, FxbuildError> {
    let lib_dir = manifest.lib_dir(project_dir);
    let sdk_dir = manifest.sdk_dir(project_dir);

    if sdk_dir.join("lib").exists() && !options.force {
        tracing::info!("JavaFX SDK {} already installed", manifest.javafx.version);
        return Ok(InstallOutcome::AlreadyInstalled { sdk_dir });
    }

    let platform = Platform::detect()?;
    let url = urls::javafx_sdk_url(
        &manifest.javafx.download_base,
        &manifest.javafx.version,
        &platform,
    );

    let tmp_dir = manifest.tmp_dir(project_dir);
    filesystem::create_dir_all(&tmp_dir)?;
    let archive_path = tmp_dir.join(defaults::SDK_ARCHIVE_NAME);

    tracing::info!(
        "Downloading JavaFX SDK {} for {platform}",
        manifest.javafx.version
    );

    let result = DownloadManager::new()
        .download(&url, &archive_path, progress)
        .await?;
    tracing::debug!("Downloaded {} bytes, sha256 {}", result.size, result.checksum);

    filesystem::create_dir_all(&lib_dir)?;
    unpack_zip(&archive_path, &lib_dir).map_err(|e| SdkError::Archive {
        path: archive_path.clone(),
        error: e.to_string(),
    })?;

    // The archive has served its purpose
    std::fs::remove_file(&archive_path).map_err(|e| SdkError::IoError {
        path: archive_path.clone(),
        error: e.to_string(),
    })?;

    tracing::info!("Installed JavaFX SDK into {}", sdk_dir.display());

    Ok(InstallOutcome::Installed { sdk_dir })
}
