//! Error types for fxbuild
//!
//! Domain-specific error types using thiserror.

use std::path::PathBuf;
use thiserror::Error;

/// Build errors
#[derive(Error, Debug)]
pub enum BuildError {
    /// Source root does not exist
    #[error("Source directory not found: {path}")]
    SourceRootMissing { path: PathBuf },

    /// Compiler could not be started
    #[error("Failed to run compiler '{program}': {error}")]
    CompilerSpawn { program: String, error: String },

    /// Compiler exited with a non-zero status
    #[error("Compilation failed:\n{stdout}\n{stderr}")]
    CompilerFailed { stdout: String, stderr: String },
}

/// Launcher errors
#[derive(Error, Debug)]
pub enum LaunchError {
    /// No compiled classes to run
    #[error("Output directory not found: {path}. Run 'fxbuild build' first.")]
    OutputMissing { path: PathBuf },

    /// Runtime could not be started
    #[error("Failed to run java runtime '{program}': {error}")]
    RuntimeSpawn { program: String, error: String },

    /// Application exited with a non-zero status
    #[error("Application failed:\n{stdout}\n{stderr}")]
    RuntimeFailed { stdout: String, stderr: String },
}

/// SDK installation errors
#[derive(Error, Debug)]
pub enum SdkError {
    /// Archive could not be extracted
    #[error("Failed to extract SDK archive '{path}': {error}")]
    Archive { path: PathBuf, error: String },

    /// IO error during installation
    #[error("IO error for '{path}': {error}")]
    IoError { path: PathBuf, error: String },
}

/// Host platform errors
#[derive(Error, Debug)]
pub enum PlatformError {
    /// Operating system not supported by the SDK distribution
    #[error("Unsupported OS: {os}")]
    UnsupportedOs { os: String },

    /// CPU architecture not supported by the SDK distribution
    #[error("Unsupported architecture: {arch}")]
    UnsupportedArch { arch: String },
}

/// Download errors
#[derive(Error, Debug)]
pub enum DownloadError {
    /// Network error
    #[error("Network error downloading '{url}': {error}")]
    NetworkError { url: String, error: String },

    /// IO error
    #[error("IO error for '{path}': {error}")]
    IoError { path: PathBuf, error: String },

    /// Max retries exceeded
    #[error("Download failed after {retries} retries: {url}")]
    MaxRetriesExceeded { url: String, retries: u32 },
}

/// Filesystem errors
#[derive(Error, Debug)]
pub enum FilesystemError {
    /// Failed to create directory
    #[error("Failed to create directory '{path}': {error}")]
    CreateDir { path: PathBuf, error: String },

    /// Failed to remove directory
    #[error("Failed to remove directory '{path}': {error}")]
    RemoveDir { path: PathBuf, error: String },

    /// Failed to write file
    #[error("Failed to write file '{path}': {error}")]
    WriteFile { path: PathBuf, error: String },

    /// Failed to read file
    #[error("Failed to read file '{path}': {error}")]
    ReadFile { path: PathBuf, error: String },
}

/// Top-level fxbuild error type
#[derive(Error, Debug)]
pub enum FxbuildError {
    /// Manifest not found
    #[error("Manifest not found at '{path}'. Run 'fxbuild init' to create a project.")]
    ManifestNotFound { path: String },

    /// Manifest parse error
    #[error("Failed to parse manifest: {source}")]
    ManifestParse { source: toml::de::Error },

    /// Manifest error
    #[error("Manifest error: {0}")]
    Manifest(String),

    /// Build error
    #[error("Build error: {0}")]
    Build(#[from] BuildError),

    /// Launch error
    #[error("Launch error: {0}")]
    Launch(#[from] LaunchError),

    /// SDK error
    #[error("SDK error: {0}")]
    Sdk(#[from] SdkError),

    /// Platform error
    #[error("Platform error: {0}")]
    Platform(#[from] PlatformError),

    /// Download error
    #[error("Download error: {0}")]
    Download(#[from] DownloadError),

    /// Filesystem error
    #[error("Filesystem error: {0}")]
    Filesystem(#[from] FilesystemError),
}
