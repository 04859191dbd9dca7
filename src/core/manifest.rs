//! Manifest (fxbuild.toml) parsing and validation
//!
//! The manifest is the main configuration file for an fxbuild project.
//! Supports environment variable substitution using ${VAR} syntax.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::config::defaults;
use crate::config::urls;
use crate::error::FxbuildError;
use crate::infra::filesystem;

/// The main project manifest (fxbuild.toml)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Manifest {
    /// Project configuration
    pub project: ProjectConfig,

    /// Directory layout
    #[serde(default)]
    pub paths: PathsConfig,

    /// JavaFX SDK configuration
    #[serde(default)]
    pub javafx: JavaFxConfig,
}

/// Project-level configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectConfig {
    /// Project name
    pub name: String,

    /// Class whose main method is launched by default
    #[serde(default = "default_main_class")]
    pub main_class: String,

    /// Project description
    #[serde(default)]
    pub description: Option<String>,
}

fn default_main_class() -> String {
    defaults::DEFAULT_MAIN_CLASS.to_string()
}

/// Directory layout, relative to the project root
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PathsConfig {
    /// Directory holding Java sources
    #[serde(default = "default_src_dir")]
    pub src_dir: String,

    /// Directory holding dependency archives and the JavaFX SDK
    #[serde(default = "default_lib_dir")]
    pub lib_dir: String,

    /// Destination directory for compiled classes
    #[serde(default = "default_out_dir")]
    pub out_dir: String,

    /// Scratch directory for downloads
    #[serde(default = "default_tmp_dir")]
    pub tmp_dir: String,
}

fn default_src_dir() -> String {
    "src".to_string()
}

fn default_lib_dir() -> String {
    "lib".to_string()
}

fn default_out_dir() -> String {
    "out".to_string()
}

fn default_tmp_dir() -> String {
    "tmp".to_string()
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            src_dir: default_src_dir(),
            lib_dir: default_lib_dir(),
            out_dir: default_out_dir(),
            tmp_dir: default_tmp_dir(),
        }
    }
}

/// JavaFX SDK configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JavaFxConfig {
    /// SDK version to install and launch against
    #[serde(default = "default_javafx_version")]
    pub version: String,

    /// Modules passed to --add-modules
    #[serde(default = "default_javafx_modules")]
    pub modules: Vec<String>,

    /// Download mirror base URL
    #[serde(default = "default_download_base")]
    pub download_base: String,
}

fn default_javafx_version() -> String {
    defaults::DEFAULT_JAVAFX_VERSION.to_string()
}

fn default_javafx_modules() -> Vec<String> {
    defaults::DEFAULT_JAVAFX_MODULES
        .iter()
        .map(|m| (*m).to_string())
        .collect()
}

fn default_download_base() -> String {
    urls::JAVAFX_DOWNLOAD.to_string()
}

impl Default for JavaFxConfig {
    fn default() -> Self {
        Self {
            version: default_javafx_version(),
            modules: default_javafx_modules(),
            download_base: default_download_base(),
        }
    }
}

impl Manifest {
    /// Parse a manifest from TOML content
    pub fn from_toml(content: &str) -> Result<Self, FxbuildError> {
        let substituted = substitute_env_vars_in_toml(content).map_err(FxbuildError::Manifest)?;
        toml::from_str(&substituted).map_err(|e| FxbuildError::ManifestParse { source: e })
    }

    /// Load a manifest from a file
    pub fn load(path: &Path) -> Result<Self, FxbuildError> {
        let content = filesystem::read_file(path)?;
        Self::from_toml(&content)
    }

    /// Load the manifest of the project rooted at `project_dir`
    pub fn load_from_project(project_dir: &Path) -> Result<Self, FxbuildError> {
        let manifest_path = project_dir.join(defaults::MANIFEST_FILE);
        if !manifest_path.exists() {
            return Err(FxbuildError::ManifestNotFound {
                path: manifest_path.display().to_string(),
            });
        }
        Self::load(&manifest_path)
    }

    /// Source root, resolved against the project directory
    pub fn src_dir(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.paths.src_dir)
    }

    /// Library root, resolved against the project directory
    pub fn lib_dir(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.paths.lib_dir)
    }

    /// Output directory, resolved against the project directory
    pub fn out_dir(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.paths.out_dir)
    }

    /// Scratch directory, resolved against the project directory
    pub fn tmp_dir(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.paths.tmp_dir)
    }

    /// Root directory of the configured JavaFX SDK
    pub fn sdk_dir(&self, project_dir: &Path) -> PathBuf {
        self.lib_dir(project_dir)
            .join(format!("javafx-sdk-{}", self.javafx.version))
    }

    /// Module path of the configured JavaFX SDK
    pub fn sdk_module_path(&self, project_dir: &Path) -> PathBuf {
        self.sdk_dir(project_dir).join("lib")
    }
}

/// Substitute environment variables in a string using ${VAR} syntax.
///
/// Unset variables substitute to the empty string.
///
/// # Examples
/// ```
/// use fxbuild::core::manifest::substitute_env_vars;
///
/// std::env::set_var("FXBUILD_DOCTEST_VAR", "hello");
/// let result = substitute_env_vars("prefix_${FXBUILD_DOCTEST_VAR}_suffix").unwrap();
/// assert_eq!(result, "prefix_hello_suffix");
/// std::env::remove_var("FXBUILD_DOCTEST_VAR");
/// ```
pub fn substitute_env_vars(input: &str) -> Result<String, String> {
    // Regex to match ${VAR_NAME} pattern
    let re =
        Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").map_err(|e| format!("Invalid regex: {e}"))?;

    let mut last_end = 0;
    let mut output = String::new();

    for cap in re.captures_iter(input) {
        let full_match = cap.get(0).unwrap();
        let var_name = &cap[1];

        // Append text before this match
        output.push_str(&input[last_end..full_match.start()]);

        // Get environment variable value (empty string if not set)
        let value = std::env::var(var_name).unwrap_or_default();
        output.push_str(&value);

        last_end = full_match.end();
    }

    // Append remaining text after last match
    output.push_str(&input[last_end..]);

    Ok(output)
}

/// Substitute environment variables in all string values of a TOML content.
fn substitute_env_vars_in_toml(content: &str) -> Result<String, String> {
    let mut value: toml::Value =
        toml::from_str(content).map_err(|e| format!("Failed to parse TOML: {e}"))?;

    substitute_in_value(&mut value)?;

    toml::to_string_pretty(&value).map_err(|e| format!("Failed to serialize TOML: {e}"))
}

/// Recursively substitute environment variables in a TOML value
fn substitute_in_value(value: &mut toml::Value) -> Result<(), String> {
    match value {
        toml::Value::String(s) => {
            *s = substitute_env_vars(s)?;
        }
        toml::Value::Array(arr) => {
            for item in arr.iter_mut() {
                substitute_in_value(item)?;
            }
        }
        toml::Value::Table(table) => {
            for (_, v) in table.iter_mut() {
                substitute_in_value(v)?;
            }
        }
        _ => {} // Other types (integers, booleans, etc.) don't need substitution
    }
    Ok(())
}
