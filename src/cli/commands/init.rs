//! CLI implementation for `fxbuild init`
//!
//! Scaffolds a default manifest for a new project.

use anyhow::Result;
use std::path::Path;

use crate::cli::output::status;
use crate::config::defaults;
use crate::infra::filesystem;

/// Execute the init command
pub async fn execute(project_dir: &Path, force: bool) -> Result<()> {
    let manifest_path = project_dir.join(defaults::MANIFEST_FILE);
    if manifest_path.exists() && !force {
        anyhow::bail!(
            "{} already exists in {}. Use --force to overwrite.",
            defaults::MANIFEST_FILE,
            project_dir.display()
        );
    }

    let name = project_dir
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("app");
    filesystem::write_file(&manifest_path, &default_manifest_toml(name))?;

    println!("{} Created {}", status::SUCCESS, manifest_path.display());

    Ok(())
}

fn default_manifest_toml(name: &str) -> String {
    format!(
        r#"[project]
name = "{name}"
main_class = "{main_class}"

[paths]
src_dir = "src"
lib_dir = "lib"
out_dir = "out"
tmp_dir = "tmp"

[javafx]
version = "{version}"
modules = ["javafx.controls", "javafx.fxml"]
"#,
        main_class = defaults::DEFAULT_MAIN_CLASS,
        version = defaults::DEFAULT_JAVAFX_VERSION,
    )
}
