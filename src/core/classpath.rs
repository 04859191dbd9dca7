//! Classpath construction

use std::path::{Path, PathBuf};

/// Path-list separator used in classpath strings
pub const PATH_LIST_SEPARATOR: char = if cfg!(windows) { ';' } else { ':' };

/// Compose a classpath from the output directory and discovered archives.
///
/// The output directory always comes first, followed by each archive in
/// discovery order. With no archives the result is the output directory
/// alone, with no trailing separator.
pub fn build_classpath(out_dir: &Path, archives: &[PathBuf]) -> String {
    let mut classpath = out_dir.display().to_string();
    for archive in archives {
        classpath.push(PATH_LIST_SEPARATOR);
        classpath.push_str(&archive.display().to_string());
    }
    classpath
}
