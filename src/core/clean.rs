//! Output directory reset
//!
//! Resets the build output directory to empty, carrying a small set of
//! preserved files across the reset unchanged.

use std::path::Path;

use crate::error::FilesystemError;
use crate::infra::filesystem;

/// Result of an output reset
#[derive(Debug, Default)]
pub struct ResetResult {
    /// Names of preserved files that existed and were restored
    pub preserved: Vec<String>,
}

/// Reset `dir` to an empty directory, restoring the files named in
/// `preserve` with their previous content.
///
/// The sequence is snapshot, delete tree, recreate, restore. Anything not on
/// the preserve list is gone afterwards. A missing directory is simply
/// created.
pub fn reset_dir(dir: &Path, preserve: &[&str]) -> Result<ResetResult, FilesystemError> {
    // Snapshot preserved files before the tree goes away
    let mut snapshot = Vec::new();
    for name in preserve {
        let path = dir.join(name);
        if path.is_file() {
            snapshot.push(((*name).to_string(), filesystem::read_bytes(&path)?));
        }
    }

    filesystem::remove_dir_all(dir)?;
    filesystem::create_dir_all(dir)?;

    // Restore only after the directory exists again
    for (name, content) in &snapshot {
        filesystem::write_bytes(&dir.join(name), content)?;
    }

    Ok(ResetResult {
        preserved: snapshot.into_iter().map(|(name, _)| name).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_reset_removes_prior_contents() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("out");
        std::fs::create_dir_all(out.join("com/example")).unwrap();
        std::fs::write(out.join("com/example/Main.class"), "stale").unwrap();
        std::fs::write(out.join("stale.txt"), "stale").unwrap();

        let result = reset_dir(&out, &["README.md"]).unwrap();

        assert!(out.is_dir());
        assert!(!out.join("com").exists());
        assert!(!out.join("stale.txt").exists());
        assert!(result.preserved.is_empty());
    }

    #[test]
    fn test_reset_preserves_sentinel_content() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("out");
        std::fs::create_dir_all(&out).unwrap();
        std::fs::write(out.join("README.md"), b"build output lives here").unwrap();
        std::fs::write(out.join("stale.txt"), "stale").unwrap();

        let result = reset_dir(&out, &["README.md"]).unwrap();

        assert_eq!(
            std::fs::read(out.join("README.md")).unwrap(),
            b"build output lives here"
        );
        assert!(!out.join("stale.txt").exists());
        assert_eq!(result.preserved, vec!["README.md".to_string()]);
    }

    #[test]
    fn test_absent_sentinel_stays_absent() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("out");
        std::fs::create_dir_all(&out).unwrap();
        std::fs::write(out.join("stale.txt"), "stale").unwrap();

        let result = reset_dir(&out, &["README.md"]).unwrap();

        assert!(!out.join("README.md").exists());
        assert!(result.preserved.is_empty());
    }

    #[test]
    fn test_reset_creates_missing_directory() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("out");

        let result = reset_dir(&out, &["README.md"]).unwrap();

        assert!(out.is_dir());
        assert!(result.preserved.is_empty());
    }

    #[test]
    fn test_preserve_list_handles_multiple_files() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("out");
        std::fs::create_dir_all(&out).unwrap();
        std::fs::write(out.join("README.md"), "readme").unwrap();
        std::fs::write(out.join(".keep"), "").unwrap();
        std::fs::write(out.join("stale.txt"), "stale").unwrap();

        let result = reset_dir(&out, &["README.md", ".keep"]).unwrap();

        assert_eq!(std::fs::read(out.join("README.md")).unwrap(), b"readme");
        assert!(out.join(".keep").exists());
        assert!(!out.join("stale.txt").exists());
        assert_eq!(result.preserved.len(), 2);
    }
}
