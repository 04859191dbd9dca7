//! Source and library file discovery

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::defaults;

/// Recursively collect files under `root` carrying the given extension.
///
/// Results are sorted so repeated runs hand the compiler an identical
/// argument list. A missing root yields an empty set, not an error.
pub fn find_files_with_extension(root: &Path, extension: &str) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.path().to_path_buf())
        .filter(|path| path.extension().is_some_and(|ext| ext == extension))
        .collect();
    files.sort();
    files
}

/// Find all Java source files under the source root
pub fn find_sources(src_dir: &Path) -> Vec<PathBuf> {
    find_files_with_extension(src_dir, defaults::SOURCE_EXTENSION)
}

/// Find all jar archives under the library root
pub fn find_archives(lib_dir: &Path) -> Vec<PathBuf> {
    find_files_with_extension(lib_dir, defaults::ARCHIVE_EXTENSION)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(dir: &TempDir, name: &str) {
        let path = dir.path().join(name);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, "").unwrap();
    }

    #[test]
    fn test_finds_nested_sources_sorted() {
        let dir = TempDir::new().unwrap();
        touch(&dir, "ui/Controller.java");
        touch(&dir, "Main.java");
        touch(&dir, "model/graph/Vertex.java");

        let found = find_sources(dir.path());

        assert_eq!(
            found,
            vec![
                dir.path().join("Main.java"),
                dir.path().join("model/graph/Vertex.java"),
                dir.path().join("ui/Controller.java"),
            ]
        );
    }

    #[test]
    fn test_ignores_other_extensions() {
        let dir = TempDir::new().unwrap();
        touch(&dir, "Main.java");
        touch(&dir, "notes.txt");
        touch(&dir, "Main.class");

        let found = find_sources(dir.path());

        assert_eq!(found, vec![dir.path().join("Main.java")]);
    }

    #[test]
    fn test_missing_root_yields_empty() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("absent");

        assert!(find_sources(&missing).is_empty());
        assert!(find_archives(&missing).is_empty());
    }

    #[test]
    fn test_root_without_matches_yields_empty() {
        let dir = TempDir::new().unwrap();
        touch(&dir, "README.md");

        assert!(find_archives(dir.path()).is_empty());
    }

    #[test]
    fn test_directories_are_not_matched() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("weird.jar")).unwrap();
        touch(&dir, "weird.jar/real.jar");

        let found = find_archives(dir.path());

        assert_eq!(found, vec![dir.path().join("weird.jar/real.jar")]);
    }
}
