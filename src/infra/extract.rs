//! Zip archive extraction

use std::fs::{create_dir_all, File};
use std::io;
use std::path::Path;

use zip::ZipArchive;

/// Unpack a zip archive into `dest`.
///
/// Entries whose names would escape the destination are skipped.
pub fn unpack_zip(archive_path: &Path, dest: &Path) -> io::Result<()> {
    let mut archive = ZipArchive::new(File::open(archive_path)?).map_err(io::Error::other)?;

    for i in 0..archive.len() {
        let mut entry = archive.by_index(i).map_err(io::Error::other)?;

        let path = match entry.enclosed_name() {
            Some(name) => dest.join(name),
            None => continue,
        };

        tracing::trace!("Extracting {}", path.display());

        if entry.is_dir() {
            create_dir_all(&path)?;
        } else {
            if let Some(parent) = path.parent() {
                if !parent.exists() {
                    create_dir_all(parent)?;
                }
            }

            let mut output = File::create(&path)?;
            io::copy(&mut entry, &mut output)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    fn write_zip(path: &Path, entries: &[(&str, Option<&[u8]>)]) {
        let file = File::create(path).unwrap();
        let mut writer = ZipWriter::new(file);
        let options = SimpleFileOptions::default();

        for (name, content) in entries {
            match content {
                Some(bytes) => {
                    writer.start_file(*name, options).unwrap();
                    writer.write_all(bytes).unwrap();
                }
                None => {
                    writer.add_directory(*name, options).unwrap();
                }
            }
        }

        writer.finish().unwrap();
    }

    #[test]
    fn test_unpack_files_and_directories() {
        let dir = TempDir::new().unwrap();
        let archive = dir.path().join("sdk.zip");
        write_zip(
            &archive,
            &[
                ("sdk/", None),
                ("sdk/lib/", None),
                ("sdk/lib/javafx.base.jar", Some(b"jar bytes")),
                ("sdk/legal/notice.txt", Some(b"notice")),
            ],
        );

        let dest = dir.path().join("lib");
        unpack_zip(&archive, &dest).unwrap();

        assert!(dest.join("sdk/lib").is_dir());
        assert_eq!(
            std::fs::read(dest.join("sdk/lib/javafx.base.jar")).unwrap(),
            b"jar bytes"
        );
        assert_eq!(
            std::fs::read(dest.join("sdk/legal/notice.txt")).unwrap(),
            b"notice"
        );
    }

    #[test]
    fn test_unpack_skips_escaping_entries() {
        let dir = TempDir::new().unwrap();
        let archive = dir.path().join("evil.zip");
        write_zip(
            &archive,
            &[
                ("../escape.txt", Some(b"nope")),
                ("safe.txt", Some(b"ok")),
            ],
        );

        let dest = dir.path().join("lib");
        unpack_zip(&archive, &dest).unwrap();

        assert_eq!(std::fs::read(dest.join("safe.txt")).unwrap(), b"ok");
        assert!(!dir.path().join("escape.txt").exists());
    }

    #[test]
    fn test_unpack_rejects_garbage() {
        let dir = TempDir::new().unwrap();
        let archive = dir.path().join("corrupt.zip");
        std::fs::write(&archive, b"this is not a zip archive").unwrap();

        let dest = dir.path().join("lib");
        assert!(unpack_zip(&archive, &dest).is_err());
    }
}
