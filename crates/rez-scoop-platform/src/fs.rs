//! Filesystem helpers.

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Recursively copy a directory tree, creating destination directories as
/// needed. Existing destination files are overwritten.
pub fn copy_dir_all(src: impl AsRef<Path>, dest: impl AsRef<Path>) -> Result<()> {
    let src = src.as_ref();
    let dest = dest.as_ref();

    if !dest.exists() {
        fs::create_dir_all(dest).map_err(|e| Error::Write {
            path: dest.to_path_buf(),
            source: e,
        })?;
    }

    for entry in fs::read_dir(src).map_err(|e| Error::Read {
        path: src.to_path_buf(),
        source: e,
    })? {
        let entry = entry.map_err(|e| Error::Read {
            path: src.to_path_buf(),
            source: e,
        })?;
        let file_type = entry.file_type().map_err(|e| Error::Read {
            path: entry.path(),
            source: e,
        })?;

        let src_path = entry.path();
        let dest_path = dest.join(entry.file_name());

        if file_type.is_dir() {
            copy_dir_all(&src_path, &dest_path)?;
        } else {
            fs::copy(&src_path, &dest_path).map_err(|e| Error::Write {
                path: dest_path,
                source: e,
            })?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_copy_dir_all_replicates_payload_tree() {
        let dir = tempdir().unwrap();
        let payload = dir.path().join("apps/foo");
        let variant = dir.path().join("packages/foo/1.2.3/platform-linux");
        fs::create_dir_all(payload.join("bin")).unwrap();
        fs::write(payload.join("foo.exe"), "executable").unwrap();
        fs::write(payload.join("bin/helper.cmd"), "shim").unwrap();

        copy_dir_all(&payload, &variant).unwrap();
        assert_eq!(fs::read_to_string(variant.join("foo.exe")).unwrap(), "executable");
        assert_eq!(
            fs::read_to_string(variant.join("bin/helper.cmd")).unwrap(),
            "shim"
        );
    }

    #[test]
    fn test_copy_dir_all_overwrites_destination_files() {
        let dir = tempdir().unwrap();
        let payload = dir.path().join("apps/foo");
        let variant = dir.path().join("variant");
        fs::create_dir_all(&payload).unwrap();
        fs::create_dir_all(&variant).unwrap();
        fs::write(payload.join("foo.exe"), "new").unwrap();
        fs::write(variant.join("foo.exe"), "stale").unwrap();

        copy_dir_all(&payload, &variant).unwrap();
        assert_eq!(fs::read_to_string(variant.join("foo.exe")).unwrap(), "new");
    }

    #[test]
    fn test_copy_dir_all_missing_source() {
        let dir = tempdir().unwrap();
        let result = copy_dir_all(dir.path().join("apps/absent"), dir.path().join("variant"));
        assert!(matches!(result, Err(Error::Read { .. })));
        // The destination directory is created before the source is read;
        // only the read failure is reported.
        assert!(dir.path().join("variant").is_dir());
    }
}
