//! Manifest lookup across scoop buckets.
//!
//! Buckets live under `<root>/buckets/<bucket>`, each holding its
//! manifests in a nested `bucket/` directory.

use crate::error::{Error, Result};
use crate::manifest::Manifest;
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Locate and parse the manifest for `name` under the scoop root.
///
/// Every bucket is probed in directory-listing order; the first bucket
/// holding `bucket/<name>.json` wins. A missing `buckets` directory is
/// treated the same as no bucket providing the package.
pub fn find_manifest(root: &Path, name: &str) -> Result<Manifest> {
    let buckets = root.join("buckets");
    let entries = match fs::read_dir(&buckets) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(Error::ManifestNotFound {
                name: name.to_string(),
            });
        }
        Err(e) => {
            return Err(Error::Read {
                path: buckets,
                source: e,
            });
        }
    };

    for entry in entries {
        let entry = entry.map_err(|e| Error::Read {
            path: buckets.clone(),
            source: e,
        })?;
        let candidate = entry.path().join("bucket").join(format!("{name}.json"));
        if !candidate.is_file() {
            continue;
        }

        debug!(manifest = %candidate.display(), "found manifest");
        let raw = fs::read_to_string(&candidate).map_err(|e| Error::Read {
            path: candidate.clone(),
            source: e,
        })?;
        return serde_json::from_str(&raw).map_err(|e| Error::Parse {
            path: candidate,
            source: e,
        });
    }

    Err(Error::ManifestNotFound {
        name: name.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write_manifest(root: &Path, bucket: &str, name: &str, raw: &str) {
        let dir = root.join("buckets").join(bucket).join("bucket");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(format!("{name}.json")), raw).unwrap();
    }

    #[test]
    fn test_find_manifest_in_bucket() {
        let root = tempdir().unwrap();
        write_manifest(root.path(), "main", "foo", r#"{"version": "1.2.3"}"#);

        let manifest = find_manifest(root.path(), "foo").unwrap();
        assert_eq!(manifest.version(), "1.2.3");
    }

    #[test]
    fn test_find_manifest_searches_all_buckets() {
        let root = tempdir().unwrap();
        write_manifest(root.path(), "main", "other", r#"{}"#);
        write_manifest(root.path(), "extras", "foo", r#"{"version": "2.0"}"#);

        let manifest = find_manifest(root.path(), "foo").unwrap();
        assert_eq!(manifest.version(), "2.0");
    }

    #[test]
    fn test_find_manifest_not_found() {
        let root = tempdir().unwrap();
        write_manifest(root.path(), "main", "other", r#"{}"#);

        let result = find_manifest(root.path(), "foo");
        assert!(matches!(result, Err(Error::ManifestNotFound { .. })));
    }

    #[test]
    fn test_find_manifest_missing_buckets_dir() {
        let root = tempdir().unwrap();
        let result = find_manifest(root.path(), "foo");
        assert!(matches!(result, Err(Error::ManifestNotFound { .. })));
    }

    #[test]
    fn test_find_manifest_invalid_json() {
        let root = tempdir().unwrap();
        write_manifest(root.path(), "main", "foo", "{not json");

        let result = find_manifest(root.path(), "foo");
        assert!(matches!(result, Err(Error::Parse { .. })));
    }
}
