//! Rez packages-path configuration from the environment.

use crate::error::{Error, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Where rez packages may be installed, mirroring rez's own
/// `local_packages_path` / `packages_path` settings.
#[derive(Debug, Clone)]
pub struct RezConfig {
    local_packages_path: PathBuf,
    packages_path: Vec<PathBuf>,
}

impl RezConfig {
    /// `REZ_LOCAL_PACKAGES_PATH` (default `~/packages`) and
    /// `REZ_PACKAGES_PATH` (OS-pathsep-separated, default the local
    /// path).
    pub fn from_env() -> Result<Self> {
        let local = match env::var_os("REZ_LOCAL_PACKAGES_PATH") {
            Some(path) => PathBuf::from(path),
            None => home::home_dir().ok_or(Error::NoHome)?.join("packages"),
        };
        let packages_path = match env::var_os("REZ_PACKAGES_PATH") {
            Some(paths) => env::split_paths(&paths).collect(),
            None => vec![local.clone()],
        };
        Ok(Self {
            local_packages_path: local,
            packages_path,
        })
    }

    pub fn with_paths(local: impl Into<PathBuf>, packages_path: Vec<PathBuf>) -> Self {
        Self {
            local_packages_path: local.into(),
            packages_path,
        }
    }

    pub fn local_packages_path(&self) -> &Path {
        &self.local_packages_path
    }

    /// Destination root for produced packages: the first configured
    /// search path mentioning scoop (case-insensitive), else the local
    /// packages path.
    pub fn install_root(&self) -> &Path {
        self.packages_path
            .iter()
            .find(|p| p.to_string_lossy().to_lowercase().contains("scoop"))
            .map(PathBuf::as_path)
            .unwrap_or(self.local_packages_path.as_path())
    }
}
