//! Persisting the rez package and its payload.

use crate::config::RezConfig;
use crate::error::{Error, Result};
use crate::package::RezPackage;
use crate::render;
use rez_scoop_platform::fs::copy_dir_all;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info};

impl RezPackage {
    /// Install the package definition and its payload, returning the
    /// roots of the variants that were fully copied.
    ///
    /// The destination is `dest` when given, otherwise resolved through
    /// [`RezConfig::install_root`]. A destination that cannot be created
    /// aborts before anything is written; a per-variant copy failure
    /// skips that variant and keeps the ones already completed.
    pub fn install(&self, dest: Option<&Path>, payload: &Path) -> Result<Vec<PathBuf>> {
        let config = RezConfig::from_env()?;
        self.install_with(&config, dest, payload)
    }

    pub fn install_with(
        &self,
        config: &RezConfig,
        dest: Option<&Path>,
        payload: &Path,
    ) -> Result<Vec<PathBuf>> {
        let root = dest.unwrap_or_else(|| config.install_root());
        let package_dir = root.join(self.name()).join(self.version());

        fs::create_dir_all(&package_dir).map_err(|e| Error::DestinationUnavailable {
            path: package_dir.clone(),
            source: e,
        })?;

        let definition = package_dir.join("package.py");
        fs::write(&definition, render::package_py(self)).map_err(|e| {
            Error::DestinationUnavailable {
                path: definition.clone(),
                source: e,
            }
        })?;
        info!(path = %definition.display(), "wrote rez package definition");

        let mut installed = Vec::new();
        for variant in self.variants() {
            let mut variant_root = package_dir.clone();
            for part in variant {
                variant_root.push(part);
            }
            match copy_dir_all(payload, &variant_root) {
                Ok(()) => {
                    info!(variant = %variant_root.display(), "copied package payload");
                    installed.push(variant_root);
                }
                Err(source) => {
                    let err = Error::CopyFailed {
                        path: variant_root,
                        source,
                    };
                    error!(error = %err, "variant payload copy failed");
                }
            }
        }
        Ok(installed)
    }
}
