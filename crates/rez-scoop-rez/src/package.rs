//! Rez package built from an installed scoop package.

use crate::commands;
use crate::error::Result;
use rez_scoop_backend::ScoopPackage;
use std::collections::BTreeSet;

/// The package definition to be persisted on the rez side.
///
/// Built once through a fixed field mapping from the scoop metadata and
/// immutable afterwards.
#[derive(Debug, Clone)]
pub struct RezPackage {
    name: String,
    version: String,
    description: String,
    url: Option<String>,
    requires: Vec<String>,
    variants: Vec<Vec<String>>,
    commands: BTreeSet<String>,
}

impl RezPackage {
    /// Project every attribute out of the scoop package. An unresolvable
    /// url (unsupported host architecture, architecture table without the
    /// host tag) fails here, before anything is written.
    pub fn from_scoop(package: &ScoopPackage) -> Result<Self> {
        Ok(Self {
            name: package.name().to_string(),
            version: package.version(),
            description: package.description(),
            url: package.url()?,
            requires: package.requires(),
            variants: package.variants(),
            commands: commands::project(&package.binaries()?, &package.environments()?),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn requires(&self) -> &[String] {
        &self.requires
    }

    pub fn variants(&self) -> &[Vec<String>] {
        &self.variants
    }

    pub fn commands(&self) -> &BTreeSet<String> {
        &self.commands
    }
}
