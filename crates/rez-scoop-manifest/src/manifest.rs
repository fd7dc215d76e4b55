use crate::error::{Error, Result};
use serde::Deserialize;
use std::collections::BTreeMap;

pub const DEFAULT_DESCRIPTION: &str = "No description provided";
pub const DEFAULT_VERSION: &str = "0.0.0";

/// A field that is legitimately either a bare scalar or a sequence.
///
/// The singular-or-plural policy: a bare scalar always normalizes to a
/// one-element sequence before further processing.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T: Clone> OneOrMany<T> {
    fn to_vec(&self) -> Vec<T> {
        match self {
            Self::One(v) => vec![v.clone()],
            Self::Many(v) => v.clone(),
        }
    }
}

/// One element of a sequence-shaped `bin` field: a path/alias string or
/// the trailing argument list.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum BinElem {
    Str(String),
    Args(Vec<String>),
}

/// The `bin` field: a bare path, or `[path]` / `[path, alias]` /
/// `[path, alias, [args..]]`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum BinField {
    Path(String),
    Spec(Vec<BinElem>),
}

/// Per-architecture section of the `architecture` table.
#[derive(Debug, Clone, Deserialize)]
struct ArchEntry {
    url: Option<String>,
}

/// One normalized binary: manifest-relative path, optional alias, and the
/// arguments baked into the alias.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinSpec {
    pub path: String,
    pub alias: Option<String>,
    pub args: Vec<String>,
}

/// Typed view over one scoop manifest.
///
/// Every accessor tolerates an absent key; the default instance is the
/// empty manifest used when no bucket provides the package.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Manifest {
    description: Option<String>,
    version: Option<String>,
    url: Option<OneOrMany<String>>,
    architecture: Option<BTreeMap<String, ArchEntry>>,
    depends: Option<OneOrMany<String>>,
    bin: Option<BinField>,
    env_add_path: Option<OneOrMany<String>>,
    env_set: Option<Vec<BTreeMap<String, String>>>,
}

impl Manifest {
    pub fn description(&self) -> String {
        self.description
            .clone()
            .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string())
    }

    pub fn version(&self) -> String {
        self.version
            .clone()
            .unwrap_or_else(|| DEFAULT_VERSION.to_string())
    }

    /// Url given directly through the `url` field, valid on any
    /// architecture (first entry when the field holds a list).
    pub fn direct_url(&self) -> Option<String> {
        self.url
            .as_ref()
            .and_then(|url| url.to_vec().into_iter().next())
    }

    /// Whether the manifest splits its urls per architecture.
    pub fn has_architecture(&self) -> bool {
        self.architecture.is_some()
    }

    /// Url from the `architecture` table for the given tag.
    ///
    /// A table without the tag, or a tag without a url, is an error
    /// rather than a silent default; a manifest without the table simply
    /// has no architecture-specific url.
    pub fn arch_url(&self, arch_tag: &str) -> Result<Option<String>> {
        match &self.architecture {
            Some(table) => match table.get(arch_tag).and_then(|e| e.url.clone()) {
                Some(url) => Ok(Some(url)),
                None => Err(Error::NoArchUrl {
                    tag: arch_tag.to_string(),
                }),
            },
            None => Ok(None),
        }
    }

    pub fn depends(&self) -> Vec<String> {
        self.depends.as_ref().map(OneOrMany::to_vec).unwrap_or_default()
    }

    /// Normalized binaries, paths still manifest-relative.
    pub fn bins(&self) -> Result<Vec<BinSpec>> {
        let field = match &self.bin {
            None => return Ok(Vec::new()),
            Some(field) => field,
        };

        let spec = match field {
            BinField::Path(path) => BinSpec {
                path: path.clone(),
                alias: None,
                args: Vec::new(),
            },
            BinField::Spec(elems) => {
                let path = match elems.first() {
                    Some(BinElem::Str(path)) => path.clone(),
                    _ => return Err(Error::MalformedBin),
                };
                let mut spec = BinSpec {
                    path,
                    alias: None,
                    args: Vec::new(),
                };
                if elems.len() >= 2 {
                    match &elems[1] {
                        BinElem::Str(alias) => spec.alias = Some(alias.clone()),
                        BinElem::Args(_) => return Err(Error::MalformedBin),
                    }
                }
                if elems.len() >= 3 {
                    match &elems[2] {
                        BinElem::Args(args) => spec.args = args.clone(),
                        BinElem::Str(arg) => spec.args = vec![arg.clone()],
                    }
                }
                spec
            }
        };
        Ok(vec![spec])
    }

    /// Relative paths from `env_add_path`, each destined for a PATH
    /// prepend.
    pub fn env_add_path(&self) -> Vec<String> {
        self.env_add_path
            .as_ref()
            .map(OneOrMany::to_vec)
            .unwrap_or_default()
    }

    /// Raw `env_set` pairs with the `$dir` placeholder intact.
    ///
    /// Each entry must hold exactly one variable.
    pub fn env_set(&self) -> Result<Vec<(String, String)>> {
        let entries = match &self.env_set {
            None => return Ok(Vec::new()),
            Some(entries) => entries,
        };

        let mut pairs = Vec::with_capacity(entries.len());
        for entry in entries {
            if entry.len() != 1 {
                return Err(Error::MalformedEnvEntry { keys: entry.len() });
            }
            for (var, value) in entry {
                pairs.push((var.clone(), value.clone()));
            }
        }
        Ok(pairs)
    }
}
