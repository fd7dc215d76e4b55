use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("no bucket provides a manifest for `{name}`")]
    ManifestNotFound { name: String },

    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid manifest at {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("no url for architecture tag `{tag}`")]
    NoArchUrl { tag: String },

    #[error("malformed `bin` entry")]
    MalformedBin,

    #[error("`env_set` entry must hold exactly one variable, got {keys}")]
    MalformedEnvEntry { keys: usize },
}
