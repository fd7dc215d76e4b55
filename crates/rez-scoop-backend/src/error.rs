use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("could not determine the user home directory")]
    NoHome,

    #[error("scoop package `{name}` does not exist upstream")]
    PackageNotFound { name: String },

    #[error("scoop subprocess failed")]
    Process {
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Platform(#[from] rez_scoop_platform::Error),

    #[error(transparent)]
    Manifest(#[from] rez_scoop_manifest::Error),
}
