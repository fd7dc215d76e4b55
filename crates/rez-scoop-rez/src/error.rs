use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("could not determine the user home directory")]
    NoHome,

    #[error("destination `{}` is unavailable", path.display())]
    DestinationUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to copy the payload into `{}`", path.display())]
    CopyFailed {
        path: PathBuf,
        #[source]
        source: rez_scoop_platform::Error,
    },

    #[error(transparent)]
    Backend(#[from] rez_scoop_backend::Error),
}
