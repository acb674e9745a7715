use common::TokenError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Invalid token: {0}")]
    InvalidToken(#[from] TokenError),
    #[error("Depot entry {0} already exists")]
    AlreadyExists(String),
    #[error("Depot entry {0} not found")]
    NotFound(String),
    #[error("Depot path {0:?} is not a directory")]
    NotADirectory(PathBuf),
    #[error("Depot directory {0:?} is read-only")]
    ReadOnly(PathBuf),
    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StorageError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StorageError::Io {
            path: path.into(),
            source,
        }
    }

    /// True when the requested entry does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, StorageError::NotFound(_))
    }
}
