use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Storage I/O failed at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid stored value for {key}: {source}")]
    InvalidValue {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Storage backend unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }
}

#[derive(Error, Debug)]
pub enum CredentialError {
    #[error("Failed to hash secret: {0}")]
    Hash(String),

    #[error("Malformed secret hash for {0}")]
    MalformedHash(String),

    #[error("Duplicate identifier in allow-list: {0}")]
    DuplicateIdentifier(String),
}
