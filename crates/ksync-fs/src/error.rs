//! Error types for ksync-fs

use std::path::PathBuf;

/// Result type for ksync-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in ksync-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {format} config at {path}: {message}")]
    ConfigParse {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("Failed to serialize {format} config: {message}")]
    ConfigSerialize { format: String, message: String },

    #[error("Config at {path} is not a key-value document")]
    NotAMapping { path: PathBuf },

    #[error("Could not determine the home directory")]
    HomeDirNotFound,
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
