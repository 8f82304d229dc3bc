//! Error types for ksync-core

/// Result type for ksync-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in ksync-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A raw record from the settings file could not be decoded into a spec
    #[error("Failed to decode spec #{index}: {source}")]
    Decode {
        index: usize,
        #[source]
        source: serde_yaml::Error,
    },

    /// A spec with this name is already registered
    #[error("name already exists: {name}")]
    NameExists { name: String },

    /// A spec with the same equivalence projection is already registered
    #[error("similar spec exists: {existing}")]
    SimilarSpecExists { existing: String },

    /// No spec with this name is registered
    #[error("does not exist: {name}")]
    NotFound { name: String },

    /// A spec failed to start watching
    #[error("Failed to watch {name}: {message}")]
    Watch { name: String, message: String },

    /// A spec failed to release its resources
    #[error("Failed to clean up {name}: {message}")]
    Cleanup { name: String, message: String },

    /// Filesystem or settings error from ksync-fs
    #[error(transparent)]
    Fs(#[from] ksync_fs::Error),

    /// YAML serialization error
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}
