//! YAML configuration loading and serialization

use serde::{Serialize, de::DeserializeOwned};

use crate::io;
use crate::{Error, NormalizedPath, Result};

const FORMAT: &str = "YAML";

/// Typed access to YAML configuration files.
///
/// Wraps parse and serialize failures with the path and format they
/// came from so callers can report them without extra context.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConfigStore;

impl ConfigStore {
    /// Create a new ConfigStore.
    pub fn new() -> Self {
        Self
    }

    /// Load and decode a configuration file.
    pub fn load<T: DeserializeOwned>(&self, path: &NormalizedPath) -> Result<T> {
        let content = io::read_text(path)?;
        self.parse(path, &content)
    }

    /// Decode configuration text that was read from `path`.
    pub fn parse<T: DeserializeOwned>(&self, path: &NormalizedPath, content: &str) -> Result<T> {
        serde_yaml::from_str(content).map_err(|e| Error::ConfigParse {
            path: path.to_native(),
            format: FORMAT.into(),
            message: e.to_string(),
        })
    }

    /// Serialize a value to YAML bytes.
    pub fn to_bytes<T: Serialize>(&self, value: &T) -> Result<Vec<u8>> {
        serde_yaml::to_string(value)
            .map(String::into_bytes)
            .map_err(|e| Error::ConfigSerialize {
                format: FORMAT.into(),
                message: e.to_string(),
            })
    }
}
