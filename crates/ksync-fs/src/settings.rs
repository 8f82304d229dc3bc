//! The ksync settings document
//!
//! A single YAML mapping read from the settings file. The spec registry
//! only cares about the list under [`SPEC_KEY`]; every other key is carried
//! through untouched so that saving never drops unrelated settings.

use serde_yaml::{Mapping, Value};

use crate::{ConfigStore, Error, NormalizedPath, Result};

/// Top-level key holding the list of sync specs.
pub const SPEC_KEY: &str = "spec";

/// File name of the settings file in the user's home directory.
pub const CONFIG_FILE_NAME: &str = ".ksync.yaml";

/// Location of the settings file when none has been loaded.
pub fn default_config_path() -> Result<NormalizedPath> {
    let home = dirs::home_dir().ok_or(Error::HomeDirNotFound)?;
    Ok(NormalizedPath::new(home).join(CONFIG_FILE_NAME))
}

/// In-memory settings document plus the file it was read from.
///
/// Settings that start without a file still remember where the default
/// file would live, so a file created there later can be picked up by
/// [`Settings::reload`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Settings {
    path: Option<NormalizedPath>,
    candidate: Option<NormalizedPath>,
    document: Mapping,
}

impl Settings {
    /// Empty settings that are not backed by any file yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Settings built from an existing document, without a backing file.
    pub fn from_document(document: Mapping) -> Self {
        Self {
            document,
            ..Self::default()
        }
    }

    /// Read settings from `path`.
    ///
    /// An empty file is an empty document. Anything other than a mapping
    /// at the top level is rejected.
    pub fn load(path: &NormalizedPath) -> Result<Self> {
        let value: Value = ConfigStore::new().load(path)?;
        let document = match value {
            Value::Null => Mapping::new(),
            Value::Mapping(map) => map,
            _ => {
                return Err(Error::NotAMapping {
                    path: path.to_native(),
                });
            }
        };

        tracing::debug!(path = %path, keys = document.len(), "loaded settings");

        Ok(Self {
            path: Some(path.clone()),
            candidate: None,
            document,
        })
    }

    /// Read settings from `path` if it is a file, else start empty with
    /// `path` kept as the candidate settings file.
    pub fn load_or_empty(path: NormalizedPath) -> Result<Self> {
        if path.is_file() {
            return Self::load(&path);
        }

        tracing::debug!(path = %path, "no settings file, starting empty");
        Ok(Self {
            candidate: Some(path),
            ..Self::default()
        })
    }

    /// Read settings from `explicit` if given, else from the default file
    /// in the home directory when it exists, else start empty.
    pub fn load_or_default(explicit: Option<&NormalizedPath>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match default_config_path() {
            Ok(path) => Self::load_or_empty(path),
            Err(Error::HomeDirNotFound) => Ok(Self::new()),
            Err(e) => Err(e),
        }
    }

    /// Re-read the settings file.
    ///
    /// Without a file in use, the candidate file is read once it exists.
    /// Otherwise the in-memory document is kept.
    pub fn reload(&mut self) -> Result<()> {
        let path = match (&self.path, &self.candidate) {
            (Some(path), _) => path.clone(),
            (None, Some(candidate)) if candidate.is_file() => candidate.clone(),
            _ => return Ok(()),
        };

        let loaded = Self::load(&path)?;
        self.path = loaded.path;
        self.document = loaded.document;
        Ok(())
    }

    /// The file these settings were read from, if any.
    pub fn config_file_used(&self) -> Option<&NormalizedPath> {
        self.path.as_ref()
    }

    /// Where the settings would be written when no file is in use yet.
    pub fn save_target(&self) -> Result<NormalizedPath> {
        match (&self.path, &self.candidate) {
            (Some(path), _) | (None, Some(path)) => Ok(path.clone()),
            (None, None) => default_config_path(),
        }
    }

    /// Start treating `path` as the settings file in use.
    pub fn track(&mut self, path: NormalizedPath) {
        self.path = Some(path);
    }

    /// Look up a top-level key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.document.get(key)
    }

    /// Set a top-level key, replacing any previous value.
    pub fn set(&mut self, key: &str, value: Value) {
        self.document.insert(Value::String(key.to_string()), value);
    }

    /// The whole settings document.
    pub fn all_settings(&self) -> &Mapping {
        &self.document
    }

    /// Raw entries under [`SPEC_KEY`].
    ///
    /// A missing key, or a value that is not a list, yields no entries.
    pub fn raw_spec_list(&self) -> Vec<Value> {
        match self.get(SPEC_KEY) {
            Some(Value::Sequence(items)) => items.clone(),
            _ => Vec::new(),
        }
    }

    /// Replace the entries under [`SPEC_KEY`].
    pub fn set_spec_list(&mut self, specs: Vec<Value>) {
        self.set(SPEC_KEY, Value::Sequence(specs));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_is_empty() {
        let settings = Settings::new();
        assert!(settings.config_file_used().is_none());
        assert!(settings.all_settings().is_empty());
        assert!(settings.raw_spec_list().is_empty());
    }

    #[test]
    fn test_raw_spec_list_ignores_non_list() {
        let mut settings = Settings::new();
        settings.set(SPEC_KEY, Value::String("oops".into()));
        assert!(settings.raw_spec_list().is_empty());
    }

    #[test]
    fn test_set_spec_list_keeps_other_keys() {
        let mut settings = Settings::new();
        settings.set("context", Value::String("prod".into()));
        settings.set_spec_list(vec![Value::String("a".into())]);

        assert_eq!(settings.all_settings().len(), 2);
        assert_eq!(settings.get("context"), Some(&Value::String("prod".into())));
        assert_eq!(settings.raw_spec_list(), vec![Value::String("a".into())]);
    }

    #[test]
    fn test_save_target_prefers_file_in_use() {
        let mut settings = Settings::new();
        settings.track(NormalizedPath::new("/etc/ksync.yaml"));
        assert_eq!(
            settings.save_target().unwrap(),
            NormalizedPath::new("/etc/ksync.yaml")
        );
    }

    #[test]
    fn test_default_config_path_file_name() {
        if let Ok(path) = default_config_path() {
            assert_eq!(path.file_name(), Some(CONFIG_FILE_NAME));
        }
    }
}
