//! Configuration provider abstraction
//!
//! The registry reads raw spec records from, and saves the settings
//! document through, a `ConfigProvider`. [`ksync_fs::Settings`] is the
//! file-backed implementation; tests substitute in-memory ones.

use ksync_fs::{ConfigStore, NormalizedPath, Settings, io};
use serde_yaml::{Mapping, Value};

use crate::Result;

/// Source of spec records and sink for the saved settings document.
pub trait ConfigProvider: std::fmt::Debug {
    /// Raw, untyped entries of the spec list.
    fn raw_spec_list(&self) -> Vec<Value>;

    /// The settings file currently in use, if one has been established.
    fn config_file_used(&self) -> Option<NormalizedPath>;

    /// Replace the spec list in the settings document.
    fn set_spec_list(&mut self, specs: Vec<Value>);

    /// The whole settings document, specs included.
    fn all_settings(&self) -> &Mapping;

    /// Re-read the backing store. Providers without one keep their state.
    fn reload(&mut self) -> Result<()> {
        Ok(())
    }

    /// Serialize a settings document to text.
    fn marshal(&self, settings: &Mapping) -> Result<Vec<u8>> {
        Ok(ConfigStore::new().to_bytes(settings)?)
    }

    /// Write `content` to `path`, overwriting it, with permission bits `mode`.
    fn write_file(&self, path: &NormalizedPath, content: &[u8], mode: u32) -> Result<()> {
        Ok(io::write_file(path, content, mode)?)
    }

    /// Where to save when no settings file is in use: `~/.ksync.yaml`.
    fn save_target(&self) -> Result<NormalizedPath> {
        Ok(ksync_fs::default_config_path()?)
    }

    /// Start treating `path` as the settings file in use.
    fn track(&mut self, _path: NormalizedPath) {}
}

impl ConfigProvider for Settings {
    fn raw_spec_list(&self) -> Vec<Value> {
        Settings::raw_spec_list(self)
    }

    fn config_file_used(&self) -> Option<NormalizedPath> {
        Settings::config_file_used(self).cloned()
    }

    fn set_spec_list(&mut self, specs: Vec<Value>) {
        Settings::set_spec_list(self, specs);
    }

    fn all_settings(&self) -> &Mapping {
        Settings::all_settings(self)
    }

    fn reload(&mut self) -> Result<()> {
        Ok(Settings::reload(self)?)
    }

    fn save_target(&self) -> Result<NormalizedPath> {
        Ok(Settings::save_target(self)?)
    }

    fn track(&mut self, path: NormalizedPath) {
        Settings::track(self, path);
    }
}
