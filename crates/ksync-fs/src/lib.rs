//! Settings file access for ksync
//!
//! Provides the YAML settings document that backs the spec registry,
//! together with path handling and plain file I/O.

pub mod config;
pub mod error;
pub mod io;
pub mod path;
pub mod settings;

pub use config::ConfigStore;
pub use error::{Error, Result};
pub use path::NormalizedPath;
pub use settings::{CONFIG_FILE_NAME, SPEC_KEY, Settings, default_config_path};
