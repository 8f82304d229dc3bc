//! Command implementations for ksync-cli

pub mod create;
pub mod delete;
pub mod get;
pub mod watch;

pub use create::{CreateArgs, run_create};
pub use delete::run_delete;
pub use get::run_get;
pub use watch::run_watch;

use std::path::Path;

use ksync_core::SpecList;
use ksync_fs::{NormalizedPath, Settings};

use crate::error::Result;

/// Load the settings file and every spec it lists.
///
/// Uses `config` when given, else the default file in the home directory.
pub(crate) fn load_spec_list(config: Option<&Path>) -> Result<SpecList> {
    let explicit = config.map(NormalizedPath::new);
    let settings = Settings::load_or_default(explicit.as_ref())?;
    let mut list = SpecList::new(settings);
    list.update()?;
    Ok(list)
}
