//! Spec registry and reconciliation for ksync
//!
//! This crate owns the named collection of sync specs and keeps it in step
//! with the settings file:
//!
//! - **Spec**: the capability set the registry needs from a spec (name,
//!   equivalence projection, watch and cleanup hooks)
//! - **SyncSpec**: the file-sync spec stored in the settings file
//! - **ConfigProvider**: where raw spec records come from and where saved
//!   settings go
//! - **SpecList**: the registry itself, with reconcile, watch, create,
//!   delete and save
//!
//! # Architecture
//!
//! ```text
//!        CLI / refresher
//!              |
//!          ksync-core
//!              |
//!          ksync-fs
//! ```

pub mod error;
pub mod provider;
pub mod spec;
pub mod spec_list;
pub mod sync_spec;

pub use error::{Error, Result};
pub use provider::ConfigProvider;
pub use spec::Spec;
pub use spec_list::{SpecList, load_all_specs};
pub use sync_spec::{DEFAULT_NAMESPACE, SpecStatus, SyncSpec, SyncSpecEquivalence};
