//! Shared test utilities for the ksync workspace.
//!
//! This crate provides settings-file fixtures so crate test suites do not
//! each hand-roll temp directories and YAML. It is a dev-dependency only
//! and never published.
//!
//! # Modules
//!
//! - [`config`]: [`TestConfig`] builder for a settings file in a temp dir

pub mod config;

pub use config::{TestConfig, sync_spec_yaml};
