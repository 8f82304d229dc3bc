//! The capability set the registry needs from a spec

use serde::{Serialize, de::DeserializeOwned};
use std::fmt::Debug;

use crate::Result;

/// A named, declarative description of something to keep in sync.
///
/// The registry never looks inside a spec. It keys specs by [`Spec::name`],
/// detects duplicates through [`Spec::equivalence`], and drives the
/// lifecycle through [`Spec::watch`] and [`Spec::cleanup`]. Specs are
/// decoded from and encoded to the settings file with serde.
pub trait Spec: Serialize + DeserializeOwned {
    /// Projection of the fields that make two specs "the same thing",
    /// regardless of their names.
    type Equivalence: PartialEq + Debug;

    /// Unique key of this spec within a registry.
    fn name(&self) -> &str;

    /// Compute the equivalence projection.
    ///
    /// Called fresh on every comparison; implementations must not cache.
    fn equivalence(&self) -> Self::Equivalence;

    /// Start watching.
    fn watch(&mut self) -> Result<()>;

    /// Release anything held by this spec.
    fn cleanup(&mut self) -> Result<()>;

    /// Whether `other` describes the same thing as this spec.
    fn is_like(&self, other: &Self) -> bool {
        self.equivalence() == other.equivalence()
    }
}
