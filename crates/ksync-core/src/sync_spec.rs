//! File-sync spec stored in the settings file
//!
//! A `SyncSpec` pairs a local directory with a path inside one or more
//! remote containers, picked either by pod name or by label selector.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Error, Result, Spec};

/// Namespace used when a spec leaves it empty.
pub const DEFAULT_NAMESPACE: &str = "default";

/// Runtime state of a spec. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpecStatus {
    /// Not watching anything
    #[default]
    Stopped,
    /// Watching since the given time
    Watching { since: DateTime<Utc> },
}

/// A single sync definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SyncSpec {
    /// Unique name of this spec
    pub name: String,

    /// Container to sync with inside the matched pods (empty = first container)
    #[serde(default)]
    pub container_name: String,

    /// Pod to sync with, exclusive with `selector`
    #[serde(default)]
    pub pod: String,

    /// Label selectors picking the pods to sync with
    #[serde(default)]
    pub selector: Vec<String>,

    /// Namespace the pods live in (empty = [`DEFAULT_NAMESPACE`])
    #[serde(default)]
    pub namespace: String,

    /// Directory on the local machine
    #[serde(default)]
    pub local_path: String,

    /// Directory inside the container
    #[serde(default)]
    pub remote_path: String,

    /// Restart the container when files change
    #[serde(default)]
    pub reload: bool,

    /// Never push local changes
    #[serde(default)]
    pub local_read_only: bool,

    /// Never pull remote changes
    #[serde(default)]
    pub remote_read_only: bool,

    #[serde(skip)]
    status: SpecStatus,
}

/// The fields that decide whether two sync specs target the same thing.
///
/// Flags such as `reload` and the read-only switches are left out: two
/// specs syncing the same directories are duplicates however they behave.
/// An empty namespace compares as [`DEFAULT_NAMESPACE`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncSpecEquivalence {
    pub container_name: String,
    pub pod: String,
    pub selector: Vec<String>,
    pub namespace: String,
    pub local_path: String,
    pub remote_path: String,
}

impl SyncSpec {
    /// Create a spec syncing `local_path` with `remote_path`.
    pub fn new(
        name: impl Into<String>,
        local_path: impl Into<String>,
        remote_path: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            container_name: String::new(),
            pod: String::new(),
            selector: Vec::new(),
            namespace: String::new(),
            local_path: local_path.into(),
            remote_path: remote_path.into(),
            reload: false,
            local_read_only: false,
            remote_read_only: false,
            status: SpecStatus::Stopped,
        }
    }

    /// Target a single pod (builder pattern).
    pub fn with_pod(mut self, pod: impl Into<String>) -> Self {
        self.pod = pod.into();
        self
    }

    /// Target the pods matching these label selectors (builder pattern).
    pub fn with_selector<I, T>(mut self, selector: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.selector = selector.into_iter().map(Into::into).collect();
        self
    }

    /// Set the container name (builder pattern).
    pub fn with_container(mut self, container: impl Into<String>) -> Self {
        self.container_name = container.into();
        self
    }

    /// Set the namespace (builder pattern).
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Set whether the container reloads on change (builder pattern).
    pub fn with_reload(mut self, reload: bool) -> Self {
        self.reload = reload;
        self
    }

    /// Set the read-only switches (builder pattern).
    pub fn with_read_only(mut self, local: bool, remote: bool) -> Self {
        self.local_read_only = local;
        self.remote_read_only = remote;
        self
    }

    /// Current runtime state.
    pub fn status(&self) -> SpecStatus {
        self.status
    }

    /// Check if the spec is currently watching.
    pub fn is_watching(&self) -> bool {
        matches!(self.status, SpecStatus::Watching { .. })
    }
}

impl Spec for SyncSpec {
    type Equivalence = SyncSpecEquivalence;

    fn name(&self) -> &str {
        &self.name
    }

    fn equivalence(&self) -> SyncSpecEquivalence {
        SyncSpecEquivalence {
            container_name: self.container_name.clone(),
            pod: self.pod.clone(),
            selector: self.selector.clone(),
            namespace: if self.namespace.is_empty() {
                DEFAULT_NAMESPACE.to_string()
            } else {
                self.namespace.clone()
            },
            local_path: self.local_path.clone(),
            remote_path: self.remote_path.clone(),
        }
    }

    fn watch(&mut self) -> Result<()> {
        if self.local_path.is_empty() {
            return Err(Error::Watch {
                name: self.name.clone(),
                message: "local path is empty".into(),
            });
        }

        if let SpecStatus::Watching { since } = self.status {
            tracing::debug!(name = %self.name, %since, "already watching");
            return Ok(());
        }

        let since = Utc::now();
        self.status = SpecStatus::Watching { since };
        tracing::info!(
            name = %self.name,
            local_path = %self.local_path,
            remote_path = %self.remote_path,
            "watching"
        );
        Ok(())
    }

    fn cleanup(&mut self) -> Result<()> {
        if self.status == SpecStatus::Stopped {
            tracing::debug!(name = %self.name, "nothing to clean up");
            return Ok(());
        }

        self.status = SpecStatus::Stopped;
        tracing::info!(name = %self.name, "stopped watching");
        Ok(())
    }
}
