//! The spec registry
//!
//! `SpecList` holds every known spec by name and reconciles that set
//! against the settings file. Reconciliation only ever adds specs that are
//! new and removes specs that disappeared; a spec that is already tracked
//! is never replaced, so editing its definition on disk does not tear down
//! a running watch.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use ksync_fs::io::CONFIG_FILE_MODE;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::{ConfigProvider, Error, Result, Spec, SyncSpec};

/// Load every spec listed by `provider`, keyed by name.
///
/// Each raw record is decoded strictly; the first record that fails to
/// decode aborts the whole load. Later records win when names repeat.
pub fn load_all_specs<S: Spec>(provider: &dyn ConfigProvider) -> Result<HashMap<String, S>> {
    let mut items = HashMap::new();

    for (index, raw) in provider.raw_spec_list().into_iter().enumerate() {
        let spec: S =
            serde_yaml::from_value(raw).map_err(|source| Error::Decode { index, source })?;

        // TODO: validate decoded specs (pod/selector exclusivity, paths) before adopting them
        items.insert(spec.name().to_string(), spec);
    }

    Ok(items)
}

/// Named collection of specs backed by a [`ConfigProvider`].
#[derive(Debug)]
pub struct SpecList<S: Spec = SyncSpec> {
    items: HashMap<String, S>,
    provider: Box<dyn ConfigProvider>,
}

impl<S: Spec> SpecList<S> {
    /// Create an empty list reading from and saving through `provider`.
    pub fn new(provider: impl ConfigProvider + 'static) -> Self {
        Self {
            items: HashMap::new(),
            provider: Box::new(provider),
        }
    }

    /// All tracked specs by name.
    pub fn items(&self) -> &HashMap<String, S> {
        &self.items
    }

    /// Get a spec by name.
    pub fn get(&self, name: &str) -> Option<&S> {
        self.items.get(name)
    }

    /// Number of tracked specs.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if no specs are tracked.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Tracked names (sorted).
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.items.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }

    /// The provider specs are loaded from and saved through.
    pub fn provider(&self) -> &dyn ConfigProvider {
        self.provider.as_ref()
    }

    /// Mutable access to the provider, e.g. to reload it before [`Self::update`].
    pub fn provider_mut(&mut self) -> &mut dyn ConfigProvider {
        self.provider.as_mut()
    }

    /// Bring the list up to date with the provider.
    ///
    /// Specs that are new upstream are adopted. Specs that are gone upstream
    /// are cleaned up and dropped. Specs present on both sides keep their
    /// in-memory value. The first cleanup failure is returned as-is and the
    /// remaining removals are left for a later call.
    pub fn update(&mut self) -> Result<()> {
        let latest = load_all_specs::<S>(self.provider.as_ref())?;

        let removed: Vec<String> = self
            .items
            .keys()
            .filter(|name| !latest.contains_key(*name))
            .cloned()
            .collect();

        for (name, spec) in latest {
            if self.items.contains_key(&name) {
                debug!(name = %name, "already tracked, keeping in-memory spec");
                continue;
            }
            info!(name = %name, "adopting new spec");
            self.items.insert(name, spec);
        }

        for name in removed {
            if let Some(spec) = self.items.get_mut(&name) {
                if let Err(e) = spec.cleanup() {
                    warn!(name = %name, error = %e, "cleanup failed, stopping reconciliation");
                    return Err(e);
                }
            }
            info!(name = %name, "removed spec");
            self.items.remove(&name);
        }

        Ok(())
    }

    /// Start watching every tracked spec, stopping at the first failure.
    pub fn watch(&mut self) -> Result<()> {
        for (name, spec) in self.items.iter_mut() {
            debug!(name = %name, "starting watch");
            spec.watch()?;
        }
        Ok(())
    }

    /// Add `spec` under `name`.
    ///
    /// Unless `force` is set, fails if the name is taken or if a tracked
    /// spec is equivalent to `spec`. With `force` the spec is inserted
    /// unconditionally, replacing any spec already under `name`.
    pub fn create(&mut self, name: &str, spec: S, force: bool) -> Result<()> {
        if !force {
            if self.has(name) {
                return Err(Error::NameExists {
                    name: name.to_string(),
                });
            }

            if let Some(existing) = self.find_like(&spec) {
                return Err(Error::SimilarSpecExists {
                    existing: existing.to_string(),
                });
            }
        }

        debug!(name = %name, force, "creating spec");
        self.items.insert(name.to_string(), spec);
        Ok(())
    }

    /// Remove the spec under `name`.
    ///
    /// The spec is dropped without calling [`Spec::cleanup`]; callers that
    /// delete a running spec are expected to have stopped it themselves.
    pub fn delete(&mut self, name: &str) -> Result<()> {
        if self.items.remove(name).is_none() {
            return Err(Error::NotFound {
                name: name.to_string(),
            });
        }

        debug!(name = %name, "deleted spec");
        Ok(())
    }

    /// Write every tracked spec back to the settings file.
    ///
    /// The target is the provider's current settings file, or
    /// `~/.ksync.yaml` when none is in use, which the provider then tracks.
    /// The whole settings document is rewritten in place, unrelated keys
    /// included.
    pub fn save(&mut self) -> Result<()> {
        let tracked = self.provider.config_file_used();
        let path = match &tracked {
            Some(path) => path.clone(),
            None => self.provider.save_target()?,
        };

        debug!(path = %path, "writing config file");

        let specs = self
            .items
            .values()
            .map(serde_yaml::to_value)
            .collect::<std::result::Result<Vec<_>, _>>()?;
        let count = specs.len();
        self.provider.set_spec_list(specs);

        let content = self.provider.marshal(self.provider.all_settings())?;
        self.provider.write_file(&path, &content, CONFIG_FILE_MODE)?;
        if tracked.is_none() {
            self.provider.track(path.clone());
        }

        info!(path = %path, count, "saved specs");
        Ok(())
    }

    /// Check if a spec is tracked under `name`.
    pub fn has(&self, name: &str) -> bool {
        self.items.contains_key(name)
    }

    /// Check if any tracked spec is equivalent to `target`, whatever its name.
    pub fn has_like(&self, target: &S) -> bool {
        self.find_like(target).is_some()
    }

    fn find_like(&self, target: &S) -> Option<&str> {
        self.items
            .iter()
            .find(|(_, spec)| spec.is_like(target))
            .map(|(name, _)| name.as_str())
    }

    /// Structured fields describing the list, for log spans.
    pub fn fields(&self) -> BTreeMap<&'static str, String> {
        BTreeMap::from([
            ("count", self.items.len().to_string()),
            ("names", self.names().join(",")),
        ])
    }
}

#[derive(Serialize)]
struct SpecListView<'a, S> {
    items: BTreeMap<&'a str, &'a S>,
}

impl<S: Spec> fmt::Display for SpecList<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = SpecListView {
            items: self.items.iter().map(|(k, v)| (k.as_str(), v)).collect(),
        };
        let text = serde_yaml::to_string(&view).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}
