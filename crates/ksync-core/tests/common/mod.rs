//! Fakes shared by the ksync-core integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use ksync_core::{ConfigProvider, Error, Result, Spec};
use ksync_fs::{NormalizedPath, SPEC_KEY};
use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};

/// A lifecycle call recorded by [`FakeSpec`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Watch(String),
    Cleanup(String),
}

thread_local! {
    static CALLS: RefCell<Vec<Call>> = const { RefCell::new(Vec::new()) };
}

/// Calls recorded on this test thread so far.
pub fn calls() -> Vec<Call> {
    CALLS.with(|c| c.borrow().clone())
}

/// Number of cleanup calls recorded for `name` on this test thread.
pub fn cleanup_count(name: &str) -> usize {
    calls()
        .iter()
        .filter(|c| matches!(c, Call::Cleanup(n) if n == name))
        .count()
}

/// Number of watch calls recorded for `name` on this test thread.
pub fn watch_count(name: &str) -> usize {
    calls()
        .iter()
        .filter(|c| matches!(c, Call::Watch(n) if n == name))
        .count()
}

/// A spec that records its lifecycle calls instead of doing any work.
///
/// `target` is the equivalence projection; `body` is carried along but
/// ignored for likeness, so tests can tell two versions of a spec apart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FakeSpec {
    pub name: String,
    #[serde(default)]
    pub target: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub fail_watch: bool,
    #[serde(default)]
    pub fail_cleanup: bool,
}

impl FakeSpec {
    pub fn new(name: &str, target: &str) -> Self {
        Self {
            name: name.into(),
            target: target.into(),
            body: String::new(),
            fail_watch: false,
            fail_cleanup: false,
        }
    }

    pub fn with_body(mut self, body: &str) -> Self {
        self.body = body.into();
        self
    }

    pub fn failing_watch(mut self) -> Self {
        self.fail_watch = true;
        self
    }

    pub fn failing_cleanup(mut self) -> Self {
        self.fail_cleanup = true;
        self
    }
}

impl Spec for FakeSpec {
    type Equivalence = String;

    fn name(&self) -> &str {
        &self.name
    }

    fn equivalence(&self) -> String {
        self.target.clone()
    }

    fn watch(&mut self) -> Result<()> {
        CALLS.with(|c| c.borrow_mut().push(Call::Watch(self.name.clone())));
        if self.fail_watch {
            return Err(Error::Watch {
                name: self.name.clone(),
                message: "fake watch failure".into(),
            });
        }
        Ok(())
    }

    fn cleanup(&mut self) -> Result<()> {
        CALLS.with(|c| c.borrow_mut().push(Call::Cleanup(self.name.clone())));
        if self.fail_cleanup {
            return Err(Error::Cleanup {
                name: self.name.clone(),
                message: "fake cleanup failure".into(),
            });
        }
        Ok(())
    }
}

/// A file write captured by [`MemoryProvider`].
#[derive(Debug, Clone)]
pub struct Written {
    pub path: NormalizedPath,
    pub content: Vec<u8>,
    pub mode: u32,
}

/// In-memory provider that captures writes instead of touching disk.
#[derive(Debug, Default)]
pub struct MemoryProvider {
    pub path: Option<NormalizedPath>,
    pub document: Mapping,
    pub writes: Rc<RefCell<Vec<Written>>>,
}

impl MemoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_specs(specs: &[FakeSpec]) -> Self {
        let mut provider = Self::new();
        provider.set_spec_list(to_values(specs));
        provider
    }

    pub fn at_path(mut self, path: &str) -> Self {
        self.path = Some(NormalizedPath::new(path));
        self
    }
}

impl ConfigProvider for MemoryProvider {
    fn raw_spec_list(&self) -> Vec<Value> {
        match self.document.get(SPEC_KEY) {
            Some(Value::Sequence(items)) => items.clone(),
            _ => Vec::new(),
        }
    }

    fn config_file_used(&self) -> Option<NormalizedPath> {
        self.path.clone()
    }

    fn set_spec_list(&mut self, specs: Vec<Value>) {
        self.document
            .insert(Value::String(SPEC_KEY.into()), Value::Sequence(specs));
    }

    fn all_settings(&self) -> &Mapping {
        &self.document
    }

    fn write_file(&self, path: &NormalizedPath, content: &[u8], mode: u32) -> Result<()> {
        self.writes.borrow_mut().push(Written {
            path: path.clone(),
            content: content.to_vec(),
            mode,
        });
        Ok(())
    }

    fn save_target(&self) -> Result<NormalizedPath> {
        Ok(NormalizedPath::new("/home/tester/.ksync.yaml"))
    }

    fn track(&mut self, path: NormalizedPath) {
        self.path = Some(path);
    }
}

pub fn to_values(specs: &[FakeSpec]) -> Vec<Value> {
    specs
        .iter()
        .map(|s| serde_yaml::to_value(s).unwrap())
        .collect()
}
