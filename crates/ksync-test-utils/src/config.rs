//! [`TestConfig`] builder for settings-file test scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// File name used for the settings file inside the fixture directory.
const FILE_NAME: &str = "ksync.yaml";

/// Render one `spec` list entry for a pod-targeted sync spec.
///
/// The entry is indented for use directly under a top-level `spec:` key.
pub fn sync_spec_yaml(name: &str, local_path: &str, remote_path: &str, pod: &str) -> String {
    format!(
        "  - name: {name}\n    localPath: {local_path}\n    remotePath: {remote_path}\n    pod: {pod}\n"
    )
}

/// A temporary directory holding a ksync settings file.
///
/// # Example
///
/// ```rust,no_run
/// use ksync_test_utils::{TestConfig, sync_spec_yaml};
///
/// let config = TestConfig::new();
/// config.write_specs(&[sync_spec_yaml("app", "/src", "/app", "web-0")]);
/// config.assert_contains("name: app");
/// ```
pub struct TestConfig {
    temp_dir: TempDir,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl TestConfig {
    /// Create an empty temporary directory. No settings file is written yet.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path of the settings file inside the fixture directory.
    pub fn path(&self) -> PathBuf {
        self.root().join(FILE_NAME)
    }

    /// Write raw YAML to the settings file, replacing it.
    pub fn write(&self, content: &str) {
        fs::write(self.path(), content).unwrap();
    }

    /// Write a settings file whose `spec` list holds the given entries.
    ///
    /// Entries are expected in the shape produced by [`sync_spec_yaml`].
    pub fn write_specs(&self, entries: &[String]) {
        self.write_specs_with(entries, "");
    }

    /// Like [`Self::write_specs`], prefixed with extra top-level YAML.
    pub fn write_specs_with(&self, entries: &[String], extra: &str) {
        let mut content = extra.to_string();
        if entries.is_empty() {
            content.push_str("spec: []\n");
        } else {
            content.push_str("spec:\n");
            for entry in entries {
                content.push_str(entry);
            }
        }
        self.write(&content);
    }

    /// Read the settings file back.
    ///
    /// # Panics
    /// Panics if the file does not exist.
    pub fn read(&self) -> String {
        fs::read_to_string(self.path())
            .unwrap_or_else(|_| panic!("Could not read file: {}", self.path().display()))
    }

    /// Assert that the settings file contains `content`.
    ///
    /// # Panics
    /// Panics if the file cannot be read or does not contain `content`.
    pub fn assert_contains(&self, content: &str) {
        let file_content = self.read();
        assert!(
            file_content.contains(content),
            "File {} does not contain expected content.\nExpected: {}\nActual: {}",
            self.path().display(),
            content,
            file_content
        );
    }

    /// Assert that the settings file does **not** contain `content`.
    ///
    /// # Panics
    /// Panics if the file cannot be read or contains `content`.
    pub fn assert_not_contains(&self, content: &str) {
        let file_content = self.read();
        assert!(
            !file_content.contains(content),
            "File {} unexpectedly contains: {}\nActual: {}",
            self.path().display(),
            content,
            file_content
        );
    }
}
