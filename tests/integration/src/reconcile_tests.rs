//! End-to-end reconciliation against a real settings file.
//!
//! These tests drive `SpecList` the way a periodic refresher does:
//! edit the file, reload the settings, update, watch.

use ksync_core::{SpecList, SyncSpec};
use ksync_fs::{NormalizedPath, Settings};
use ksync_test_utils::{TestConfig, sync_spec_yaml};
use pretty_assertions::assert_eq;

fn open(config: &TestConfig) -> SpecList {
    let settings = Settings::load(&NormalizedPath::new(config.path())).unwrap();
    SpecList::new(settings)
}

fn refresh(list: &mut SpecList) {
    list.provider_mut().reload().unwrap();
    list.update().unwrap();
    list.watch().unwrap();
}

#[test]
fn test_file_edits_drive_adds_and_removals() {
    let config = TestConfig::new();
    config.write_specs(&[
        sync_spec_yaml("a", "/src/a", "/app", "web-0"),
        sync_spec_yaml("b", "/src/b", "/app", "web-1"),
    ]);
    let mut list = open(&config);

    refresh(&mut list);
    assert_eq!(list.names(), vec!["a", "b"]);
    assert!(list.items().values().all(SyncSpec::is_watching));

    config.write_specs(&[sync_spec_yaml("b", "/src/b", "/app", "web-1")]);
    refresh(&mut list);

    assert_eq!(list.names(), vec!["b"]);
    assert!(list.get("b").unwrap().is_watching());
}

#[test]
fn test_edited_body_does_not_restart_watch() {
    let config = TestConfig::new();
    config.write_specs(&[sync_spec_yaml("a", "/src/a", "/app", "web-0")]);
    let mut list = open(&config);
    refresh(&mut list);
    let started = list.get("a").unwrap().status();

    config.write_specs(&[sync_spec_yaml("a", "/src/elsewhere", "/srv", "web-9")]);
    refresh(&mut list);

    let spec = list.get("a").unwrap();
    assert_eq!(spec.local_path, "/src/a");
    assert_eq!(spec.status(), started);
}

#[test]
fn test_create_save_and_refresh_roundtrip() {
    let config = TestConfig::new();
    config.write_specs_with(&[], "context: staging\n");
    let mut list = open(&config);
    list.update().unwrap();

    list.create(
        "api",
        SyncSpec::new("api", "/src/api", "/srv").with_selector(["app=api"]),
        false,
    )
    .unwrap();
    list.save().unwrap();

    let mut reopened = open(&config);
    refresh(&mut reopened);

    assert_eq!(reopened.names(), vec!["api"]);
    assert_eq!(
        reopened.get("api").unwrap().selector,
        vec!["app=api".to_string()]
    );
    config.assert_contains("context: staging");
}

#[test]
fn test_broken_file_keeps_current_specs() {
    let config = TestConfig::new();
    config.write_specs(&[sync_spec_yaml("a", "/src/a", "/app", "web-0")]);
    let mut list = open(&config);
    refresh(&mut list);

    config.write("spec:\n  - name: a\n    localDir: /typo\n");
    list.provider_mut().reload().unwrap();
    assert!(list.update().is_err());

    assert_eq!(list.names(), vec!["a"]);
    assert!(list.get("a").unwrap().is_watching());
}

#[test]
fn test_display_shows_full_state() {
    let config = TestConfig::new();
    config.write_specs(&[sync_spec_yaml("a", "/src/a", "/app", "web-0")]);
    let mut list = open(&config);
    list.update().unwrap();

    let rendered = list.to_string();
    let doc: serde_yaml::Value = serde_yaml::from_str(&rendered).unwrap();

    assert_eq!(
        doc["items"]["a"]["localPath"].as_str(),
        Some("/src/a")
    );
}

#[test]
fn test_sample_fixture_loads() {
    let fixture = concat!(env!("CARGO_MANIFEST_DIR"), "/../../test-fixtures/configs/ksync.yaml");
    let config = TestConfig::new();
    config.write(&std::fs::read_to_string(fixture).unwrap());
    let mut list = open(&config);

    list.update().unwrap();

    assert_eq!(list.names(), vec!["api", "frontend"]);
    let frontend = list.get("frontend").unwrap();
    assert_eq!(frontend.container_name, "nginx");
    assert!(frontend.reload);
    let api = list.get("api").unwrap();
    assert_eq!(api.selector.len(), 2);
    assert!(api.remote_read_only);
    assert!(!list.has_like(&SyncSpec::new("x", "/home/dev/api", "/srv/api")));
}
