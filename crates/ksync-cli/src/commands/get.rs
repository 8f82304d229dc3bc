//! Get command implementation

use std::path::Path;

use colored::Colorize;
use ksync_core::SyncSpec;

use crate::commands::load_spec_list;
use crate::error::Result;

/// Run the get command
///
/// Prints every spec in the settings file, sorted by name.
pub fn run_get(config: Option<&Path>, json: bool) -> Result<()> {
    let list = load_spec_list(config)?;
    let specs: Vec<&SyncSpec> = list
        .names()
        .into_iter()
        .filter_map(|name| list.get(name))
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&specs)?);
        return Ok(());
    }

    if specs.is_empty() {
        println!(
            "No specs configured. Use {} to add one.",
            "ksync create".cyan()
        );
        return Ok(());
    }

    println!(
        "{:<20} {:<28} {:<20} {}",
        "NAME".bold(),
        "LOCAL".bold(),
        "REMOTE".bold(),
        "TARGET".bold()
    );
    for spec in specs {
        println!(
            "{:<20} {:<28} {:<20} {}",
            spec.name.green(),
            spec.local_path,
            spec.remote_path,
            target(spec).dimmed()
        );
    }

    Ok(())
}

/// Human-readable description of which containers a spec syncs with.
fn target(spec: &SyncSpec) -> String {
    let pods = if spec.pod.is_empty() {
        spec.selector.join(",")
    } else {
        format!("pod/{}", spec.pod)
    };

    let mut target = if spec.namespace.is_empty() {
        pods
    } else {
        format!("{}/{}", spec.namespace, pods)
    };
    if !spec.container_name.is_empty() {
        target.push_str(&format!(" ({})", spec.container_name));
    }
    target
}
