//! Create command implementation

use std::path::Path;

use colored::Colorize;
use ksync_core::{SpecList, SyncSpec};
use ksync_fs::NormalizedPath;

use crate::commands::load_spec_list;
use crate::error::{CliError, Result};

/// Everything the create command needs to build a spec.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateArgs {
    pub local: String,
    pub remote: String,
    pub name: Option<String>,
    pub pod: Option<String>,
    pub selector: Vec<String>,
    pub container: Option<String>,
    pub namespace: String,
    pub reload: bool,
    pub local_read_only: bool,
    pub remote_read_only: bool,
    pub force: bool,
}

/// Run the create command
///
/// Builds a spec from `args`, adds it to the list and saves the settings file.
pub fn run_create(config: Option<&Path>, args: CreateArgs) -> Result<()> {
    let mut list = load_spec_list(config)?;

    let name = match &args.name {
        Some(name) => name.clone(),
        None => generate_name(&list, &args.local),
    };
    let spec = build_spec(&name, &args)?;

    println!("{} Creating spec: {}", "=>".blue().bold(), name.cyan());

    list.create(&name, spec, args.force)?;
    list.save()?;

    println!("{} Spec {} created.", "OK".green().bold(), name.cyan());
    Ok(())
}

fn build_spec(name: &str, args: &CreateArgs) -> Result<SyncSpec> {
    let mut spec = SyncSpec::new(name, &args.local, &args.remote)
        .with_namespace(&args.namespace)
        .with_reload(args.reload)
        .with_read_only(args.local_read_only, args.remote_read_only);

    match (&args.pod, args.selector.is_empty()) {
        (Some(pod), true) => spec = spec.with_pod(pod),
        (None, false) => spec = spec.with_selector(&args.selector),
        (Some(_), false) => {
            return Err(CliError::user("--pod and --selector cannot be used together"));
        }
        (None, true) => return Err(CliError::user("one of --pod or --selector is required")),
    }

    if let Some(container) = &args.container {
        spec = spec.with_container(container);
    }

    Ok(spec)
}

/// Pick `<dir>-<n>` with the smallest `n` that is not already taken.
fn generate_name(list: &SpecList, local: &str) -> String {
    let base = NormalizedPath::new(local)
        .file_name()
        .filter(|name| *name != "." && *name != "..")
        .map(|name| name.to_lowercase())
        .unwrap_or_else(|| "spec".to_string());

    let mut n = 1;
    loop {
        let candidate = format!("{base}-{n}");
        if !list.has(&candidate) {
            return candidate;
        }
        n += 1;
    }
}
