//! Watch command implementation
//!
//! Runs reconciliation passes against the settings file: re-read it,
//! adopt new specs, clean up removed ones, then watch what is left.

use std::path::Path;
use std::thread;
use std::time::Duration;

use colored::Colorize;
use ksync_core::SpecList;

use crate::commands::load_spec_list;
use crate::error::Result;

/// Run the watch command
///
/// With `interval`, passes repeat until one fails; otherwise (or with
/// `once`) a single pass runs.
pub fn run_watch(config: Option<&Path>, interval: Option<u64>, once: bool) -> Result<()> {
    let mut list = load_spec_list(config)?;
    reconcile(&mut list)?;
    report(&list);

    let Some(secs) = interval.filter(|_| !once) else {
        return Ok(());
    };

    loop {
        thread::sleep(Duration::from_secs(secs));
        list.provider_mut().reload()?;
        reconcile(&mut list)?;
    }
}

/// One pass: reconcile with the provider, then watch everything tracked.
fn reconcile(list: &mut SpecList) -> Result<()> {
    list.update()?;
    list.watch()?;

    let fields = list.fields();
    tracing::info!(
        count = %fields["count"],
        names = %fields["names"],
        "reconciled"
    );
    Ok(())
}

fn report(list: &SpecList) {
    if list.is_empty() {
        println!("{} No specs to watch.", "=>".blue().bold());
        return;
    }

    for name in list.names() {
        println!("{} Watching {}", "OK".green().bold(), name.cyan());
    }
}
