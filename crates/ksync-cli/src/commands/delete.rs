//! Delete command implementation

use std::path::Path;

use colored::Colorize;

use crate::commands::load_spec_list;
use crate::error::Result;

/// Run the delete command
///
/// Removes every named spec and saves once. Nothing is saved if any
/// name is unknown.
pub fn run_delete(config: Option<&Path>, names: &[String]) -> Result<()> {
    let mut list = load_spec_list(config)?;

    for name in names {
        println!("{} Deleting spec: {}", "=>".blue().bold(), name.cyan());
        list.delete(name)?;
    }

    list.save()?;

    println!(
        "{} Deleted {} spec(s).",
        "OK".green().bold(),
        names.len()
    );
    Ok(())
}
