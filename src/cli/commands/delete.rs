//! `passvault delete` — remove one entry from the vault.

use crate::cli::output;
use crate::cli::{confirm, entry_index, unlock, Cli};
use crate::engine::Engine;
use crate::errors::Result;

/// Execute the `delete` command.
pub fn execute(cli: &Cli, number: usize, force: bool) -> Result<()> {
    let mut engine = unlock(cli)?;
    run(&mut engine, number, force)
}

pub fn run(engine: &mut Engine, number: usize, force: bool) -> Result<()> {
    let index = entry_index(engine, number)?;
    let site = engine.list_entries()?[index].site.clone();

    // Unless --force is set, ask for confirmation before deleting.
    if !force && !confirm(&format!("Delete password for {site}?"))? {
        output::info("Cancelled.");
        return Ok(());
    }

    engine.delete_entry(index)?;
    output::success(&format!("Deleted password for {site}"));
    Ok(())
}
