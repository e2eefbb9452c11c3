//! `passvault delete-all` — wipe every entry from the vault.

use crate::cli::output;
use crate::cli::{confirm, unlock, Cli};
use crate::engine::Engine;
use crate::errors::Result;

/// Execute the `delete-all` command.
pub fn execute(cli: &Cli, force: bool) -> Result<()> {
    let mut engine = unlock(cli)?;
    run(&mut engine, force)
}

pub fn run(engine: &mut Engine, force: bool) -> Result<()> {
    if !force {
        output::warning("DANGER! This is irreversible.");
        if !confirm("Delete ALL passwords in the vault?")? {
            output::info("Cancelled.");
            return Ok(());
        }
    }

    engine.delete_all()?;
    output::success("All passwords have been deleted.");
    Ok(())
}
