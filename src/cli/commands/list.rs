//! `passvault list` — display all entries in a table.

use crate::cli::output;
use crate::cli::{unlock, Cli};
use crate::engine::Engine;
use crate::errors::Result;

/// Execute the `list` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let engine = unlock(cli)?;
    run(&engine)
}

pub fn run(engine: &Engine) -> Result<()> {
    let entries = engine.list_entries()?;
    output::info(&format!("{} saved password(s)", entries.len()));
    output::print_entries_table(entries);
    Ok(())
}
