//! `passvault info` — where the vault lives and how much is in it.

use crate::cli::output;
use crate::cli::{unlock, Cli};
use crate::engine::Engine;
use crate::errors::Result;

/// Execute the `info` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let engine = unlock(cli)?;
    run(&engine)
}

pub fn run(engine: &Engine) -> Result<()> {
    output::info(&format!("Vault location: {}", engine.vault_path().display()));
    output::info(&format!("Number of entries: {}", engine.entry_count()?));
    output::tip(&format!(
        "Keep a backup of {} — without it the vault cannot be decrypted.",
        engine.paths().key_file.display()
    ));
    Ok(())
}
