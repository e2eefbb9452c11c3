//! `passvault copy` — put a password on the clipboard for a short while.
//!
//! The process stays in the foreground until the clear fires, since on
//! most desktops the clipboard contents are served by the copying process.

use std::time::Instant;

use crate::cli::output;
use crate::cli::{entry_index, unlock, Cli};
use crate::clipboard::{ClearOutcome, ClipboardBackend};
use crate::engine::Engine;
use crate::errors::Result;

/// Execute the `copy` command.
pub fn execute(cli: &Cli, number: usize) -> Result<()> {
    let mut engine = unlock(cli)?;
    run_and_wait(&mut engine, number)
}

/// Copy, then block until the scheduled clear has run.
pub fn run_and_wait<B: ClipboardBackend>(engine: &mut Engine<B>, number: usize) -> Result<()> {
    run(engine, number)?;
    for outcome in engine.wait_for_clears()? {
        report(outcome);
    }
    Ok(())
}

/// Copy and schedule the clear; does not wait for it.
pub fn run<B: ClipboardBackend>(engine: &mut Engine<B>, number: usize) -> Result<()> {
    let index = entry_index(engine, number)?;
    let clear_at = engine.copy_secret(index)?;
    let site = &engine.list_entries()?[index].site;

    let secs = (clear_at.saturating_duration_since(Instant::now()).as_millis() + 999) / 1000;
    output::success(&format!(
        "Copied password for {site} — clipboard clears in {secs}s"
    ));
    Ok(())
}

pub fn report(outcome: ClearOutcome) {
    match outcome {
        ClearOutcome::Cleared => output::info("Clipboard cleared."),
        ClearOutcome::Replaced => output::info("Clipboard changed since copy; left as is."),
        ClearOutcome::Superseded => {}
    }
}
