//! `passvault add` — save a new site / username / password entry.

use std::io::{self, IsTerminal, Read};

use zeroize::Zeroizing;

use crate::cli::output;
use crate::cli::{password_from_env, prompt_error, unlock, Cli, PASSWORD_ENV};
use crate::engine::Engine;
use crate::errors::{PassVaultError, Result};
use crate::vault::assess;

/// Execute the `add` command.
pub fn execute(cli: &Cli, site: &str, username: &str, secret: Option<&str>) -> Result<()> {
    // Determine the password from one of three sources.
    let secret = if let Some(s) = secret {
        // Source 1: Inline value on the command line.
        output::warning("Password provided on command line — it may appear in shell history.");
        Zeroizing::new(s.to_string())
    } else if !io::stdin().is_terminal() {
        // Source 2: Piped input (stdin is not a terminal). The master
        // password can no longer be prompted for once stdin is consumed.
        if password_from_env().is_none() {
            return Err(PassVaultError::CommandFailed(format!(
                "a password piped on stdin needs {PASSWORD_ENV} set for the master password"
            )));
        }
        let mut buf = Zeroizing::new(String::new());
        io::stdin().read_to_string(&mut buf)?;
        Zeroizing::new(buf.trim_end_matches(&['\r', '\n'][..]).to_string())
    } else {
        // Source 3: Interactive secure prompt (default).
        prompt_secret(site)?
    };

    let mut engine = unlock(cli)?;
    run(&mut engine, site, username, &secret)
}

pub fn run(engine: &mut Engine, site: &str, username: &str, secret: &str) -> Result<()> {
    if let Some(strength) = assess(secret) {
        output::info(&format!("Password strength: {strength}"));
    }

    engine.add_entry(site, username, secret)?;

    output::success(&format!(
        "Saved password for {} ({} total)",
        site.trim(),
        engine.entry_count()?
    ));
    Ok(())
}

/// Hidden prompt for the password of a new entry.
pub fn prompt_secret(site: &str) -> Result<Zeroizing<String>> {
    let secret = dialoguer::Password::new()
        .with_prompt(format!("Password for {}", site.trim()))
        .allow_empty_password(true)
        .interact()
        .map_err(|e| prompt_error("input prompt", e))?;
    Ok(Zeroizing::new(secret))
}
