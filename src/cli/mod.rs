//! CLI module — Clap argument parser, output helpers, and command implementations.

pub mod commands;
pub mod output;

use clap::Parser;
use zeroize::Zeroizing;

use crate::clipboard::ClipboardBackend;
use crate::config::{Settings, VaultPaths};
use crate::engine::Engine;
use crate::errors::{PassVaultError, Result};

/// Environment variable that supplies the master password non-interactively.
pub const PASSWORD_ENV: &str = "PASSVAULT_PASSWORD";

/// PassVault CLI: local encrypted password manager.
#[derive(Parser)]
#[command(
    name = "passvault",
    about = "Local encrypted password manager",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Vault directory (default: from .passvault.toml, else .passvault)
    #[arg(long, global = true)]
    pub vault_dir: Option<String>,

    /// Print debug diagnostics to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// List all saved passwords (secrets are masked)
    List,

    /// Add a password entry
    Add {
        /// Site URL or name
        site: String,
        /// Username or email
        username: String,
        /// Password (omit for interactive prompt)
        secret: Option<String>,
    },

    /// Delete one entry by its number in `list`
    Delete {
        /// Entry number as shown by `list`
        number: usize,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Delete ALL entries in the vault
    DeleteAll {
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Copy a password to the clipboard, clearing it after 10 seconds
    Copy {
        /// Entry number as shown by `list`
        number: usize,
    },

    /// Show vault location and entry count
    Info,

    /// Unlock once and manage the vault from an interactive menu
    Shell,

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Resolve the vault file locations from `.passvault.toml` in the current
/// directory, with `--vault-dir` taking precedence.
pub fn vault_paths(cli: &Cli) -> Result<VaultPaths> {
    let cwd = std::env::current_dir()?;
    let mut settings = Settings::load(&cwd)?;
    if let Some(dir) = &cli.vault_dir {
        settings.vault_dir = dir.clone();
    }
    Ok(settings.paths(&cwd))
}

/// Open the engine and get through the auth gate.
///
/// First run registers a master password; later runs ask for it once.
/// A wrong password ends the command with `AuthenticationFailed`.
pub fn unlock(cli: &Cli) -> Result<Engine> {
    let paths = vault_paths(cli)?;
    let mut engine = Engine::open(paths)?;

    if !engine.is_registered() {
        register(&mut engine)?;
        output::success("Master password created. Vault unlocked.");
        return Ok(engine);
    }

    let password = prompt_password()?;
    if engine.login(&password)? {
        Ok(engine)
    } else {
        Err(PassVaultError::AuthenticationFailed)
    }
}

/// Ask for a new master password until registration succeeds.
///
/// Also respects `PASSVAULT_PASSWORD` for scripted usage; that value is
/// used as its own confirmation.
fn register(engine: &mut Engine) -> Result<()> {
    if let Some(pw) = password_from_env() {
        return engine.register(&pw, &pw);
    }

    output::info("No master password found. Create one to set up your vault.");
    loop {
        let password = Zeroizing::new(
            dialoguer::Password::new()
                .with_prompt("New master password")
                .allow_empty_password(true)
                .interact()
                .map_err(|e| prompt_error("password prompt", e))?,
        );
        let confirmation = Zeroizing::new(
            dialoguer::Password::new()
                .with_prompt("Confirm password")
                .allow_empty_password(true)
                .interact()
                .map_err(|e| prompt_error("password prompt", e))?,
        );

        match engine.register(&password, &confirmation) {
            Err(e @ (PassVaultError::Validation(_) | PassVaultError::PasswordMismatch)) => {
                output::warning(&e.to_string());
            }
            other => return other,
        }
    }
}

/// Get the master password, from `PASSVAULT_PASSWORD` or a hidden prompt.
///
/// Returns `Zeroizing<String>` so the password is wiped from memory on drop.
pub fn prompt_password() -> Result<Zeroizing<String>> {
    if let Some(pw) = password_from_env() {
        return Ok(pw);
    }

    let pw = dialoguer::Password::new()
        .with_prompt("Master password")
        .allow_empty_password(true)
        .interact()
        .map_err(|e| prompt_error("password prompt", e))?;
    Ok(Zeroizing::new(pw))
}

pub(crate) fn password_from_env() -> Option<Zeroizing<String>> {
    std::env::var(PASSWORD_ENV)
        .ok()
        .filter(|pw| !pw.is_empty())
        .map(Zeroizing::new)
}

/// Ask a yes/no question, defaulting to "no".
pub fn confirm(prompt: &str) -> Result<bool> {
    dialoguer::Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| prompt_error("confirm prompt", e))
}

/// Map a dialoguer failure; Ctrl-C / Esc count as the user backing out.
pub fn prompt_error(what: &str, err: dialoguer::Error) -> PassVaultError {
    match err {
        dialoguer::Error::IO(io) if io.kind() == std::io::ErrorKind::Interrupted => {
            PassVaultError::UserCancelled
        }
        other => PassVaultError::CommandFailed(format!("{what}: {other}")),
    }
}

/// Turn a 1-based entry number from the command line into an index.
pub fn entry_index<B: ClipboardBackend>(engine: &Engine<B>, number: usize) -> Result<usize> {
    let count = engine.entry_count()?;
    if number == 0 || number > count {
        return Err(PassVaultError::CommandFailed(format!(
            "no entry #{number} — the vault has {count} entr{} (see `passvault list`)",
            if count == 1 { "y" } else { "ies" }
        )));
    }
    Ok(number - 1)
}
