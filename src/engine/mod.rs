//! The vault engine: the one handle a front end talks to.
//!
//! `Engine` wires the components together in startup order: the auth gate
//! must pass (by registering or logging in) before the key is loaded and
//! the vault decrypted. Front ends either call the methods directly or
//! send a `Command` through `dispatch`; the engine never calls back into
//! the front end.

use std::path::Path;
use std::time::Instant;

use tracing::debug;

use crate::auth::{AuthGate, AuthState};
use crate::clipboard::{ClearOutcome, ClipboardBackend, ClipboardGuard, SystemClipboard};
use crate::config::VaultPaths;
use crate::crypto::KeyManager;
use crate::errors::{PassVaultError, Result};
use crate::vault::{Entry, VaultStore};

/// An action requested by a front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Add {
        site: String,
        username: String,
        secret: String,
    },
    Delete(usize),
    DeleteAll,
    Copy(usize),
}

/// The result of a dispatched `Command`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Entries(Vec<Entry>),
    Added { total: usize },
    Deleted(Entry),
    Cleared,
    Copied { clear_at: Instant },
}

pub struct Engine<B: ClipboardBackend = SystemClipboard> {
    paths: VaultPaths,
    auth: AuthGate,
    keys: KeyManager,
    store: Option<VaultStore>,
    clipboard: ClipboardGuard<B>,
}

impl Engine<SystemClipboard> {
    /// Open an engine that copies to the OS clipboard.
    pub fn open(paths: VaultPaths) -> Result<Self> {
        Self::with_clipboard(paths, ClipboardGuard::new(SystemClipboard::new()))
    }
}

impl<B: ClipboardBackend> Engine<B> {
    /// Open an engine around an explicit clipboard guard.
    ///
    /// Only the master credential file is read here; the key and the
    /// vault stay untouched until authentication succeeds.
    pub fn with_clipboard(paths: VaultPaths, clipboard: ClipboardGuard<B>) -> Result<Self> {
        let auth = AuthGate::open(&paths.master_file)?;
        let keys = KeyManager::new(&paths.key_file);
        debug!(dir = %paths.dir.display(), state = ?auth.state(), "engine opened");

        Ok(Self {
            paths,
            auth,
            keys,
            store: None,
            clipboard,
        })
    }

    // ------------------------------------------------------------------
    // Authentication
    // ------------------------------------------------------------------

    /// Register the master password and unlock the vault.
    pub fn register(&mut self, passphrase: &str, confirmation: &str) -> Result<()> {
        self.auth.register(passphrase, confirmation)?;
        self.unlock()
    }

    /// Try the master password; unlock the vault on success.
    ///
    /// `Ok(false)` means the password was wrong and may be retried. An
    /// `Err` means the password was right but the key or vault could not
    /// be loaded.
    pub fn login(&mut self, passphrase: &str) -> Result<bool> {
        if !self.auth.login(passphrase) {
            return Ok(false);
        }
        self.unlock()?;
        Ok(true)
    }

    pub fn auth_state(&self) -> AuthState {
        self.auth.state()
    }

    pub fn is_registered(&self) -> bool {
        self.auth.is_registered()
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth.is_authenticated()
    }

    // ------------------------------------------------------------------
    // Vault operations
    // ------------------------------------------------------------------

    /// All entries in insertion order.
    pub fn list_entries(&self) -> Result<&[Entry]> {
        Ok(self.store()?.entries())
    }

    /// Validate and append a new entry, then persist.
    pub fn add_entry(&mut self, site: &str, username: &str, secret: &str) -> Result<()> {
        let entry = Entry::new(site, username, secret)?;
        self.store_mut()?.add(entry)
    }

    /// Remove the entry at `index`, then persist.
    pub fn delete_entry(&mut self, index: usize) -> Result<Entry> {
        self.check_index(index)?;
        self.store_mut()?.delete(index)
    }

    /// Remove every entry, then persist.
    pub fn delete_all(&mut self) -> Result<()> {
        self.store_mut()?.clear()
    }

    /// Copy the secret at `index` to the clipboard and schedule its clear.
    ///
    /// Returns when the clear becomes due.
    pub fn copy_secret(&mut self, index: usize) -> Result<Instant> {
        self.check_index(index)?;
        let store = self.store.as_ref().ok_or(PassVaultError::Locked)?;
        let secret = &store.entries()[index].secret;
        self.clipboard.copy(secret)
    }

    /// Write the in-memory vault again after a failed persist.
    pub fn retry_persist(&self) -> Result<()> {
        self.store()?.persist()
    }

    /// Fire clipboard clears that are due at `now`.
    pub fn run_due_clears(&mut self, now: Instant) -> Result<Vec<ClearOutcome>> {
        self.clipboard.run_due(now)
    }

    /// Block until pending clipboard clears have fired.
    pub fn wait_for_clears(&mut self) -> Result<Vec<ClearOutcome>> {
        self.clipboard.wait_and_clear()
    }

    /// Run one front-end command.
    pub fn dispatch(&mut self, command: Command) -> Result<Outcome> {
        match command {
            Command::List => Ok(Outcome::Entries(self.list_entries()?.to_vec())),
            Command::Add {
                site,
                username,
                secret,
            } => {
                self.add_entry(&site, &username, &secret)?;
                Ok(Outcome::Added {
                    total: self.entry_count()?,
                })
            }
            Command::Delete(index) => Ok(Outcome::Deleted(self.delete_entry(index)?)),
            Command::DeleteAll => {
                self.delete_all()?;
                Ok(Outcome::Cleared)
            }
            Command::Copy(index) => Ok(Outcome::Copied {
                clear_at: self.copy_secret(index)?,
            }),
        }
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn entry_count(&self) -> Result<usize> {
        Ok(self.store()?.len())
    }

    /// Returns the path to the vault file.
    pub fn vault_path(&self) -> &Path {
        &self.paths.vault_file
    }

    pub fn paths(&self) -> &VaultPaths {
        &self.paths
    }

    pub fn clipboard(&self) -> &ClipboardGuard<B> {
        &self.clipboard
    }

    pub fn clipboard_mut(&mut self) -> &mut ClipboardGuard<B> {
        &mut self.clipboard
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn unlock(&mut self) -> Result<()> {
        if self.store.is_some() {
            return Ok(());
        }
        let key = self.keys.load_or_create()?;
        self.store = Some(VaultStore::load(&self.paths.vault_file, key)?);
        Ok(())
    }

    fn store(&self) -> Result<&VaultStore> {
        self.store.as_ref().ok_or(PassVaultError::Locked)
    }

    fn store_mut(&mut self) -> Result<&mut VaultStore> {
        self.store.as_mut().ok_or(PassVaultError::Locked)
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.store()?.len() {
            Ok(())
        } else {
            Err(PassVaultError::NoSuchEntry(index))
        }
    }
}
