//! In-memory entry list backed by the encrypted vault file.
//!
//! `VaultStore` keeps the decrypted entries in insertion order. Every
//! mutation rewrites the whole file from scratch; there is no journal and
//! no incremental update.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::crypto::Key;
use crate::errors::{PassVaultError, Result};

use super::entry::Entry;
use super::format;

pub struct VaultStore {
    /// Path to the vault file on disk.
    path: PathBuf,

    /// Decrypted entries, in insertion order.
    entries: Vec<Entry>,

    /// The key the file was (or will be) sealed with.
    key: Key,
}

impl VaultStore {
    /// Read and decrypt the vault at `path`.
    ///
    /// A missing or empty file yields an empty vault. A file that fails
    /// the authentication tag check (wrong key, tampering, truncation)
    /// yields `DecryptionFailed`.
    pub fn load(path: &Path, key: Key) -> Result<Self> {
        let blob = format::read_vault(path)?;
        let entries = format::open(&blob, &key)?;

        info!(entries = entries.len(), "vault loaded");

        Ok(Self {
            path: path.to_path_buf(),
            entries,
            key,
        })
    }

    /// Seal the current entries and overwrite the vault file.
    ///
    /// On failure the in-memory entries are untouched and the call can be
    /// retried.
    pub fn persist(&self) -> Result<()> {
        let bytes = format::write_vault(&self.path, &self.entries, &self.key)?;
        debug!(entries = self.entries.len(), bytes, "vault persisted");
        Ok(())
    }

    /// Append an entry and persist.
    ///
    /// An entry with an empty field is rejected without mutating anything.
    /// If persisting fails the entry stays in memory.
    pub fn add(&mut self, entry: Entry) -> Result<()> {
        if entry.site.is_empty() || entry.username.is_empty() || entry.secret.is_empty() {
            return Err(PassVaultError::Validation("All fields are required.".into()));
        }

        self.entries.push(entry);
        self.persist()
    }

    /// Remove the entry at `index` and persist.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds; callers check against `len`.
    pub fn delete(&mut self, index: usize) -> Result<Entry> {
        let removed = self.entries.remove(index);
        self.persist()?;
        Ok(removed)
    }

    /// Remove every entry and persist.
    pub fn clear(&mut self) -> Result<()> {
        self.entries.clear();
        self.persist()
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the path to the vault file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
