//! Symmetric key material and its key file.
//!
//! The vault is encrypted with a single random 256-bit key that lives in
//! its own file, next to the vault. It is generated on first run, stored
//! as raw bytes (no header), and never rotated. Losing the key file makes
//! the vault permanently undecryptable.

use std::fs;
use std::path::{Path, PathBuf};

use rand::RngCore;
use tracing::{debug, info};
use zeroize::Zeroize;

use crate::config::write_private;
use crate::errors::{PassVaultError, Result};

/// Length of the vault key (256 bits).
pub const KEY_LEN: usize = 32;

/// A wrapper around the vault key that zeroes its memory when dropped.
#[derive(Zeroize)]
#[zeroize(drop)]
pub struct Key {
    bytes: [u8; KEY_LEN],
}

impl Key {
    /// Create a new `Key` from raw bytes.
    pub fn new(bytes: [u8; KEY_LEN]) -> Self {
        Self { bytes }
    }

    /// Generate a fresh random key.
    pub fn generate() -> Self {
        let mut bytes = [0u8; KEY_LEN];
        rand::rng().fill_bytes(&mut bytes);
        let key = Self::new(bytes);
        bytes.zeroize();
        key
    }

    /// Access the raw key bytes.
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.bytes
    }
}

impl std::fmt::Debug for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Key(..)")
    }
}

/// Owns the key file: loads it, or creates it exactly once.
#[derive(Debug, Clone)]
pub struct KeyManager {
    path: PathBuf,
}

impl KeyManager {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    /// Return the vault key, generating and persisting one if the key
    /// file does not exist yet.
    ///
    /// Every failure here is fatal: nothing can be decrypted without it.
    pub fn load_or_create(&self) -> Result<Key> {
        if self.path.exists() {
            return self.load();
        }

        let key = Key::generate();
        write_private(&self.path, key.as_bytes()).map_err(|e| {
            PassVaultError::KeyFile(format!(
                "failed to write key file {}: {e}",
                self.path.display()
            ))
        })?;
        info!(path = %self.path.display(), "generated new vault key");

        Ok(key)
    }

    /// Returns the path to the key file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Key> {
        let mut data = fs::read(&self.path).map_err(|e| {
            PassVaultError::KeyFile(format!(
                "failed to read key file {}: {e}",
                self.path.display()
            ))
        })?;

        if data.len() != KEY_LEN {
            let len = data.len();
            data.zeroize();
            return Err(PassVaultError::KeyFile(format!(
                "key file {} must be exactly {KEY_LEN} bytes, got {len}",
                self.path.display()
            )));
        }

        let mut bytes = [0u8; KEY_LEN];
        bytes.copy_from_slice(&data);
        data.zeroize();
        let key = Key::new(bytes);
        bytes.zeroize();

        debug!(path = %self.path.display(), "loaded vault key");
        Ok(key)
    }
}
