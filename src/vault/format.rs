//! Vault file format.
//!
//! The vault file is a single AES-256-GCM blob:
//!
//! ```text
//! [nonce: 12 bytes][ciphertext of entries JSON][tag: 16 bytes]
//! ```
//!
//! The plaintext is a pretty-printed JSON array of
//! `{"site", "username", "password"}` objects in list order. A missing or
//! zero-length file is an empty vault.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use zeroize::Zeroizing;

use super::entry::Entry;
use crate::config::write_private;
use crate::crypto::{decrypt, encrypt, Key};
use crate::errors::{PassVaultError, Result};

/// Serialize and encrypt `entries`.
pub fn seal(entries: &[Entry], key: &Key) -> Result<Vec<u8>> {
    let plaintext = Zeroizing::new(
        serde_json::to_vec_pretty(entries)
            .map_err(|e| PassVaultError::Serialization(format!("entries: {e}")))?,
    );
    encrypt(key.as_bytes(), &plaintext)
}

/// Decrypt and deserialize a blob produced by `seal`.
///
/// An empty blob is an empty vault.
pub fn open(blob: &[u8], key: &Key) -> Result<Vec<Entry>> {
    if blob.is_empty() {
        return Ok(Vec::new());
    }

    let plaintext = Zeroizing::new(decrypt(key.as_bytes(), blob)?);
    serde_json::from_slice(&plaintext)
        .map_err(|e| PassVaultError::Serialization(format!("entries: {e}")))
}

/// Read the raw vault file; an absent file reads as empty.
pub fn read_vault(path: &Path) -> Result<Vec<u8>> {
    match fs::read(path) {
        Ok(bytes) => Ok(bytes),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
        Err(e) => Err(PassVaultError::Io(e)),
    }
}

/// Overwrite the vault file with a fresh seal of `entries`.
///
/// Returns the number of bytes written.
pub fn write_vault(path: &Path, entries: &[Entry], key: &Key) -> Result<usize> {
    let blob = seal(entries, key)?;
    write_private(path, &blob).map_err(|source| PassVaultError::PersistFailed {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(blob.len())
}
