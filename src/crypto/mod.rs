//! Cryptographic primitives for PassVault.
//!
//! This module provides:
//! - AES-256-GCM encryption and decryption (`encryption`)
//! - The vault key and its key file (`keys`)
//! - The unsalted SHA-256 master password digest (`digest`)

pub mod digest;
pub mod encryption;
pub mod keys;

// Re-export the most commonly used items so callers can write:
//   use crate::crypto::{encrypt, decrypt, Key, KeyManager, ...};
pub use digest::{digest_passphrase, digests_match, DIGEST_LEN};
pub use encryption::{decrypt, encrypt};
pub use keys::{Key, KeyManager, KEY_LEN};
