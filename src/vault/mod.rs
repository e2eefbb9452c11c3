//! Vault module — encrypted credential storage.
//!
//! This module provides:
//! - The `Entry` type (`entry`)
//! - The sealed vault file format (`format`)
//! - `VaultStore`, the in-memory list with write-through persistence (`store`)
//! - A password strength hint (`strength`)

pub mod entry;
pub mod format;
pub mod store;
pub mod strength;

// Re-export the most commonly used items.
pub use entry::Entry;
pub use store::VaultStore;
pub use strength::{assess, Strength};
