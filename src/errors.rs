use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur in PassVault.
#[derive(Debug, Error)]
pub enum PassVaultError {
    // --- Key material errors ---
    #[error("Key file error: {0}")]
    KeyFile(String),

    // --- Crypto errors ---
    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("Decryption failed — key is invalid or vault data is corrupt; without the original key file the vault is unrecoverable")]
    DecryptionFailed,

    // --- Vault errors ---
    #[error("Could not save vault to {}: {}", path.display(), source)]
    PersistFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No entry #{0} in the vault")]
    NoSuchEntry(usize),

    #[error("Vault is locked — authenticate first")]
    Locked,

    // --- Validation errors ---
    #[error("{0}")]
    Validation(String),

    #[error("Password mismatch — passwords do not match")]
    PasswordMismatch,

    #[error("A master password is already registered")]
    AlreadyRegistered,

    // --- Auth errors ---
    #[error("Incorrect master password")]
    AuthenticationFailed,

    // --- Config errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),

    // --- Clipboard errors ---
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- Serialization errors ---
    #[error("Serialization error: {0}")]
    Serialization(String),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),

    #[error("User cancelled operation")]
    UserCancelled,
}

impl PassVaultError {
    /// Whether the error leaves the engine unable to continue.
    ///
    /// Fatal errors end the session after one report. Everything else is
    /// returned to the caller with engine state left as it was (or, for
    /// `PersistFailed`, with the in-memory vault ahead of the file).
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::KeyFile(_)
                | Self::EncryptionFailed(_)
                | Self::DecryptionFailed
                | Self::Io(_)
                | Self::Serialization(_)
                | Self::ConfigError(_)
        )
    }

    /// Whether the binary should still exit with status 0.
    ///
    /// A rejected or cancelled login is indistinguishable from the user
    /// declining to unlock.
    pub fn is_clean_exit(&self) -> bool {
        matches!(self, Self::UserCancelled | Self::AuthenticationFailed)
    }
}

/// Convenience type alias for PassVault results.
pub type Result<T> = std::result::Result<T, PassVaultError>;
