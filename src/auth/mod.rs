//! Master password registration and login.
//!
//! `AuthGate` owns the master credential file. When the file is absent
//! the vault has never been set up and the gate waits for registration;
//! otherwise it waits for a login. Failed logins may be retried without
//! limit: there is no lockout and no backoff.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};
use zeroize::Zeroizing;

use crate::config::write_private;
use crate::crypto::{digest_passphrase, digests_match};
use crate::errors::{PassVaultError, Result};

/// Where the gate is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    /// No master credential on disk; `register` must run first.
    AwaitingRegistration,
    /// A master credential exists; `login` must succeed first.
    AwaitingLogin,
    /// Registered or logged in during this session.
    Authenticated,
}

pub struct AuthGate {
    path: PathBuf,
    stored: Option<Zeroizing<Vec<u8>>>,
    state: AuthState,
    failed_attempts: u32,
}

impl AuthGate {
    /// Open the gate for the master credential file at `path`.
    ///
    /// Reads the stored digest if there is one.
    pub fn open(path: &Path) -> Result<Self> {
        let stored = if path.exists() {
            Some(Zeroizing::new(fs::read(path)?))
        } else {
            None
        };

        let state = if stored.is_some() {
            AuthState::AwaitingLogin
        } else {
            AuthState::AwaitingRegistration
        };

        Ok(Self {
            path: path.to_path_buf(),
            stored,
            state,
            failed_attempts: 0,
        })
    }

    /// Set the master password on first run.
    ///
    /// Rejects an empty password or a confirmation that differs, without
    /// touching the disk. On success the digest is persisted and the gate
    /// is authenticated.
    pub fn register(&mut self, passphrase: &str, confirmation: &str) -> Result<()> {
        if self.stored.is_some() {
            return Err(PassVaultError::AlreadyRegistered);
        }
        if passphrase.is_empty() {
            return Err(PassVaultError::Validation(
                "Password cannot be empty.".into(),
            ));
        }
        if passphrase != confirmation {
            return Err(PassVaultError::PasswordMismatch);
        }

        let digest = Zeroizing::new(digest_passphrase(passphrase).to_vec());
        write_private(&self.path, &digest).map_err(|source| PassVaultError::PersistFailed {
            path: self.path.clone(),
            source,
        })?;

        self.stored = Some(digest);
        self.state = AuthState::Authenticated;
        info!("master password registered");
        Ok(())
    }

    /// Check `passphrase` against the stored digest.
    ///
    /// Returns `true` and authenticates on a match. Returns `false` and
    /// stays in `AwaitingLogin` otherwise, including when nothing has been
    /// registered yet.
    pub fn login(&mut self, passphrase: &str) -> bool {
        let Some(stored) = self.stored.as_ref() else {
            return false;
        };

        let candidate = Zeroizing::new(digest_passphrase(passphrase));
        if digests_match(candidate.as_slice(), stored) {
            self.state = AuthState::Authenticated;
            self.failed_attempts = 0;
            info!("login succeeded");
            true
        } else {
            self.failed_attempts = self.failed_attempts.saturating_add(1);
            warn!(attempts = self.failed_attempts, "login rejected");
            false
        }
    }

    pub fn state(&self) -> AuthState {
        self.state
    }

    /// Returns `true` if a master credential exists on disk.
    pub fn is_registered(&self) -> bool {
        self.stored.is_some()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state == AuthState::Authenticated
    }

    /// Number of rejected logins since the last success.
    pub fn failed_attempts(&self) -> u32 {
        self.failed_attempts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn gate() -> (TempDir, PathBuf, AuthGate) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("master.hash");
        let gate = AuthGate::open(&path).unwrap();
        (dir, path, gate)
    }

    #[test]
    fn missing_file_awaits_registration() {
        let (_dir, _path, gate) = gate();
        assert_eq!(gate.state(), AuthState::AwaitingRegistration);
        assert!(!gate.is_registered());
    }

    #[test]
    fn register_persists_digest_and_authenticates() {
        let (_dir, path, mut gate) = gate();
        gate.register("Secret123", "Secret123").unwrap();

        assert!(gate.is_authenticated());
        assert_eq!(fs::read(&path).unwrap(), digest_passphrase("Secret123"));
    }

    #[test]
    fn register_rejects_empty_passphrase() {
        let (_dir, path, mut gate) = gate();
        let err = gate.register("", "").unwrap_err();

        assert!(matches!(err, PassVaultError::Validation(_)));
        assert!(!path.exists());
        assert_eq!(gate.state(), AuthState::AwaitingRegistration);
    }

    #[test]
    fn register_rejects_mismatched_confirmation() {
        let (_dir, path, mut gate) = gate();
        let err = gate.register("Secret123", "Secret124").unwrap_err();

        assert!(matches!(err, PassVaultError::PasswordMismatch));
        assert!(!path.exists());
    }

    #[test]
    fn register_twice_is_rejected() {
        let (_dir, _path, mut gate) = gate();
        gate.register("one", "one").unwrap();
        let err = gate.register("two", "two").unwrap_err();
        assert!(matches!(err, PassVaultError::AlreadyRegistered));
    }

    #[test]
    fn login_after_reopen() {
        let (_dir, path, mut gate) = gate();
        gate.register("Secret123", "Secret123").unwrap();

        let mut reopened = AuthGate::open(&path).unwrap();
        assert_eq!(reopened.state(), AuthState::AwaitingLogin);
        assert!(!reopened.login("wrong"));
        assert_eq!(reopened.state(), AuthState::AwaitingLogin);
        assert_eq!(reopened.failed_attempts(), 1);
        assert!(reopened.login("Secret123"));
        assert!(reopened.is_authenticated());
        assert_eq!(reopened.failed_attempts(), 0);
    }

    #[test]
    fn login_without_registration_fails() {
        let (_dir, _path, mut gate) = gate();
        assert!(!gate.login("anything"));
        assert_eq!(gate.state(), AuthState::AwaitingRegistration);
    }

    #[test]
    fn retries_are_unlimited() {
        let (_dir, path, mut gate) = gate();
        gate.register("right", "right").unwrap();

        let mut reopened = AuthGate::open(&path).unwrap();
        for _ in 0..50 {
            assert!(!reopened.login("wrong"));
        }
        assert!(reopened.login("right"));
    }
}
