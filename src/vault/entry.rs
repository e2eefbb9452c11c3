//! Credential entries stored inside a vault.

use serde::{Deserialize, Serialize};

use crate::errors::{PassVaultError, Result};

/// One site / username / password triple.
///
/// Field order here is the serialized order. The secret is written as
/// `password` in the vault file.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub site: String,
    pub username: String,
    #[serde(rename = "password")]
    pub secret: String,
}

impl Entry {
    /// Build a new entry from user input.
    ///
    /// `site` and `username` are trimmed; the secret is kept verbatim.
    /// Every field must be non-empty afterwards.
    pub fn new(site: &str, username: &str, secret: &str) -> Result<Self> {
        let site = site.trim();
        let username = username.trim();

        let missing: Vec<&str> = [("site", site), ("username", username), ("password", secret)]
            .iter()
            .filter(|(_, value)| value.is_empty())
            .map(|(name, _)| *name)
            .collect();

        if !missing.is_empty() {
            return Err(PassVaultError::Validation(format!(
                "All fields are required (missing: {})",
                missing.join(", ")
            )));
        }

        Ok(Self {
            site: site.to_string(),
            username: username.to_string(),
            secret: secret.to_string(),
        })
    }
}

impl std::fmt::Debug for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Entry")
            .field("site", &self.site)
            .field("username", &self.username)
            .field("secret", &"******")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_trims_site_and_username() {
        let entry = Entry::new("  github.com ", " me ", " p@ss ").unwrap();
        assert_eq!(entry.site, "github.com");
        assert_eq!(entry.username, "me");
        assert_eq!(entry.secret, " p@ss ");
    }

    #[test]
    fn new_rejects_blank_fields() {
        let err = Entry::new("   ", "me", "pw").unwrap_err();
        assert!(matches!(err, PassVaultError::Validation(ref m) if m.contains("site")));

        let err = Entry::new("site", "", "").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("username"));
        assert!(msg.contains("password"));
    }

    #[test]
    fn serializes_secret_as_password() {
        let entry = Entry::new("github.com", "me", "p@ss1").unwrap();
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(
            json,
            r#"{"site":"github.com","username":"me","password":"p@ss1"}"#
        );
    }

    #[test]
    fn debug_masks_secret() {
        let entry = Entry::new("github.com", "me", "p@ss1").unwrap();
        let dbg = format!("{entry:?}");
        assert!(dbg.contains("github.com"));
        assert!(!dbg.contains("p@ss1"));
    }
}
