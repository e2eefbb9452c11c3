use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{PassVaultError, Result};

use super::paths::VaultPaths;

/// Project-level configuration, loaded from `.passvault.toml`.
///
/// Every field has a sensible default so PassVault works out-of-the-box
/// without any config file at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Directory (relative to project root) where vault files are stored.
    #[serde(default = "default_vault_dir")]
    pub vault_dir: String,

    /// File name of the raw symmetric key.
    #[serde(default = "default_key_file")]
    pub key_file: String,

    /// File name of the encrypted entry list.
    #[serde(default = "default_vault_file")]
    pub vault_file: String,

    /// File name of the master password digest.
    #[serde(default = "default_master_file")]
    pub master_file: String,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_vault_dir() -> String {
    ".passvault".to_string()
}

fn default_key_file() -> String {
    "key.key".to_string()
}

fn default_vault_file() -> String {
    "vault_data.json".to_string()
}

fn default_master_file() -> String {
    "master.hash".to_string()
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            vault_dir: default_vault_dir(),
            key_file: default_key_file(),
            vault_file: default_vault_file(),
            master_file: default_master_file(),
        }
    }
}

impl Settings {
    /// Name of the config file we look for in the project root.
    const FILE_NAME: &'static str = ".passvault.toml";

    /// Load settings from `<project_dir>/.passvault.toml`.
    ///
    /// If the file does not exist, sensible defaults are returned.
    /// If the file exists but cannot be parsed, an error is returned.
    pub fn load(project_dir: &Path) -> Result<Self> {
        let config_path = project_dir.join(Self::FILE_NAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path).map_err(|e| {
            PassVaultError::ConfigError(format!("Failed to read {}: {e}", config_path.display()))
        })?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            PassVaultError::ConfigError(format!("Failed to parse {}: {e}", config_path.display()))
        })?;

        Ok(settings)
    }

    /// Resolve the three vault files under `project_dir`.
    pub fn paths(&self, project_dir: &Path) -> VaultPaths {
        let dir = project_dir.join(&self.vault_dir);
        VaultPaths {
            key_file: dir.join(&self.key_file),
            vault_file: dir.join(&self.vault_file),
            master_file: dir.join(&self.master_file),
            dir,
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────────
