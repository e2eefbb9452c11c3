//! Resolved on-disk locations of the vault files.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// The three files a vault consists of.
///
/// Built from `Settings::paths` (or by hand in tests) and handed to each
/// component's constructor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaultPaths {
    /// Directory holding the files below.
    pub dir: PathBuf,
    /// Raw symmetric key bytes.
    pub key_file: PathBuf,
    /// Encrypted entry list.
    pub vault_file: PathBuf,
    /// SHA-256 digest of the master password.
    pub master_file: PathBuf,
}

impl VaultPaths {
    /// Use the default file names inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            dir: dir.to_path_buf(),
            key_file: dir.join("key.key"),
            vault_file: dir.join("vault_data.json"),
            master_file: dir.join("master.hash"),
        }
    }
}

/// Write `data` to `path`, replacing any existing contents.
///
/// Creates the parent directory if needed and restricts the file to
/// owner-only read/write on Unix. A new file is created with mode 0600, so
/// it is never readable by others, even briefly. The write goes straight
/// to the target file, so an interrupted write can leave it truncated.
pub fn write_private(path: &Path, data: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    #[cfg(unix)]
    let mut file = {
        use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};
        let file = fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .mode(0o600)
            .open(path)?;
        // `mode` only applies on creation; tighten files that already existed.
        file.set_permissions(fs::Permissions::from_mode(0o600))?;
        file
    };

    #[cfg(not(unix))]
    let mut file = fs::File::create(path)?;

    file.write_all(data)?;
    file.sync_all()
}
