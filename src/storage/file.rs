//! Directory-backed slot: `<dir>/<key>` holds the blob for `key`.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::{validate_key, Slot};
use crate::errors::{PassVaultError, Result};

/// A slot that stores each key as a file inside one directory.
#[derive(Debug, Clone)]
pub struct FileSlot {
    dir: PathBuf,
}

impl FileSlot {
    /// Use `dir` as the slot directory.  It is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the slot directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the file that backs `key`.
    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.dir.join(key))
    }
}

impl Slot for FileSlot {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(&path)?))
    }

    /// Atomic write: write to a temp file in the same directory, then
    /// rename over the target so readers never see a half-written blob.
    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;

        if !self.dir.exists() {
            fs::create_dir_all(&self.dir)?;
        }
        if !self.dir.is_dir() {
            return Err(PassVaultError::StorageUnavailable(self.dir.clone()));
        }

        let tmp_path = self.dir.join(format!(".{key}.tmp"));
        fs::write(&tmp_path, value)?;

        // Owner-only: the blob holds every password in the vault.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&tmp_path, fs::Permissions::from_mode(0o600))?;
        }

        fs::rename(&tmp_path, &path)?;
        debug!(path = %path.display(), bytes = value.len(), "slot written");
        Ok(())
    }
}
