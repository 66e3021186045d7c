//! Persistence slots: one string key maps to one string blob.
//!
//! The store persists its whole collection as a single blob under a
//! single key.  `FileSlot` keeps each key in its own file; `MemorySlot`
//! keeps them in a map for tests and embedding.

pub mod file;
pub mod memory;

pub use file::FileSlot;
pub use memory::MemorySlot;

use crate::errors::{PassVaultError, Result};

/// A string-keyed, string-valued persistence slot.
pub trait Slot {
    /// Return the blob stored under `key`, or `None` if nothing is stored.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replace the blob under `key`.  Must be all-or-nothing.
    fn write(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Validate that a storage key is safe to use as a file name.
///
/// Allowed: ASCII letters, digits, underscores, hyphens, periods.
/// Must be non-empty, at most 128 characters, and not start with a period.
pub fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() || key.len() > 128 || key.starts_with('.') {
        return Err(PassVaultError::InvalidStorageKey(key.to_string()));
    }
    if !key
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-' || b == b'.')
    {
        return Err(PassVaultError::InvalidStorageKey(key.to_string()));
    }
    Ok(())
}
