//! Blob format for the persisted collection.
//!
//! ```text
//! blob = cipher.encode(JSON array of CredentialRecord, master_secret)
//! ```
//!
//! The JSON keeps records in collection order and fields in declaration
//! order, so sealing the same collection under the obfuscation cipher
//! is deterministic.

use crate::crypto::Cipher;
use crate::errors::{PassVaultError, Result};

use super::record::CredentialRecord;

/// Serialize and protect the full collection.
pub fn seal(records: &[CredentialRecord], cipher: &dyn Cipher, secret: &str) -> Result<String> {
    let json = serde_json::to_string(records)
        .map_err(|e| PassVaultError::SerializationError(format!("records: {e}")))?;
    cipher.encode(&json, secret)
}

/// Reverse `seal`.
///
/// A wrong secret surfaces as `DecryptionFailed`; unparseable contents
/// as `CorruptVault`.
pub fn open(blob: &str, cipher: &dyn Cipher, secret: &str) -> Result<Vec<CredentialRecord>> {
    let json = cipher.decode(blob, secret)?;
    serde_json::from_str(&json)
        .map_err(|e| PassVaultError::CorruptVault(format!("records JSON: {e}")))
}
