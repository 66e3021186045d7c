//! The `Cipher` seam and the obfuscation placeholder.
//!
//! The store never knows how its blob is protected.  It hands the
//! serialized collection and the active master secret to a `Cipher`
//! and persists whatever text comes back.
//!
//! **`Obfuscation` is not encryption.**  Anyone who can read the slot
//! can base64-decode the blob and read every password.  It exists so
//! the demo vault round-trips under a master secret; use
//! `AesGcmCipher` for anything real.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use crate::errors::{PassVaultError, Result};

/// A reversible text-to-text protection scheme keyed by the master secret.
pub trait Cipher {
    /// Protect `plaintext` under `key`.
    fn encode(&self, plaintext: &str, key: &str) -> Result<String>;

    /// Reverse `encode`.  A wrong key must fail, not return garbage.
    fn decode(&self, blob: &str, key: &str) -> Result<String>;

    /// Short name used in config files and diagnostics.
    fn name(&self) -> &'static str;
}

/// Placeholder scheme: `base64(plaintext ++ key)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Obfuscation;

impl Cipher for Obfuscation {
    fn encode(&self, plaintext: &str, key: &str) -> Result<String> {
        let mut buf = String::with_capacity(plaintext.len() + key.len());
        buf.push_str(plaintext);
        buf.push_str(key);
        Ok(BASE64.encode(buf.as_bytes()))
    }

    fn decode(&self, blob: &str, key: &str) -> Result<String> {
        let bytes = BASE64
            .decode(blob.trim())
            .map_err(|e| PassVaultError::CorruptVault(format!("blob is not base64: {e}")))?;

        // The trailing bytes must be the key itself; anything else means
        // the blob was written under a different secret.
        let body_len = bytes
            .len()
            .checked_sub(key.len())
            .ok_or(PassVaultError::DecryptionFailed)?;
        if &bytes[body_len..] != key.as_bytes() {
            return Err(PassVaultError::DecryptionFailed);
        }

        let mut bytes = bytes;
        bytes.truncate(body_len);
        String::from_utf8(bytes)
            .map_err(|_| PassVaultError::CorruptVault("decoded blob is not valid UTF-8".into()))
    }

    fn name(&self) -> &'static str {
        "obfuscation"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_matches_base64_of_text_plus_key() {
        let blob = Obfuscation.encode("[]", "master123").unwrap();
        assert_eq!(blob, BASE64.encode("[]master123"));
    }

    #[test]
    fn decode_reverses_encode() {
        let blob = Obfuscation.encode(r#"[{"id":"1"}]"#, "master123").unwrap();
        assert_eq!(
            Obfuscation.decode(&blob, "master123").unwrap(),
            r#"[{"id":"1"}]"#
        );
    }

    #[test]
    fn decode_handles_multibyte_text() {
        let text = "pässwörd ✓";
        let blob = Obfuscation.encode(text, "ключ").unwrap();
        assert_eq!(Obfuscation.decode(&blob, "ключ").unwrap(), text);
    }

    #[test]
    fn wrong_key_of_same_length_is_rejected() {
        let blob = Obfuscation.encode("[]", "master123").unwrap();
        assert!(matches!(
            Obfuscation.decode(&blob, "master999"),
            Err(PassVaultError::DecryptionFailed)
        ));
    }

    #[test]
    fn key_longer_than_blob_is_rejected() {
        let blob = Obfuscation.encode("", "ab").unwrap();
        assert!(Obfuscation.decode(&blob, "a much longer key").is_err());
    }

    #[test]
    fn non_base64_blob_is_corrupt() {
        assert!(matches!(
            Obfuscation.decode("not base64 at all!!", "master123"),
            Err(PassVaultError::CorruptVault(_))
        ));
    }
}
