//! AES-256-GCM authenticated encryption for the vault blob.
//!
//! `encrypt` generates a fresh random 12-byte nonce per call and
//! prepends it to the ciphertext; `decrypt` splits it back out.
//!
//! `AesGcmCipher` wraps these with an Argon2id-derived key and a
//! per-blob salt.  Layout of the base64-decoded blob:
//!   [ version (1) | memory_kib (4) | iterations (4) | parallelism (4)
//!   | 32-byte salt | 12-byte nonce | ciphertext + 16-byte auth tag ]
//!
//! The Argon2 parameters are little-endian and are the ones the blob was
//! sealed with.  Decoding always uses them, so changing the configured
//! parameters only affects the next write.

use aes_gcm::aead::{Aead, KeyInit, OsRng};
use aes_gcm::{AeadCore, Aes256Gcm, Nonce};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use zeroize::Zeroize;

use super::cipher::Cipher;
use super::kdf::{derive_key, generate_salt, Argon2Params, SALT_LEN};
use crate::errors::{PassVaultError, Result};

/// Size of the AES-256-GCM nonce in bytes.
const NONCE_LEN: usize = 12;

/// Current `AesGcmCipher` blob format version.
const FORMAT_VERSION: u8 = 1;

/// Version byte plus three u32 Argon2 parameters.
const HEADER_LEN: usize = 1 + 3 * 4;

/// Encrypt `plaintext` with a 32-byte `key`.
///
/// Returns the nonce prepended to the ciphertext (nonce || ciphertext).
pub fn encrypt(key: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
    let cipher = Aes256Gcm::new_from_slice(key)
        .map_err(|e| PassVaultError::EncryptionFailed(format!("invalid key length: {e}")))?;

    let nonce = Aes256Gcm::generate_nonce(&mut OsRng);

    let ciphertext = cipher
        .encrypt(&nonce, plaintext)
        .map_err(|e| PassVaultError::EncryptionFailed(format!("encryption error: {e}")))?;

    let mut output = Vec::with_capacity(NONCE_LEN + ciphertext.len());
    output.extend_from_slice(&nonce);
    output.extend_from_slice(&ciphertext);
    Ok(output)
}

/// Decrypt data that was produced by `encrypt`.
pub fn decrypt(key: &[u8], ciphertext_with_nonce: &[u8]) -> Result<Vec<u8>> {
    if ciphertext_with_nonce.len() < NONCE_LEN {
        return Err(PassVaultError::DecryptionFailed);
    }

    let (nonce_bytes, ciphertext) = ciphertext_with_nonce.split_at(NONCE_LEN);
    let nonce = Nonce::from_slice(nonce_bytes);

    let cipher = Aes256Gcm::new_from_slice(key).map_err(|_| PassVaultError::DecryptionFailed)?;

    cipher
        .decrypt(nonce, ciphertext)
        .map_err(|_| PassVaultError::DecryptionFailed)
}

/// Real authenticated encryption behind the `Cipher` seam.
///
/// `params` are used when sealing; opening reads them from the blob.
#[derive(Debug, Clone, Copy, Default)]
pub struct AesGcmCipher {
    params: Argon2Params,
}

impl AesGcmCipher {
    pub fn new(params: Argon2Params) -> Self {
        Self { params }
    }
}

fn write_header(out: &mut Vec<u8>, params: &Argon2Params) {
    out.push(FORMAT_VERSION);
    out.extend_from_slice(&params.memory_kib.to_le_bytes());
    out.extend_from_slice(&params.iterations.to_le_bytes());
    out.extend_from_slice(&params.parallelism.to_le_bytes());
}

fn read_header(bytes: &[u8]) -> Result<Argon2Params> {
    let version = bytes[0];
    if version != FORMAT_VERSION {
        return Err(PassVaultError::CorruptVault(format!(
            "unsupported aes-gcm blob version {version}"
        )));
    }

    let field = |at: usize| {
        let mut buf = [0u8; 4];
        buf.copy_from_slice(&bytes[at..at + 4]);
        u32::from_le_bytes(buf)
    };
    Ok(Argon2Params {
        memory_kib: field(1),
        iterations: field(5),
        parallelism: field(9),
    })
}

impl Cipher for AesGcmCipher {
    fn encode(&self, plaintext: &str, key: &str) -> Result<String> {
        let salt = generate_salt();
        let mut derived = derive_key(key.as_bytes(), &salt, &self.params)?;
        let sealed = encrypt(&derived, plaintext.as_bytes());
        derived.zeroize();
        let sealed = sealed?;

        let mut blob = Vec::with_capacity(HEADER_LEN + SALT_LEN + sealed.len());
        write_header(&mut blob, &self.params);
        blob.extend_from_slice(&salt);
        blob.extend_from_slice(&sealed);
        Ok(BASE64.encode(blob))
    }

    fn decode(&self, blob: &str, key: &str) -> Result<String> {
        let bytes = BASE64
            .decode(blob.trim())
            .map_err(|e| PassVaultError::CorruptVault(format!("blob is not base64: {e}")))?;
        if bytes.len() < HEADER_LEN + SALT_LEN + NONCE_LEN {
            return Err(PassVaultError::CorruptVault(
                "blob too small to hold header, salt and nonce".into(),
            ));
        }

        let (header, rest) = bytes.split_at(HEADER_LEN);
        let params = read_header(header)?;
        let (salt, sealed) = rest.split_at(SALT_LEN);
        let mut derived = derive_key(key.as_bytes(), salt, &params)?;
        let plaintext = decrypt(&derived, sealed);
        derived.zeroize();

        String::from_utf8(plaintext?).map_err(|e| {
            let mut bad_bytes = e.into_bytes();
            bad_bytes.zeroize();
            PassVaultError::CorruptVault("decrypted blob is not valid UTF-8".into())
        })
    }

    fn name(&self) -> &'static str {
        "aes-gcm"
    }
}
