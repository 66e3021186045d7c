//! Blob protection for the persisted vault.
//!
//! This module provides:
//! - The `Cipher` trait every protection scheme implements (`cipher`)
//! - The reversible base64 `Obfuscation` placeholder (`cipher`)
//! - AES-256-GCM primitives and the `AesGcmCipher` scheme (`encryption`)
//! - Argon2id master-secret key derivation (`kdf`)

pub mod cipher;
pub mod encryption;
pub mod kdf;

// Re-export the most commonly used items so callers can write:
//   use crate::crypto::{Cipher, Obfuscation, AesGcmCipher};
pub use cipher::{Cipher, Obfuscation};
pub use encryption::{decrypt, encrypt, AesGcmCipher};
pub use kdf::{derive_key, generate_salt, Argon2Params};
