//! PassVault: a local credential vault with strength, reuse and age
//! analytics.
//!
//! The entry point is [`vault::CredentialStore`]: it keeps the whole
//! collection as one blob in a [`storage::Slot`], sealed by a
//! [`crypto::Cipher`] under the active master secret.

#[cfg(feature = "audit-log")]
pub mod audit;
pub mod cli;
pub mod config;
pub mod crypto;
pub mod errors;
pub mod generator;
pub mod storage;
pub mod vault;
