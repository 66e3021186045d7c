//! Vault module: credential records, analytics and the store.
//!
//! This module provides:
//! - `CredentialRecord`, `Strength` and the add/update inputs (`record`)
//! - Password strength classification (`strength`)
//! - Aggregate weak/reused/old metrics (`insights`)
//! - The blob format of the persisted collection (`codec`)
//! - `CredentialStore`, the single entry point for callers (`store`)

pub mod clock;
pub mod codec;
pub mod insights;
pub mod record;
pub mod seed;
pub mod store;
pub mod strength;

// Re-export the most commonly used items.
pub use clock::{Clock, FixedClock, SystemClock};
pub use insights::SecurityInsights;
pub use record::{CredentialPatch, CredentialRecord, NewCredential, Strength};
pub use store::{CredentialStore, StoreConfig, DEFAULT_MASTER_SECRET, DEFAULT_STORAGE_KEY};
pub use strength::classify;
