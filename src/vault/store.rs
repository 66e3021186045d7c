//! High-level credential operations used by the CLI (or any other caller).
//!
//! `CredentialStore` wraps a persistence slot, a cipher and a clock so
//! the rest of the application can work with simple method calls like
//! `store.add(NewCredential::new("Gmail", "me", "P@ssw0rd123"))`.
//!
//! Every operation reads the full collection from the slot, applies its
//! change in memory and writes the full collection back.  There is no
//! cache between calls: two stores on the same slot see each other's
//! writes, and two interleaved read-modify-write sequences race (last
//! writer wins).

use std::fmt;

use chrono::Utc;
use subtle::ConstantTimeEq;
use tracing::{debug, warn};
use zeroize::Zeroizing;

use crate::crypto::{Cipher, Obfuscation};
use crate::errors::Result;
use crate::storage::Slot;

use super::clock::{Clock, SystemClock};
use super::codec;
use super::insights::{self, SecurityInsights, DEFAULT_STALE_AFTER_DAYS};
use super::record::{normalize_url, CredentialPatch, CredentialRecord, NewCredential};
use super::seed;
use super::strength::classify;

/// Slot key the collection is stored under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "secure_vault_data";

/// Master secret of a freshly configured demo store.
pub const DEFAULT_MASTER_SECRET: &str = "master123";

/// Per-store configuration, including the active master secret.
#[derive(Clone)]
pub struct StoreConfig {
    /// Slot key holding the collection blob.
    pub storage_key: String,

    /// The secret the blob is sealed under (wiped on drop).
    pub master_secret: Zeroizing<String>,

    /// Age in days after which a password counts as old.
    pub stale_after_days: u64,

    /// Materialize the demo records when no blob exists yet.
    pub seed_demo_data: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            master_secret: Zeroizing::new(DEFAULT_MASTER_SECRET.to_string()),
            stale_after_days: DEFAULT_STALE_AFTER_DAYS,
            seed_demo_data: true,
        }
    }
}

impl fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreConfig")
            .field("storage_key", &self.storage_key)
            .field("master_secret", &"<redacted>")
            .field("stale_after_days", &self.stale_after_days)
            .field("seed_demo_data", &self.seed_demo_data)
            .finish()
    }
}

impl StoreConfig {
    /// Default configuration sealed under `secret`.
    pub fn with_secret(secret: impl Into<String>) -> Self {
        Self {
            master_secret: Zeroizing::new(secret.into()),
            ..Self::default()
        }
    }
}

/// The credential store.  Create one per slot with `CredentialStore::new`.
pub struct CredentialStore<S: Slot> {
    slot: S,
    cipher: Box<dyn Cipher>,
    clock: Box<dyn Clock>,
    config: StoreConfig,
}

impl<S: Slot> CredentialStore<S> {
    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// Build a store over `slot` using the obfuscation cipher and the
    /// system clock.  Nothing is read or written until the first call.
    pub fn new(slot: S, config: StoreConfig) -> Self {
        Self {
            slot,
            cipher: Box::new(Obfuscation),
            clock: Box::new(SystemClock),
            config,
        }
    }

    /// Replace the cipher.  The slot must already hold a blob sealed by
    /// the same scheme (or nothing at all).
    pub fn with_cipher(mut self, cipher: Box<dyn Cipher>) -> Self {
        self.cipher = cipher;
        self
    }

    /// Replace the clock.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    // ------------------------------------------------------------------
    // Read operations (fail soft)
    // ------------------------------------------------------------------

    /// Every record in insertion order.
    ///
    /// A corrupt blob, a blob sealed under another secret, or an
    /// unreadable slot is logged and yields an empty list.
    pub fn list_all(&mut self) -> Vec<CredentialRecord> {
        match self.load() {
            Ok(records) => records,
            Err(e) => {
                warn!(
                    key = %self.config.storage_key,
                    cipher = self.cipher.name(),
                    error = %e,
                    "failed to load vault, returning empty collection"
                );
                Vec::new()
            }
        }
    }

    /// The record with `id`, if any.
    pub fn get(&mut self, id: &str) -> Option<CredentialRecord> {
        self.list_all().into_iter().find(|r| r.id == id)
    }

    /// Aggregate metrics over the current collection.
    pub fn compute_security_insights(&mut self) -> SecurityInsights {
        let records = self.list_all();
        insights::compute(&records, self.clock.today(), self.config.stale_after_days)
    }

    // ------------------------------------------------------------------
    // Mutations (strict load, propagate write failures)
    // ------------------------------------------------------------------

    /// Append a new record and persist.
    ///
    /// Inputs are not validated here; an absent or empty URL becomes `#`.
    pub fn add(&mut self, new: NewCredential) -> Result<CredentialRecord> {
        let mut records = self.load()?;

        let record = CredentialRecord {
            id: next_id(&records),
            strength: classify(&new.password),
            url: normalize_url(new.url.as_deref()),
            title: new.title,
            username: new.username,
            password: new.password,
            last_updated: self.clock.today(),
        };

        records.push(record.clone());
        self.save(&records)?;
        debug!(id = %record.id, total = records.len(), "credential added");

        Ok(record)
    }

    /// Merge `patch` into the record with `id`.
    ///
    /// Returns `Ok(false)` without writing if no record matches.  A new
    /// password that differs from the stored one refreshes `strength`
    /// and `last_updated`; anything else leaves both untouched.
    pub fn update(&mut self, id: &str, patch: CredentialPatch) -> Result<bool> {
        let mut records = self.load()?;
        let today = self.clock.today();

        let Some(record) = records.iter_mut().find(|r| r.id == id) else {
            return Ok(false);
        };

        if let Some(password) = patch.password {
            if password != record.password {
                record.strength = classify(&password);
                record.last_updated = today;
                record.password = password;
            }
        }
        if let Some(title) = patch.title {
            record.title = title;
        }
        if let Some(username) = patch.username {
            record.username = username;
        }
        if let Some(url) = patch.url {
            record.url = normalize_url(Some(&url));
        }

        self.save(&records)?;
        debug!(id, "credential updated");
        Ok(true)
    }

    /// Remove the record with `id`.
    ///
    /// Returns `Ok(false)` without writing if no record matches.
    pub fn delete(&mut self, id: &str) -> Result<bool> {
        let mut records = self.load()?;
        let before = records.len();
        records.retain(|r| r.id != id);

        if records.len() == before {
            return Ok(false);
        }

        self.save(&records)?;
        debug!(id, total = records.len(), "credential deleted");
        Ok(true)
    }

    /// Re-seal the collection under `new` if `old` is the active secret.
    ///
    /// Returns `Ok(false)` on a mismatch with no state change.  If the
    /// blob cannot be read, or the rewrite fails, the old secret stays
    /// active and the error is returned.
    pub fn change_master_secret(&mut self, old: &str, new: &str) -> Result<bool> {
        let matches: bool = old
            .as_bytes()
            .ct_eq(self.config.master_secret.as_bytes())
            .into();
        if !matches {
            return Ok(false);
        }

        let records = self.load()?;

        let previous = std::mem::replace(
            &mut self.config.master_secret,
            Zeroizing::new(new.to_string()),
        );
        if let Err(e) = self.save(&records) {
            self.config.master_secret = previous;
            return Err(e);
        }

        debug!(total = records.len(), "master secret changed");
        Ok(true)
    }

    // ------------------------------------------------------------------
    // Persistence
    // ------------------------------------------------------------------

    /// Load the collection, propagating every failure.
    ///
    /// If the slot is empty the seed collection (or an empty one, when
    /// seeding is off) is written first and returned.
    pub fn load(&mut self) -> Result<Vec<CredentialRecord>> {
        match self.slot.read(&self.config.storage_key)? {
            Some(blob) => codec::open(&blob, self.cipher.as_ref(), &self.config.master_secret),
            None => {
                let initial = if self.config.seed_demo_data {
                    seed::demo_records()
                } else {
                    Vec::new()
                };
                self.save(&initial)?;
                debug!(total = initial.len(), "initialized empty slot");
                Ok(initial)
            }
        }
    }

    /// Seal and write the full collection as one blob.
    pub fn save(&mut self, records: &[CredentialRecord]) -> Result<()> {
        let blob = codec::seal(records, self.cipher.as_ref(), &self.config.master_secret)?;
        self.slot.write(&self.config.storage_key, &blob)
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn slot(&self) -> &S {
        &self.slot
    }

    pub fn slot_mut(&mut self) -> &mut S {
        &mut self.slot
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Name of the active cipher (e.g. "obfuscation").
    pub fn cipher_name(&self) -> &'static str {
        self.cipher.name()
    }
}

/// Millisecond timestamp, bumped past any id already in the collection.
fn next_id(records: &[CredentialRecord]) -> String {
    let mut candidate = Utc::now().timestamp_millis();
    loop {
        let id = candidate.to_string();
        if !records.iter().any(|r| r.id == id) {
            return id;
        }
        candidate += 1;
    }
}
