use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use crate::crypto::{AesGcmCipher, Argon2Params, Cipher, Obfuscation};
use crate::errors::{PassVaultError, Result};
use crate::vault::StoreConfig;

/// Which scheme seals the vault blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CipherKind {
    /// Reversible base64 placeholder. Not encryption.
    Obfuscation,
    /// Argon2id-derived key with AES-256-GCM.
    AesGcm,
}

/// Project-level configuration, loaded from `.passvault.toml`.
///
/// Every field has a sensible default so PassVault works out-of-the-box
/// without any config file at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Directory (relative to project root) that holds the vault slot.
    #[serde(default = "default_vault_dir")]
    pub vault_dir: String,

    /// Slot key (file name inside `vault_dir`) of the collection blob.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Blob protection scheme.
    #[serde(default = "default_cipher")]
    pub cipher: CipherKind,

    /// Passwords last changed more than this many days ago count as old.
    #[serde(default = "default_stale_after_days")]
    pub stale_after_days: u64,

    /// Write the demo records when the vault is first opened.
    #[serde(default = "default_seed_demo_data")]
    pub seed_demo_data: bool,

    /// Default length for `passvault generate`.
    #[serde(default = "default_generator_length")]
    pub generator_length: usize,

    /// Argon2 memory cost in KiB (aes-gcm only, default: 64 MB).
    #[serde(default = "default_argon2_memory_kib")]
    pub argon2_memory_kib: u32,

    /// Argon2 iteration count (default: 3).
    #[serde(default = "default_argon2_iterations")]
    pub argon2_iterations: u32,

    /// Argon2 parallelism degree (default: 4).
    #[serde(default = "default_argon2_parallelism")]
    pub argon2_parallelism: u32,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_vault_dir() -> String {
    ".passvault".to_string()
}

fn default_storage_key() -> String {
    crate::vault::DEFAULT_STORAGE_KEY.to_string()
}

fn default_cipher() -> CipherKind {
    CipherKind::Obfuscation
}

fn default_stale_after_days() -> u64 {
    crate::vault::insights::DEFAULT_STALE_AFTER_DAYS
}

fn default_seed_demo_data() -> bool {
    true
}

fn default_generator_length() -> usize {
    crate::generator::DEFAULT_LENGTH
}

fn default_argon2_memory_kib() -> u32 {
    65_536 // 64 MB
}

fn default_argon2_iterations() -> u32 {
    3
}

fn default_argon2_parallelism() -> u32 {
    4
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            vault_dir: default_vault_dir(),
            storage_key: default_storage_key(),
            cipher: default_cipher(),
            stale_after_days: default_stale_after_days(),
            seed_demo_data: default_seed_demo_data(),
            generator_length: default_generator_length(),
            argon2_memory_kib: default_argon2_memory_kib(),
            argon2_iterations: default_argon2_iterations(),
            argon2_parallelism: default_argon2_parallelism(),
        }
    }
}

impl Settings {
    /// Name of the config file we look for in the project root.
    const FILE_NAME: &'static str = ".passvault.toml";

    /// Load settings from `<project_dir>/.passvault.toml`.
    ///
    /// If the file does not exist, sensible defaults are returned.
    /// If the file exists but cannot be parsed, an error is returned.
    pub fn load(project_dir: &Path) -> Result<Self> {
        let config_path = project_dir.join(Self::FILE_NAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            PassVaultError::ConfigError(format!("Failed to parse {}: {e}", config_path.display()))
        })?;

        crate::storage::validate_key(&settings.storage_key).map_err(|_| {
            PassVaultError::ConfigError(format!(
                "storage_key '{}' must be a plain file name",
                settings.storage_key
            ))
        })?;

        Ok(settings)
    }

    /// Directory that holds the vault slot.
    ///
    /// Example: `project_dir/.passvault`
    pub fn vault_dir_path(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.vault_dir)
    }

    /// Convert the Argon2 settings into crypto-layer params.
    pub fn argon2_params(&self) -> Argon2Params {
        Argon2Params {
            memory_kib: self.argon2_memory_kib,
            iterations: self.argon2_iterations,
            parallelism: self.argon2_parallelism,
        }
    }

    /// Build the configured cipher.
    pub fn cipher(&self) -> Box<dyn Cipher> {
        match self.cipher {
            CipherKind::Obfuscation => Box::new(Obfuscation),
            CipherKind::AesGcm => Box::new(AesGcmCipher::new(self.argon2_params())),
        }
    }

    /// Store configuration sealed under `master_secret`.
    pub fn store_config(&self, master_secret: Zeroizing<String>) -> StoreConfig {
        StoreConfig {
            storage_key: self.storage_key.clone(),
            master_secret,
            stale_after_days: self.stale_after_days,
            seed_demo_data: self.seed_demo_data,
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────────
