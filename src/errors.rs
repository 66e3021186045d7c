use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur in PassVault.
#[derive(Debug, Error)]
pub enum PassVaultError {
    // --- Crypto errors ---
    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("Decryption failed: wrong master secret or corrupted data")]
    DecryptionFailed,

    #[error("Key derivation failed: {0}")]
    KeyDerivationFailed(String),

    // --- Vault errors ---
    #[error("Vault data is corrupt: {0}")]
    CorruptVault(String),

    #[error("Invalid storage key '{0}'")]
    InvalidStorageKey(String),

    #[error("Storage directory not usable: {0}")]
    StorageUnavailable(PathBuf),

    #[error("No credential with id '{0}'")]
    RecordNotFound(String),

    // --- Generator errors ---
    #[error("Select at least one character type")]
    EmptyCharset,

    #[error("Password length {0} is out of range ({1}..={2})")]
    InvalidLength(usize, usize, usize),

    // --- Config errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- Serialization errors ---
    #[error("Serialization error: {0}")]
    SerializationError(String),

    // --- Activity log errors ---
    #[error("Activity log error: {0}")]
    AuditError(String),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),
}

/// Convenience type alias for PassVault results.
pub type Result<T> = std::result::Result<T, PassVaultError>;
