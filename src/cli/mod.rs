//! CLI module: Clap argument parser, output helpers, and command implementations.

pub mod commands;
pub mod output;

use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;
use zeroize::Zeroizing;

use crate::config::Settings;
use crate::errors::{PassVaultError, Result};
use crate::storage::{FileSlot, Slot};
use crate::vault::CredentialStore;

/// Minimum length for a newly chosen master secret.
const MIN_SECRET_LEN: usize = 8;

/// Environment variable holding the master secret (CI and scripting).
pub const MASTER_ENV: &str = "PASSVAULT_MASTER";

/// Environment variable holding the new secret for `change-master`.
pub const NEW_MASTER_ENV: &str = "PASSVAULT_NEW_MASTER";

/// PassVault CLI: local credential vault with security insights.
#[derive(Parser)]
#[command(
    name = "passvault",
    about = "Local credential vault with strength, reuse and age insights",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Vault directory (default: from .passvault.toml, else .passvault)
    #[arg(long, global = true)]
    pub vault_dir: Option<String>,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// List all saved credentials
    List {
        /// Show passwords in clear text
        #[arg(long)]
        reveal: bool,
    },

    /// Show one credential, including its password
    Show {
        /// Credential id
        id: String,
    },

    /// Add a credential
    Add {
        /// Title (e.g. Gmail)
        title: String,
        /// Username or email
        username: String,
        /// Website URL
        #[arg(short, long)]
        url: Option<String>,
        /// Password (omit for interactive prompt)
        #[arg(short, long, conflicts_with = "generate")]
        password: Option<String>,
        /// Generate a random password instead of typing one
        #[arg(short, long)]
        generate: bool,
    },

    /// Change fields of a credential
    Edit {
        /// Credential id
        id: String,
        /// New title
        #[arg(long)]
        title: Option<String>,
        /// New username
        #[arg(long)]
        username: Option<String>,
        /// New URL
        #[arg(long)]
        url: Option<String>,
        /// New password
        #[arg(short, long, conflicts_with = "generate")]
        password: Option<String>,
        /// Replace the password with a generated one
        #[arg(short, long)]
        generate: bool,
    },

    /// Delete a credential
    Delete {
        /// Credential id
        id: String,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Show weak, reused and old password counts and the security score
    Insights {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate a random password
    Generate {
        /// Password length, 8 to 32 (default: from .passvault.toml, else 16)
        #[arg(short, long)]
        length: Option<usize>,
        /// Leave out uppercase letters
        #[arg(long)]
        no_uppercase: bool,
        /// Leave out lowercase letters
        #[arg(long)]
        no_lowercase: bool,
        /// Leave out digits
        #[arg(long)]
        no_numbers: bool,
        /// Leave out symbols
        #[arg(long)]
        no_symbols: bool,
    },

    /// Change the vault's master secret
    ChangeMaster,

    /// View the history of vault changes
    Activity {
        /// Number of entries to show (default: 50)
        #[arg(long, default_value = "50")]
        last: usize,
        /// Show entries since a duration ago (e.g. 7d, 24h, 30m)
        #[arg(long)]
        since: Option<String>,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell)
        shell: String,
    },
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Load settings from the current directory.
pub fn load_settings() -> Result<Settings> {
    let cwd = std::env::current_dir()?;
    Settings::load(&cwd)
}

/// Resolve the vault directory: `--vault-dir` wins over the config file.
pub fn vault_dir(cli: &Cli, settings: &Settings) -> Result<PathBuf> {
    let cwd = std::env::current_dir()?;
    Ok(match &cli.vault_dir {
        Some(dir) => cwd.join(dir),
        None => settings.vault_dir_path(&cwd),
    })
}

/// Get the master secret, trying in order:
/// 1. `PASSVAULT_MASTER` env var (CI/scripting)
/// 2. Interactive prompt
pub fn prompt_master_secret() -> Result<Zeroizing<String>> {
    if let Ok(secret) = std::env::var(MASTER_ENV) {
        if !secret.is_empty() {
            return Ok(Zeroizing::new(secret));
        }
    }

    let secret = dialoguer::Password::new()
        .with_prompt("Master secret")
        .interact()
        .map_err(|e| PassVaultError::CommandFailed(format!("secret prompt: {e}")))?;
    Ok(Zeroizing::new(secret))
}

/// Prompt for a new master secret with confirmation.
///
/// Respects `PASSVAULT_NEW_MASTER` for scripted use.  Enforces a
/// minimum length.
pub fn prompt_new_master_secret() -> Result<Zeroizing<String>> {
    prompt_confirmed_secret(NEW_MASTER_ENV, "New master secret")
}

/// Choose the master secret for a vault that does not exist yet.
///
/// Same rules as `change-master`: `PASSVAULT_MASTER` is used as-is if
/// long enough, otherwise the secret is typed twice.
pub fn prompt_initial_master_secret() -> Result<Zeroizing<String>> {
    prompt_confirmed_secret(MASTER_ENV, "Choose a master secret for the new vault")
}

fn prompt_confirmed_secret(env_var: &str, prompt: &str) -> Result<Zeroizing<String>> {
    if let Ok(secret) = std::env::var(env_var) {
        if !secret.is_empty() {
            check_secret_length(&secret)?;
            return Ok(Zeroizing::new(secret));
        }
    }

    loop {
        let secret = dialoguer::Password::new()
            .with_prompt(prompt)
            .with_confirmation("Confirm master secret", "Secrets do not match, try again")
            .interact()
            .map_err(|e| PassVaultError::CommandFailed(format!("secret prompt: {e}")))?;

        if check_secret_length(&secret).is_err() {
            output::warning(&format!(
                "Master secret must be at least {MIN_SECRET_LEN} characters. Try again."
            ));
            continue;
        }

        return Ok(Zeroizing::new(secret));
    }
}

fn check_secret_length(secret: &str) -> Result<()> {
    if secret.chars().count() < MIN_SECRET_LEN {
        return Err(PassVaultError::CommandFailed(format!(
            "master secret must be at least {MIN_SECRET_LEN} characters"
        )));
    }
    Ok(())
}

/// Read a credential password from piped stdin or an interactive prompt.
pub fn read_password(title: &str) -> Result<Zeroizing<String>> {
    if !io::stdin().is_terminal() {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        return Ok(Zeroizing::new(buf.trim_end().to_string()));
    }

    let pw = dialoguer::Password::new()
        .with_prompt(format!("Password for {title}"))
        .interact()
        .map_err(|e| PassVaultError::CommandFailed(format!("password prompt: {e}")))?;
    Ok(Zeroizing::new(pw))
}

/// Open the file-backed store for this invocation.
///
/// If the vault has no blob yet, the first write will seal it under the
/// secret chosen here, so it is confirmed and length-checked.
pub fn open_store(cli: &Cli, settings: &Settings) -> Result<CredentialStore<FileSlot>> {
    let slot = FileSlot::new(vault_dir(cli, settings)?);
    let secret = if slot.read(&settings.storage_key)?.is_none() {
        prompt_initial_master_secret()?
    } else {
        prompt_master_secret()?
    };
    Ok(CredentialStore::new(slot, settings.store_config(secret)).with_cipher(settings.cipher()))
}

/// Record a vault change in the activity log (no-op without `audit-log`).
pub fn record_activity(
    store: &CredentialStore<FileSlot>,
    operation: &str,
    record_id: Option<&str>,
    details: Option<&str>,
) {
    #[cfg(feature = "audit-log")]
    crate::audit::log_activity(store.slot().dir(), operation, record_id, details);

    #[cfg(not(feature = "audit-log"))]
    let _ = (store, operation, record_id, details);
}
