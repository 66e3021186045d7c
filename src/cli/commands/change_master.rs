//! `passvault change-master`: re-seal the vault under a new master secret.

use crate::cli::output;
use crate::cli::{load_settings, open_store, prompt_new_master_secret, record_activity, Cli};
use crate::errors::{PassVaultError, Result};

/// Execute the `change-master` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let settings = load_settings()?;

    output::info("Enter your current master secret.");
    let mut store = open_store(cli, &settings)?;
    let current = store.config().master_secret.clone();

    // Fail on an unreadable vault before asking for the new secret.
    let count = store.load()?.len();

    output::info("Choose your new master secret.");
    let new_secret = prompt_new_master_secret()?;

    if !store.change_master_secret(&current, &new_secret)? {
        return Err(PassVaultError::DecryptionFailed);
    }

    record_activity(&store, "change-master", None, Some(&format!("{count} credentials re-sealed")));
    output::success(&format!(
        "Master secret changed ({count} credentials re-sealed with {})",
        store.cipher_name()
    ));

    Ok(())
}
