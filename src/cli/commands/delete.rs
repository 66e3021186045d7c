//! `passvault delete`: remove a credential from the vault.

use dialoguer::Confirm;

use crate::cli::output;
use crate::cli::{load_settings, open_store, record_activity, Cli};
use crate::errors::{PassVaultError, Result};

/// Execute the `delete` command.
pub fn execute(cli: &Cli, id: &str, force: bool) -> Result<()> {
    // Unless --force is set, ask for confirmation before deleting.
    if !force {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete credential '{id}'?"))
            .default(false)
            .interact()
            .map_err(|e| PassVaultError::CommandFailed(format!("confirm prompt: {e}")))?;

        if !confirmed {
            output::info("Cancelled.");
            return Ok(());
        }
    }

    let settings = load_settings()?;
    let mut store = open_store(cli, &settings)?;

    if !store.delete(id)? {
        return Err(PassVaultError::RecordNotFound(id.to_string()));
    }

    record_activity(&store, "delete", Some(id), None);
    output::success(&format!("Deleted credential '{id}'"));

    Ok(())
}
