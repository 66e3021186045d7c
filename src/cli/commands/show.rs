//! `passvault show`: print every field of one credential.

use crate::cli::output;
use crate::cli::{load_settings, open_store, Cli};
use crate::errors::{PassVaultError, Result};

/// Execute the `show` command.
pub fn execute(cli: &Cli, id: &str) -> Result<()> {
    let settings = load_settings()?;
    let mut store = open_store(cli, &settings)?;

    let record = store
        .load()?
        .into_iter()
        .find(|r| r.id == id)
        .ok_or_else(|| PassVaultError::RecordNotFound(id.to_string()))?;

    output::print_record(&record);
    Ok(())
}
