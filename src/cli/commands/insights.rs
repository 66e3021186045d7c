//! `passvault insights`: weak, reused and old passwords plus the score.

use crate::cli::output;
use crate::cli::{load_settings, open_store, Cli};
use crate::errors::{PassVaultError, Result};

/// Execute the `insights` command.
pub fn execute(cli: &Cli, json: bool) -> Result<()> {
    let settings = load_settings()?;
    let mut store = open_store(cli, &settings)?;

    // Surface a wrong secret before reporting a perfect empty-vault score.
    store.load()?;
    let insights = store.compute_security_insights();

    if json {
        let text = serde_json::to_string_pretty(&insights)
            .map_err(|e| PassVaultError::SerializationError(e.to_string()))?;
        println!("{text}");
    } else {
        output::print_insights(&insights);
    }

    Ok(())
}
