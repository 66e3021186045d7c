//! `passvault list`: display all credentials in a table.

use crate::cli::output;
use crate::cli::{load_settings, open_store, Cli};
use crate::errors::Result;

/// Execute the `list` command.
pub fn execute(cli: &Cli, reveal: bool) -> Result<()> {
    let settings = load_settings()?;
    let mut store = open_store(cli, &settings)?;

    // Strict load so a wrong secret is reported instead of an empty table.
    let records = store.load()?;

    output::info(&format!("{} credential(s)", records.len()));
    output::print_records_table(&records, reveal);

    Ok(())
}
