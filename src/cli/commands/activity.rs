//! `passvault activity`: display the history of vault changes.
//!
//! Usage:
//!   passvault activity               # show last 50 entries
//!   passvault activity --last 20     # show last 20
//!   passvault activity --since 7d    # entries from last 7 days

use chrono::{DateTime, Utc};

use crate::cli::Cli;
use crate::errors::{PassVaultError, Result};

/// Execute the `activity` command.
#[cfg(feature = "audit-log")]
pub fn execute(cli: &Cli, last: usize, since: Option<&str>) -> Result<()> {
    use comfy_table::{ContentArrangement, Table};

    use crate::audit::ActivityLog;
    use crate::cli::{load_settings, output, vault_dir};

    let settings = load_settings()?;
    let dir = vault_dir(cli, &settings)?;

    let log = ActivityLog::open(&dir)
        .ok_or_else(|| PassVaultError::AuditError("failed to open activity database".into()))?;

    let since = since.map(parse_since).transpose()?;
    let entries = log.recent(last, since)?;

    if entries.is_empty() {
        output::info("No activity recorded yet.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Time", "Operation", "Credential", "Details"]);
    for e in &entries {
        table.add_row(vec![
            e.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
            e.operation.clone(),
            e.record_id.clone().unwrap_or_else(|| "-".into()),
            e.details.clone().unwrap_or_default(),
        ]);
    }
    println!("{table}");

    Ok(())
}

/// Execute the `activity` command (activity log compiled out).
#[cfg(not(feature = "audit-log"))]
pub fn execute(_cli: &Cli, _last: usize, _since: Option<&str>) -> Result<()> {
    Err(PassVaultError::AuditError(
        "this build has no activity log; rebuild with the `audit-log` feature".into(),
    ))
}

/// Parse a human-friendly duration like "7d", "24h", "30m" into the
/// point in time that far in the past.
pub fn parse_since(input: &str) -> Result<DateTime<Utc>> {
    let input = input.trim();
    let invalid = || {
        PassVaultError::CommandFailed(format!(
            "invalid duration '{input}'; use a format like 7d, 24h, or 30m"
        ))
    };

    let split = input.len().checked_sub(1).ok_or_else(invalid)?;
    if !input.is_char_boundary(split) {
        return Err(invalid());
    }
    let (num, unit) = input.split_at(split);
    let num: i64 = num.parse().map_err(|_| invalid())?;

    let duration = match unit {
        "d" => chrono::Duration::try_days(num),
        "h" => chrono::Duration::try_hours(num),
        "m" => chrono::Duration::try_minutes(num),
        _ => None,
    }
    .ok_or_else(invalid)?;

    Ok(Utc::now() - duration)
}
