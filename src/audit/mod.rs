//! Activity log: SQLite-based history of vault mutations.
//!
//! Records every add, edit, delete and master-secret change in
//! `<vault_dir>/activity.db`.  Passwords are never written here; only
//! record ids, titles and short details.
//!
//! Failures never fail the operation being logged: if the database
//! can't be opened or written to, logging is skipped with a debug trace.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use rusqlite::Connection;
use tracing::debug;

use crate::errors::{PassVaultError, Result};

const DB_FILE: &str = "activity.db";

/// A single activity entry.
#[derive(Debug, Clone)]
pub struct ActivityEntry {
    pub id: i64,
    pub timestamp: DateTime<Utc>,
    pub operation: String,
    pub record_id: Option<String>,
    pub details: Option<String>,
}

/// SQLite-backed activity log.
pub struct ActivityLog {
    conn: Connection,
}

impl ActivityLog {
    /// Open (or create) the activity database inside `vault_dir`.
    ///
    /// Returns `None` if the database can't be opened.
    pub fn open(vault_dir: &Path) -> Option<Self> {
        let db_path = Self::db_path(vault_dir);
        let conn = match Connection::open(&db_path) {
            Ok(conn) => conn,
            Err(e) => {
                debug!(path = %db_path.display(), error = %e, "activity log unavailable");
                return None;
            }
        };

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let _ = std::fs::set_permissions(&db_path, std::fs::Permissions::from_mode(0o600));
        }

        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS activity (
                id          INTEGER PRIMARY KEY AUTOINCREMENT,
                timestamp   TEXT NOT NULL,
                operation   TEXT NOT NULL,
                record_id   TEXT,
                details     TEXT
            );",
        )
        .ok()?;

        Some(Self { conn })
    }

    /// Record an operation.  Errors are traced and otherwise ignored.
    pub fn record(&self, operation: &str, record_id: Option<&str>, details: Option<&str>) {
        let now = Utc::now().to_rfc3339();
        if let Err(e) = self.conn.execute(
            "INSERT INTO activity (timestamp, operation, record_id, details)
             VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![now, operation, record_id, details],
        ) {
            debug!(operation, error = %e, "failed to write activity entry");
        }
    }

    /// Most recent entries first, at most `limit`, optionally only those
    /// at or after `since`.
    pub fn recent(&self, limit: usize, since: Option<DateTime<Utc>>) -> Result<Vec<ActivityEntry>> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        // RFC 3339 strings in UTC sort chronologically.
        let since = since
            .map(|ts| ts.to_rfc3339())
            .unwrap_or_default();

        let mut stmt = self
            .conn
            .prepare(
                "SELECT id, timestamp, operation, record_id, details
                 FROM activity
                 WHERE timestamp >= ?1
                 ORDER BY id DESC
                 LIMIT ?2",
            )
            .map_err(|e| PassVaultError::AuditError(format!("query prepare: {e}")))?;

        let rows = stmt
            .query_map(rusqlite::params![since, limit], |row| {
                let ts: String = row.get(1)?;
                let timestamp = DateTime::parse_from_rfc3339(&ts)
                    .map_or(DateTime::<Utc>::UNIX_EPOCH, |dt| dt.with_timezone(&Utc));
                Ok(ActivityEntry {
                    id: row.get(0)?,
                    timestamp,
                    operation: row.get(2)?,
                    record_id: row.get(3)?,
                    details: row.get(4)?,
                })
            })
            .map_err(|e| PassVaultError::AuditError(format!("query exec: {e}")))?;

        rows.collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| PassVaultError::AuditError(format!("row parse: {e}")))
    }

    /// Path of the activity database for `vault_dir`.
    pub fn db_path(vault_dir: &Path) -> PathBuf {
        vault_dir.join(DB_FILE)
    }
}

/// Open the log in `vault_dir`, record one entry, and close it again.
///
/// Safe to call from any command; it never fails the parent operation.
pub fn log_activity(vault_dir: &Path, operation: &str, record_id: Option<&str>, details: Option<&str>) {
    if let Some(log) = ActivityLog::open(vault_dir) {
        log.record(operation, record_id, details);
    }
}
