//! SQLite store for audit records, `passmaster-audit.db` beside the vault.

use std::path::{Path, PathBuf};

use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{params, Connection};

use super::{AuditOp, AuditRecord};
use crate::errors::{Result, VaultError};

/// File name of the audit database inside the vault directory.
pub const DB_FILE: &str = "passmaster-audit.db";

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS events (
    seq         INTEGER PRIMARY KEY AUTOINCREMENT,
    at          TEXT NOT NULL,
    op          TEXT NOT NULL,
    vault       TEXT NOT NULL,
    entry_id    TEXT,
    identifier  TEXT,
    note        TEXT
);";

/// A record read back from the database.
#[derive(Debug, Clone)]
pub struct LoggedEvent {
    pub seq: i64,
    pub at: DateTime<Utc>,
    /// `None` for an operation name this build does not know.
    pub op: Option<AuditOp>,
    pub vault: String,
    pub entry_id: Option<String>,
    pub identifier: Option<String>,
    pub note: Option<String>,
}

pub struct AuditLog {
    conn: Connection,
    path: PathBuf,
}

fn audit_err(context: &str) -> impl Fn(rusqlite::Error) -> VaultError + '_ {
    move |e| VaultError::AuditError(format!("{context}: {e}"))
}

/// Fixed-width UTC timestamps so text order equals time order.
fn stamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}

impl AuditLog {
    /// Open or create the database in `vault_dir` (owner-only on Unix).
    pub fn open(vault_dir: &Path) -> Result<Self> {
        let path = vault_dir.join(DB_FILE);
        let conn = Connection::open(&path).map_err(audit_err("open"))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o600))?;
        }

        conn.execute_batch(SCHEMA).map_err(audit_err("schema"))?;
        Ok(Self { conn, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append `record` for the vault named `vault`.
    pub fn record(&self, vault: &str, record: &AuditRecord) -> Result<()> {
        self.conn
            .execute(
                "INSERT INTO events (at, op, vault, entry_id, identifier, note)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    stamp(Utc::now()),
                    record.op.as_str(),
                    vault,
                    record.entry.map(|id| id.to_string()),
                    record.identifier,
                    record.note,
                ],
            )
            .map_err(audit_err("insert"))?;
        Ok(())
    }

    /// Up to `limit` events, newest first, optionally only those at or
    /// after `since`.
    pub fn recent(&self, limit: usize, since: Option<DateTime<Utc>>) -> Result<Vec<LoggedEvent>> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let since = since.map(stamp);

        let mut stmt = self
            .conn
            .prepare(
                "SELECT seq, at, op, vault, entry_id, identifier, note
                 FROM events
                 WHERE ?1 IS NULL OR at >= ?1
                 ORDER BY seq DESC
                 LIMIT ?2",
            )
            .map_err(audit_err("prepare"))?;

        let rows = stmt
            .query_map(params![since, limit], |row| {
                let at: String = row.get(1)?;
                let op: String = row.get(2)?;
                Ok(LoggedEvent {
                    seq: row.get(0)?,
                    at: DateTime::parse_from_rfc3339(&at)
                        .map(|dt| dt.with_timezone(&Utc))
                        .unwrap_or_default(),
                    op: op.parse().ok(),
                    vault: row.get(3)?,
                    entry_id: row.get(4)?,
                    identifier: row.get(5)?,
                    note: row.get(6)?,
                })
            })
            .map_err(audit_err("query"))?;

        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(audit_err("row"))
    }
}
