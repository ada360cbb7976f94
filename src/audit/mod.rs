//! Operation history for a vault.
//!
//! Each mutating or revealing command produces an `AuditRecord`.  With
//! the `audit-log` feature the records land in a SQLite file next to the
//! vault (see `sqlite`); without it they are dropped.  Records name the
//! entry by id and identifier only.  Secrets and memos never appear.

#[cfg(feature = "audit-log")]
pub mod sqlite;

use std::fmt;
use std::str::FromStr;

use crate::vault::EntryId;

#[cfg(feature = "audit-log")]
pub use sqlite::{AuditLog, LoggedEvent};

/// The commands that leave a trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditOp {
    Init,
    Add,
    Show,
    Remove,
}

impl AuditOp {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::Add => "add",
            Self::Show => "show",
            Self::Remove => "remove",
        }
    }
}

impl fmt::Display for AuditOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuditOp {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "init" => Ok(Self::Init),
            "add" => Ok(Self::Add),
            "show" => Ok(Self::Show),
            "remove" => Ok(Self::Remove),
            other => Err(format!("unknown audit operation '{other}'")),
        }
    }
}

/// One event about to be recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditRecord {
    pub op: AuditOp,
    pub entry: Option<EntryId>,
    pub identifier: Option<String>,
    pub note: Option<String>,
}

impl AuditRecord {
    pub fn new(op: AuditOp) -> Self {
        Self {
            op,
            entry: None,
            identifier: None,
            note: None,
        }
    }

    /// Attach the entry the operation touched.
    pub fn entry(mut self, id: EntryId, identifier: &str) -> Self {
        self.entry = Some(id);
        self.identifier = Some(identifier.to_string());
        self
    }

    pub fn note(mut self, note: &str) -> Self {
        self.note = Some(note.to_string());
        self
    }
}
