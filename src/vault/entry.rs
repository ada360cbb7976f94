//! The `Entry` record and its surrogate `EntryId`.
//!
//! An entry is one stored credential: a user-chosen identifier, the
//! secret itself, an optional memo and the local time it was created.
//! Every entry carries a UUID assigned at creation; lookups never go
//! through the displayed fields because two entries may render alike.

use std::fmt;
use std::str::FromStr;

use chrono::{Local, NaiveDateTime, SubsecRound};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use zeroize::ZeroizeOnDrop;

use crate::errors::{Result, VaultError};

/// Stable surrogate identifier for an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(Uuid);

impl EntryId {
    /// Allocate a fresh random id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// The first eight hex digits, enough to address an entry from the CLI.
    pub fn short(&self) -> String {
        self.0.simple().to_string()[..8].to_string()
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for EntryId {
    type Err = VaultError;

    fn from_str(s: &str) -> Result<Self> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|e| VaultError::Validation(format!("'{s}' is not an entry id: {e}")))
    }
}

/// A single credential record.
///
/// Fields are read-only once the entry exists; `created_at` in
/// particular is fixed at creation.  The text fields are wiped when the
/// entry is dropped.
#[derive(Clone, PartialEq, Eq, Serialize, ZeroizeOnDrop)]
pub struct Entry {
    #[zeroize(skip)]
    id: EntryId,

    identifier: String,

    secret: String,

    memo: String,

    /// Local time, second granularity, `YYYY-MM-DD HH:MM:SS` on disk.
    #[serde(with = "timestamp")]
    #[zeroize(skip)]
    created_at: NaiveDateTime,
}

impl Entry {
    /// Build a new entry stamped with the current local time.
    ///
    /// The identifier must be non-empty and the secret must be present;
    /// the memo may be empty.
    pub fn new(identifier: &str, secret: &str, memo: &str) -> Result<Self> {
        if identifier.is_empty() {
            return Err(VaultError::Validation("identifier is required".into()));
        }
        if secret.is_empty() {
            return Err(VaultError::Validation(
                "enter or generate a password before saving".into(),
            ));
        }

        Ok(Self {
            id: EntryId::new(),
            identifier: identifier.to_string(),
            secret: secret.to_string(),
            memo: memo.to_string(),
            created_at: Local::now().naive_local().trunc_subsecs(0),
        })
    }

    /// Rebuild an entry decoded from the vault payload.
    pub(crate) fn from_stored(
        id: EntryId,
        identifier: String,
        secret: String,
        memo: String,
        created_at: NaiveDateTime,
    ) -> Self {
        Self {
            id,
            identifier,
            secret,
            memo,
            created_at,
        }
    }

    pub fn id(&self) -> EntryId {
        self.id
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }

    pub fn memo(&self) -> &str {
        &self.memo
    }

    pub fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }

    /// Case-insensitive substring match against identifier or memo.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn matches(&self, needle: &str) -> bool {
        self.identifier.to_lowercase().contains(needle) || self.memo.to_lowercase().contains(needle)
    }

    pub(crate) fn reassign_id(&mut self) {
        self.id = EntryId::new();
    }
}

impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("id", &self.id)
            .field("identifier", &self.identifier)
            .field("secret", &"[REDACTED]")
            .field("memo", &self.memo)
            .field("created_at", &self.created_at)
            .finish()
    }
}

/// Serde helpers for the `YYYY-MM-DD HH:MM:SS` timestamp format.
pub(crate) mod timestamp {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&s, FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn new_rejects_empty_identifier() {
        let err = Entry::new("", "pw", "").unwrap_err();
        assert!(matches!(err, VaultError::Validation(_)));
    }

    #[test]
    fn new_rejects_empty_secret() {
        let err = Entry::new("bank", "", "").unwrap_err();
        assert!(matches!(err, VaultError::Validation(_)));
    }

    #[test]
    fn memo_may_be_empty() {
        let entry = Entry::new("bank", "x1", "").unwrap();
        assert_eq!(entry.memo(), "");
    }

    #[test]
    fn created_at_has_second_granularity() {
        let entry = Entry::new("bank", "x1", "").unwrap();
        assert_eq!(entry.created_at().nanosecond(), 0);
    }

    #[test]
    fn ids_are_unique() {
        let a = Entry::new("same", "pw", "memo").unwrap();
        let b = Entry::new("same", "pw", "memo").unwrap();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn entry_id_parses_its_display_form() {
        let id = EntryId::new();
        let parsed: EntryId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
        assert_eq!(id.short().len(), 8);
        assert!(id.to_string().starts_with(&id.short()));
    }

    #[test]
    fn entry_id_rejects_garbage() {
        assert!("not-a-uuid".parse::<EntryId>().is_err());
    }

    #[test]
    fn secret_is_wiped_on_drop() {
        fn wiped_on_drop<T: ZeroizeOnDrop>() {}
        wiped_on_drop::<Entry>();
    }

    #[test]
    fn debug_redacts_secret() {
        let entry = Entry::new("bank", "hunter2", "").unwrap();
        let shown = format!("{entry:?}");
        assert!(!shown.contains("hunter2"));
        assert!(shown.contains("bank"));
    }

    #[test]
    fn matches_identifier_or_memo_case_insensitively() {
        let entry = Entry::new("Bank", "pw", "Checking ACCOUNT").unwrap();
        assert!(entry.matches("ban"));
        assert!(entry.matches("account"));
        assert!(!entry.matches("email"));
    }
}
