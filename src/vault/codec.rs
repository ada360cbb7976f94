//! Canonical encoding of the entry collection.
//!
//! The plaintext payload is a JSON array of records:
//!
//! ```text
//! [{"id": "...", "identifier": "...", "secret": "...", "memo": "...",
//!   "created_at": "YYYY-MM-DD HH:MM:SS"}, ...]
//! ```
//!
//! Field names and shape are part of the on-disk format and must stay
//! stable.  This buffer only ever exists in memory right before
//! encryption or right after decryption.

use chrono::NaiveDateTime;
use serde::Deserialize;
use zeroize::Zeroizing;

use super::entry::{timestamp, Entry, EntryId};
use crate::errors::{Result, VaultError};

/// A record as it appears in the payload.  `id` is optional so records
/// written before ids existed still decode.
#[derive(Deserialize)]
struct StoredEntry {
    #[serde(default)]
    id: Option<EntryId>,
    identifier: String,
    secret: String,
    memo: String,
    #[serde(deserialize_with = "timestamp::deserialize")]
    created_at: NaiveDateTime,
}

/// Entries decoded from a payload.
#[derive(Debug)]
pub struct Decoded {
    pub entries: Vec<Entry>,
    /// How many records had no id and were given a fresh one.
    pub assigned_ids: usize,
}

/// Serialize entries, in order, to the canonical JSON payload.
pub fn serialize(entries: &[Entry]) -> Result<Zeroizing<Vec<u8>>> {
    serde_json::to_vec(entries)
        .map(Zeroizing::new)
        .map_err(|e| VaultError::SerializationError(format!("entries: {e}")))
}

/// Decode a payload produced by `serialize`.
pub fn deserialize(bytes: &[u8]) -> Result<Decoded> {
    let stored: Vec<StoredEntry> = serde_json::from_slice(bytes)
        .map_err(|e| VaultError::InvalidVaultFormat(format!("entries JSON: {e}")))?;

    let mut assigned_ids = 0;
    let entries = stored
        .into_iter()
        .map(|record| {
            let id = record.id.unwrap_or_else(|| {
                assigned_ids += 1;
                EntryId::new()
            });
            Entry::from_stored(
                id,
                record.identifier,
                record.secret,
                record.memo,
                record.created_at,
            )
        })
        .collect();

    Ok(Decoded {
        entries,
        assigned_ids,
    })
}
