//! In-memory ordered collection of vault entries.
//!
//! Insertion order is display order.  There is no deduplication: two
//! entries may share every displayed field and still be told apart by
//! their `EntryId`.

use std::collections::HashSet;

use tracing::warn;

use super::entry::{Entry, EntryId};
use crate::errors::{Result, VaultError};

/// The ordered entry collection.
#[derive(Debug, Clone, Default)]
pub struct EntryStore {
    entries: Vec<Entry>,
}

impl EntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from decoded entries, keeping their order.
    ///
    /// Ids must be unique for lookups to be unambiguous; a repeated id
    /// (e.g. from a hand-edited export) is replaced with a fresh one.
    pub fn from_entries(entries: Vec<Entry>) -> Self {
        Self::with_unique_ids(entries).0
    }

    /// Like `from_entries`, also returning how many ids were replaced.
    pub(crate) fn with_unique_ids(mut entries: Vec<Entry>) -> (Self, usize) {
        let mut seen = HashSet::with_capacity(entries.len());
        let mut replaced = 0;
        for entry in &mut entries {
            if !seen.insert(entry.id()) {
                warn!(identifier = entry.identifier(), "duplicate entry id, assigning a new one");
                entry.reassign_id();
                seen.insert(entry.id());
                replaced += 1;
            }
        }
        (Self { entries }, replaced)
    }

    /// Borrow the entries in insertion order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Return a snapshot of the entries whose identifier or memo contains
    /// `filter`, ignoring case.  An empty filter returns everything.
    pub fn list(&self, filter: &str) -> Vec<Entry> {
        let needle = filter.to_lowercase();
        self.entries
            .iter()
            .filter(|e| needle.is_empty() || e.matches(&needle))
            .cloned()
            .collect()
    }

    /// Append a new entry and return its id.
    pub fn add(&mut self, identifier: &str, secret: &str, memo: &str) -> Result<EntryId> {
        let entry = Entry::new(identifier, secret, memo)?;
        let id = entry.id();
        self.entries.push(entry);
        Ok(id)
    }

    /// Remove the entry with `id`.  Returns whether anything was removed.
    pub fn remove(&mut self, id: EntryId) -> bool {
        self.take(id).is_some()
    }

    pub fn get(&self, id: EntryId) -> Option<Entry> {
        self.entries.iter().find(|e| e.id() == id).cloned()
    }

    /// Resolve a full id or a unique id prefix (as shown by `list`).
    pub fn resolve(&self, text: &str) -> Result<EntryId> {
        if let Ok(id) = text.parse::<EntryId>() {
            return self
                .get(id)
                .map(|e| e.id())
                .ok_or_else(|| VaultError::EntryNotFound(text.to_string()));
        }

        let prefix = text.to_lowercase();
        if prefix.is_empty() {
            return Err(VaultError::Validation("entry id cannot be empty".into()));
        }

        let mut matches = self
            .entries
            .iter()
            .filter(|e| e.id().to_string().starts_with(&prefix));

        match (matches.next(), matches.next()) {
            (Some(entry), None) => Ok(entry.id()),
            (None, _) => Err(VaultError::EntryNotFound(text.to_string())),
            (Some(_), Some(_)) => Err(VaultError::Validation(format!(
                "entry id prefix '{text}' is ambiguous; use more characters"
            ))),
        }
    }

    /// Remove an entry and report where it was, so it can be put back.
    pub(crate) fn take(&mut self, id: EntryId) -> Option<(usize, Entry)> {
        let index = self.entries.iter().position(|e| e.id() == id)?;
        Some((index, self.entries.remove(index)))
    }

    /// Reinsert an entry previously returned by `take`.
    pub(crate) fn restore(&mut self, index: usize, entry: Entry) {
        let index = index.min(self.entries.len());
        self.entries.insert(index, entry);
    }
}
