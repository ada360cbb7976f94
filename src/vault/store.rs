//! High-level vault operations used by CLI commands.
//!
//! `VaultStore` owns the vault key, the vault path and the in-memory
//! `EntryStore`.  Every mutation is flushed to disk (codec → cipher →
//! atomic write) before it is reported as successful; if the flush
//! fails the in-memory change is undone so memory and disk never drift
//! apart.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::crypto::encryption::{decrypt, encrypt};
use crate::crypto::keys::VaultKey;
use crate::errors::Result;

use super::codec;
use super::entries::EntryStore;
use super::entry::{Entry, EntryId};
use super::file;

/// The main vault handle.  Open one with `VaultStore::open`, then use
/// its methods to manage entries.
pub struct VaultStore {
    /// Path to the encrypted vault file.
    path: PathBuf,

    /// Key used for every encrypt/decrypt of this vault (zeroized on drop).
    key: VaultKey,

    /// Decrypted entries, in display order.
    entries: EntryStore,
}

impl VaultStore {
    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// Open the vault at `path` with `key`.
    ///
    /// A missing file or an empty file opens as an empty vault.  Anything
    /// else must decrypt and authenticate under `key`; the file is never
    /// read as plaintext.  Ids assigned while loading (records without
    /// one, or repeated ones) are written back before returning so they
    /// stay the same on the next open.
    pub fn open(path: &Path, key: VaultKey) -> Result<Self> {
        let (entries, new_ids) = match file::load(path)? {
            None => {
                debug!(path = %path.display(), "no vault file yet, starting empty");
                (EntryStore::new(), 0)
            }
            Some(blob) if blob.is_empty() => (EntryStore::new(), 0),
            Some(blob) => {
                let plaintext = zeroize::Zeroizing::new(decrypt(&key, &blob)?);
                let decoded = codec::deserialize(&plaintext)?;
                let (entries, replaced) = EntryStore::with_unique_ids(decoded.entries);
                (entries, decoded.assigned_ids + replaced)
            }
        };

        debug!(path = %path.display(), entries = entries.len(), "opened vault");

        let store = Self {
            path: path.to_path_buf(),
            key,
            entries,
        };

        if new_ids > 0 {
            info!(path = %path.display(), new_ids, "persisting newly assigned entry ids");
            store.save()?;
        }

        Ok(store)
    }

    // ------------------------------------------------------------------
    // Entry operations
    // ------------------------------------------------------------------

    /// Entries whose identifier or memo contains `filter` (case-insensitive).
    pub fn list_entries(&self, filter: &str) -> Vec<Entry> {
        self.entries.list(filter)
    }

    pub fn get_entry(&self, id: EntryId) -> Option<Entry> {
        self.entries.get(id)
    }

    /// Add an entry and persist the vault.
    ///
    /// On a failed flush the entry is dropped again and the error returned.
    pub fn add_entry(&mut self, identifier: &str, secret: &str, memo: &str) -> Result<EntryId> {
        let id = self.entries.add(identifier, secret, memo)?;

        if let Err(e) = self.save() {
            warn!(error = %e, "flush failed, rolling back add");
            self.entries.remove(id);
            return Err(e);
        }

        Ok(id)
    }

    /// Remove an entry and persist the vault.
    ///
    /// Removing an id that is not present is a no-op returning `false`.
    /// On a failed flush the entry is put back at its old position.
    pub fn remove_entry(&mut self, id: EntryId) -> Result<bool> {
        let Some((index, entry)) = self.entries.take(id) else {
            return Ok(false);
        };

        if let Err(e) = self.save() {
            warn!(error = %e, "flush failed, rolling back remove");
            self.entries.restore(index, entry);
            return Err(e);
        }

        Ok(true)
    }

    /// Resolve a full entry id or a unique prefix of one.
    pub fn resolve(&self, text: &str) -> Result<EntryId> {
        self.entries.resolve(text)
    }

    // ------------------------------------------------------------------
    // Persistence
    // ------------------------------------------------------------------

    /// Serialize, encrypt and atomically write the current entries.
    pub fn save(&self) -> Result<()> {
        let plaintext = codec::serialize(self.entries.entries())?;
        let blob = encrypt(&self.key, &plaintext)?;
        file::save(&self.path, &blob)
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Returns the path to the vault file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the number of entries in the vault.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}
