//! Vault module: encrypted credential storage.
//!
//! This module provides:
//! - `Entry` and `EntryId` types (`entry`)
//! - The in-memory ordered `EntryStore` (`entries`)
//! - Canonical JSON encoding of the collection (`codec`)
//! - Atomic persistence of the encrypted blob (`file`)
//! - High-level `VaultStore` that ties them together (`store`)

pub mod codec;
pub mod entries;
pub mod entry;
pub mod file;
pub mod store;

// Re-export the most commonly used items.
pub use entries::EntryStore;
pub use entry::{Entry, EntryId};
pub use store::VaultStore;
