//! Cryptographic primitives for PassMaster.
//!
//! This module provides:
//! - AES-256-GCM encryption and decryption (`encryption`)
//! - The zeroize-on-drop vault key (`keys`)
//! - Key file creation and loading (`keyfile`)

pub mod encryption;
pub mod keyfile;
pub mod keys;

// Re-export the most commonly used items so callers can write:
//   use crate::crypto::{encrypt, decrypt, load_or_create_key, ...};
pub use encryption::{decrypt, encrypt};
pub use keyfile::{load_key, load_or_create_key};
pub use keys::{VaultKey, KEY_LEN};
