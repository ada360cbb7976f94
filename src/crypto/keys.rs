//! The in-memory vault key.
//!
//! `VaultKey` holds the raw AES-256 key bytes for the lifetime of the
//! process and wipes them when dropped.  The bytes are only reachable
//! from inside the crate so that the cipher is the sole consumer.

use std::fmt;

use aes_gcm::aead::{KeyInit, OsRng};
use aes_gcm::Aes256Gcm;
use subtle::ConstantTimeEq;
use zeroize::Zeroize;

/// Length of the vault key in bytes (256 bits, for AES-256).
pub const KEY_LEN: usize = 32;

/// A wrapper around a 32-byte vault key that automatically zeroes
/// its memory when dropped.
#[derive(Clone, Zeroize)]
#[zeroize(drop)]
pub struct VaultKey {
    bytes: [u8; KEY_LEN],
}

impl VaultKey {
    /// Create a new `VaultKey` from raw bytes.
    pub fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self { bytes }
    }

    /// Generate a fresh key from the operating system's CSPRNG.
    pub fn generate() -> Self {
        let key = Aes256Gcm::generate_key(&mut OsRng);
        let mut bytes = [0u8; KEY_LEN];
        bytes.copy_from_slice(&key);
        Self { bytes }
    }

    /// Build a key from a byte slice, returning `None` on a length mismatch.
    pub(crate) fn from_slice(data: &[u8]) -> Option<Self> {
        let bytes: [u8; KEY_LEN] = data.try_into().ok()?;
        Some(Self { bytes })
    }

    pub(crate) fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.bytes
    }
}

impl PartialEq for VaultKey {
    fn eq(&self, other: &Self) -> bool {
        self.bytes.ct_eq(&other.bytes).into()
    }
}

impl Eq for VaultKey {}

impl fmt::Debug for VaultKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("VaultKey([REDACTED])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_keys_differ() {
        assert_ne!(VaultKey::generate(), VaultKey::generate());
    }

    #[test]
    fn equality_compares_bytes() {
        assert_eq!(VaultKey::from_bytes([3u8; 32]), VaultKey::from_bytes([3u8; 32]));
        assert_ne!(VaultKey::from_bytes([3u8; 32]), VaultKey::from_bytes([4u8; 32]));
    }

    #[test]
    fn from_slice_rejects_wrong_length() {
        assert!(VaultKey::from_slice(&[0u8; 16]).is_none());
        assert!(VaultKey::from_slice(&[0u8; 33]).is_none());
        assert!(VaultKey::from_slice(&[0u8; 32]).is_some());
    }

    #[test]
    fn debug_does_not_leak_bytes() {
        let key = VaultKey::from_bytes([0xAB; 32]);
        let shown = format!("{key:?}");
        assert_eq!(shown, "VaultKey([REDACTED])");
    }
}
