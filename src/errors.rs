use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur in PassMaster.
#[derive(Debug, Error)]
pub enum VaultError {
    // --- Key errors ---
    #[error("Key file {path} is corrupt: expected {expected} bytes, found {actual}; delete it to regenerate (existing vault data will be unreadable)")]
    KeyCorrupt {
        path: PathBuf,
        expected: usize,
        actual: usize,
    },

    // --- Crypto errors ---
    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("Authentication failed: vault data was tampered with or encrypted under a different key")]
    AuthenticationFailed,

    #[error("Malformed ciphertext: {0} bytes is too short to hold a nonce and tag")]
    MalformedCiphertext(usize),

    // --- Validation errors ---
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Select at least one character class for password generation")]
    EmptyAlphabet,

    #[error(
        "Password length must be a whole number from 1 to {max} (got '{0}')",
        max = crate::password::generator::MAX_LENGTH
    )]
    InvalidLength(String),

    // --- Vault errors ---
    #[error("Invalid vault format: {0}")]
    InvalidVaultFormat(String),

    #[error("Entry '{0}' not found")]
    EntryNotFound(String),

    // --- Config errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- Serialization errors ---
    #[error("Serialization error: {0}")]
    SerializationError(String),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),

    #[error("Clipboard error: {0}")]
    ClipboardError(String),

    #[error("Audit error: {0}")]
    AuditError(String),
}

impl VaultError {
    /// Whether the caller can fix its input and retry.
    ///
    /// Cryptographic and storage failures are never recoverable: the
    /// vault refuses to proceed rather than guess.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::EmptyAlphabet | Self::InvalidLength(_)
        )
    }
}

/// Convenience type alias for PassMaster results.
pub type Result<T> = std::result::Result<T, VaultError>;
