//! Key file lifecycle.
//!
//! The vault key lives in a 32-byte raw file next to the vault.  It is
//! created once on first run and never overwritten afterwards: losing
//! the key makes every vault encrypted under it permanently unreadable.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::Path;

use tracing::{debug, info};

use super::keys::{VaultKey, KEY_LEN};
use crate::errors::{Result, VaultError};

/// Load the key at `path`, or generate and persist a new one if the
/// file does not exist yet.
///
/// An existing file must be exactly `KEY_LEN` bytes; anything else is
/// reported as `KeyCorrupt` and left untouched on disk.
pub fn load_or_create_key(path: &Path) -> Result<VaultKey> {
    if path.exists() {
        return load_key(path);
    }

    let key = VaultKey::generate();
    match write_new_keyfile(path, key.as_bytes()) {
        Ok(()) => {
            info!(path = %path.display(), "generated new vault key");
            Ok(key)
        }
        // Someone created the file between our check and the write.
        // Never clobber it; read what is there instead.
        Err(VaultError::Io(e)) if e.kind() == ErrorKind::AlreadyExists => load_key(path),
        Err(e) => Err(e),
    }
}

/// Load an existing key file and validate its length.
pub fn load_key(path: &Path) -> Result<VaultKey> {
    let data = zeroize::Zeroizing::new(fs::read(path)?);

    let key = VaultKey::from_slice(&data).ok_or_else(|| VaultError::KeyCorrupt {
        path: path.to_path_buf(),
        expected: KEY_LEN,
        actual: data.len(),
    })?;

    debug!(path = %path.display(), "loaded vault key");
    Ok(key)
}

/// Create the key file with `create_new` so an existing file is never
/// replaced.  On Unix the file is created owner-only (0600).
fn write_new_keyfile(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut options = fs::OpenOptions::new();
    options.write(true).create_new(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options.open(path)?;
    file.write_all(bytes)?;
    file.sync_all()?;
    Ok(())
}
