//! Durable storage of the encrypted vault blob.
//!
//! The file holds nothing but cipher output.  Writes go to a temp file
//! in the same directory which is then renamed over the target, so a
//! crash mid-write never leaves a half-written vault behind.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::errors::Result;

/// Read the raw vault bytes.
///
/// Returns `None` when the file does not exist (first run).  An empty
/// file is returned as `Some(vec![])` and treated as an empty vault by
/// the caller.
pub fn load(path: &Path) -> Result<Option<Vec<u8>>> {
    match fs::read(path) {
        Ok(data) => {
            debug!(path = %path.display(), bytes = data.len(), "read vault file");
            Ok(Some(data))
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Write `bytes` to `path` **atomically**.
///
/// 1. Create the parent directory if it is missing.
/// 2. Write to `.<name>.tmp` next to the target (owner-only on Unix).
/// 3. Flush it to disk.
/// 4. Rename it over the target path and sync the directory entry.
pub fn save(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let tmp_path = temp_path(path);

    if let Err(e) = write_synced(&tmp_path, bytes) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e);
    }

    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e.into());
    }

    sync_parent(path)?;

    debug!(path = %path.display(), bytes = bytes.len(), "wrote vault file");
    Ok(())
}

/// Make the rename itself durable by syncing the containing directory.
#[cfg(unix)]
fn sync_parent(path: &Path) -> Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::File::open(parent)?.sync_all()?;
    Ok(())
}

#[cfg(not(unix))]
fn sync_parent(_path: &Path) -> Result<()> {
    Ok(())
}

/// The temp file lives in the same directory so the rename stays on
/// one filesystem.
fn temp_path(path: &Path) -> PathBuf {
    let parent = path.parent().unwrap_or(Path::new("."));
    parent.join(format!(
        ".{}.tmp",
        path.file_name().unwrap_or_default().to_string_lossy()
    ))
}

fn write_synced(path: &Path, bytes: &[u8]) -> Result<()> {
    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);

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
