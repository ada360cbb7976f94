//! System clipboard access for `--copy`.

use crate::errors::{Result, VaultError};

/// Place `text` on the system clipboard.
pub fn copy(text: &str) -> Result<()> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| VaultError::ClipboardError(e.to_string()))?;
    clipboard
        .set_text(text.to_string())
        .map_err(|e| VaultError::ClipboardError(e.to_string()))
}
