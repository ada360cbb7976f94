//! `passmaster show`: print or copy a single entry's password.

use crate::audit::{AuditOp, AuditRecord};
use crate::cli::{audit, clipboard, open_vault, output, Context};
use crate::errors::{Result, VaultError};

/// Execute the `show` command.
pub fn execute(ctx: &Context, id: &str, copy: bool) -> Result<()> {
    let store = open_vault(ctx)?;
    let id = store.resolve(id)?;
    let entry = store
        .get_entry(id)
        .ok_or_else(|| VaultError::EntryNotFound(id.to_string()))?;

    audit(ctx, AuditRecord::new(AuditOp::Show).entry(id, entry.identifier()));

    if copy {
        clipboard::copy(entry.secret())?;
        output::success(&format!(
            "Password for '{}' copied to the clipboard.",
            entry.identifier()
        ));
    } else {
        println!("{}", entry.secret());
    }

    Ok(())
}
