//! `passmaster remove`: delete an entry from the vault.

use dialoguer::Confirm;

use crate::audit::{AuditOp, AuditRecord};
use crate::cli::{audit, open_vault, output, Context};
use crate::errors::{Result, VaultError};

/// Execute the `remove` command.
pub fn execute(ctx: &Context, id: &str, force: bool) -> Result<()> {
    let mut store = open_vault(ctx)?;
    let id = store.resolve(id)?;
    let entry = store
        .get_entry(id)
        .ok_or_else(|| VaultError::EntryNotFound(id.to_string()))?;

    // Unless --force is set, ask for confirmation before deleting.
    if !force {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Delete '{}' ({}, created {})?",
                entry.identifier(),
                id.short(),
                entry.created_at().format("%Y-%m-%d %H:%M:%S")
            ))
            .default(false)
            .interact()
            .map_err(|e| VaultError::CommandFailed(format!("confirm prompt: {e}")))?;

        if !confirmed {
            output::info("Cancelled.");
            return Ok(());
        }
    }

    if store.remove_entry(id)? {
        audit(ctx, AuditRecord::new(AuditOp::Remove).entry(id, entry.identifier()));
        output::success(&format!("Deleted '{}'", entry.identifier()));
    } else {
        output::info("Entry was already gone.");
    }

    Ok(())
}
