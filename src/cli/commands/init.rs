//! `passmaster init`: create the key file and an empty vault.

use crate::audit::{AuditOp, AuditRecord};
use crate::cli::output;
use crate::cli::{audit, open_vault, Context};
use crate::errors::Result;

/// Execute the `init` command.
pub fn execute(ctx: &Context) -> Result<()> {
    let key_existed = ctx.key_path.exists();
    let vault_existed = ctx.vault_path.exists();

    // 1. Load or create the key, then open (or start) the vault.
    let store = open_vault(ctx)?;

    if key_existed {
        output::info(&format!("Using existing key {}", ctx.key_path.display()));
    } else {
        output::success(&format!("Created key {}", ctx.key_path.display()));
        output::warning("Back up the key file; without it the vault cannot be decrypted.");
    }

    // 2. Materialize an empty vault so the file exists from now on.
    if vault_existed {
        output::info(&format!(
            "Vault {} already exists ({} entries)",
            ctx.vault_path.display(),
            store.entry_count()
        ));
    } else {
        store.save()?;
        output::success(&format!("Created vault {}", ctx.vault_path.display()));
    }

    let details = if key_existed { "key reused" } else { "key created" };
    audit(ctx, AuditRecord::new(AuditOp::Init).note(details));

    output::tip("Run `passmaster add <IDENTIFIER> --generate` to store a password.");
    output::tip("Run `passmaster list` to see stored entries.");

    Ok(())
}
