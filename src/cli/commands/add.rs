//! `passmaster add`: store a new entry in the vault.

use std::io::{self, IsTerminal, Read};

use zeroize::Zeroizing;

use crate::audit::{AuditOp, AuditRecord};
use crate::cli::{audit, clipboard, open_vault, output, Context, PolicyArgs};
use crate::errors::{Result, VaultError};
use crate::password;

/// Where the new entry's password comes from.
pub enum SecretSource<'a> {
    /// Given on the command line.
    Inline(&'a str),
    /// Generated from the policy options.
    Generate(&'a PolicyArgs),
    /// Piped stdin, or an interactive prompt when stdin is a terminal.
    Input,
}

/// Execute the `add` command.
pub fn execute(
    ctx: &Context,
    identifier: &str,
    memo: &str,
    source: SecretSource<'_>,
    copy: bool,
) -> Result<()> {
    // Reject a missing identifier before asking for anything.
    if identifier.is_empty() {
        return Err(VaultError::Validation("identifier is required".into()));
    }

    let secret = match source {
        SecretSource::Inline(v) => {
            output::warning("Password provided on command line; it may appear in shell history.");
            Zeroizing::new(v.to_string())
        }
        SecretSource::Generate(args) => {
            let length = ctx.settings.length(args.length.as_deref())?;
            Zeroizing::new(password::generate(&args.policy(&ctx.settings), length)?)
        }
        SecretSource::Input if !io::stdin().is_terminal() => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Zeroizing::new(buf.trim_end_matches(['\r', '\n']).to_string())
        }
        SecretSource::Input => Zeroizing::new(
            dialoguer::Password::new()
                .with_prompt(format!("Password for {identifier}"))
                .interact()
                .map_err(|e| VaultError::CommandFailed(format!("password prompt: {e}")))?,
        ),
    };

    let mut store = open_vault(ctx)?;
    let id = store.add_entry(identifier, &secret, memo)?;

    audit(ctx, AuditRecord::new(AuditOp::Add).entry(id, identifier));

    output::success(&format!(
        "Saved '{}' as {} ({} total)",
        identifier,
        id.short(),
        store.entry_count()
    ));
    output::strength(&password::evaluate(&secret));

    if copy {
        clipboard::copy(&secret)?;
        output::info("Password copied to the clipboard.");
    }

    Ok(())
}
