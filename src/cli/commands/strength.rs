//! `passmaster strength`: rate a password.

use std::io::{self, IsTerminal, Read};

use zeroize::Zeroizing;

use crate::cli::output;
use crate::errors::{Result, VaultError};
use crate::password;

/// Execute the `strength` command.
pub fn execute(candidate: Option<&str>) -> Result<()> {
    let input = match candidate {
        Some(p) => Zeroizing::new(p.to_string()),
        None if !io::stdin().is_terminal() => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Zeroizing::new(buf.trim_end_matches(['\r', '\n']).to_string())
        }
        None => Zeroizing::new(
            dialoguer::Password::new()
                .with_prompt("Password to rate")
                .allow_empty_password(true)
                .interact()
                .map_err(|e| VaultError::CommandFailed(format!("password prompt: {e}")))?,
        ),
    };

    output::strength(&password::evaluate(&input));
    output::tip("This rating is a rough heuristic, not an entropy estimate.");

    Ok(())
}
