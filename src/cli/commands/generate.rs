//! `passmaster generate`: print a random password and its strength.

use zeroize::Zeroizing;

use crate::cli::{clipboard, output, Context, PolicyArgs};
use crate::errors::Result;
use crate::password;

/// Execute the `generate` command.
pub fn execute(ctx: &Context, args: &PolicyArgs, copy: bool) -> Result<()> {
    let length = ctx.settings.length(args.length.as_deref())?;
    let generated = Zeroizing::new(password::generate(&args.policy(&ctx.settings), length)?);

    println!("{}", generated.as_str());
    output::strength(&password::evaluate(&generated));

    if copy {
        clipboard::copy(&generated)?;
        output::info("Password copied to the clipboard.");
    }

    Ok(())
}
