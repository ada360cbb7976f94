//! `passmaster audit`: display the audit log.
//!
//! Usage:
//!   passmaster audit               # show last 50 entries
//!   passmaster audit --last 20     # show last 20
//!   passmaster audit --since 7d    # entries from last 7 days

use chrono::{DateTime, Duration, Utc};

use crate::cli::Context;
use crate::errors::{Result, VaultError};

/// Execute the `audit` command.
#[cfg(feature = "audit-log")]
pub fn execute(ctx: &Context, last: usize, since: Option<&str>) -> Result<()> {
    use crate::audit::AuditLog;
    use crate::cli::output;

    let since = since.map(parse_since).transpose()?;
    let log = AuditLog::open(&ctx.vault_dir())?;
    let events = log.recent(last, since)?;

    if events.is_empty() {
        output::info("No audit entries found.");
        return Ok(());
    }

    print_audit_table(&events);
    Ok(())
}

/// Without the `audit-log` feature there is nothing to show.
#[cfg(not(feature = "audit-log"))]
pub fn execute(_ctx: &Context, _last: usize, since: Option<&str>) -> Result<()> {
    since.map(parse_since).transpose()?;
    Err(VaultError::AuditError(
        "this build has no audit log (rebuild with the `audit-log` feature)".into(),
    ))
}

/// Turn "7d", "24h" or "30m" into the instant that long ago.
fn parse_since(input: &str) -> Result<DateTime<Utc>> {
    let input = input.trim();
    let invalid = || {
        VaultError::CommandFailed(format!(
            "invalid duration '{input}'; use format like 7d, 24h, or 30m"
        ))
    };

    let unit_start = input.char_indices().last().ok_or_else(invalid)?.0;
    let (amount, unit) = input.split_at(unit_start);
    let amount: i64 = amount.parse().map_err(|_| invalid())?;

    let span = match unit {
        "d" => Duration::try_days(amount),
        "h" => Duration::try_hours(amount),
        "m" => Duration::try_minutes(amount),
        _ => None,
    }
    .ok_or_else(invalid)?;

    Ok(Utc::now() - span)
}

#[cfg(feature = "audit-log")]
fn print_audit_table(events: &[crate::audit::LoggedEvent]) {
    use comfy_table::{ContentArrangement, Table};
    use console::style;

    use crate::audit::AuditOp;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Time", "Operation", "Vault", "Entry", "Identifier", "Note"]);

    for event in events {
        let op = match event.op {
            Some(op @ AuditOp::Init) => style(op.as_str()).green().to_string(),
            Some(op @ AuditOp::Add) => style(op.as_str()).blue().to_string(),
            Some(op @ AuditOp::Remove) => style(op.as_str()).red().to_string(),
            Some(op @ AuditOp::Show) => style(op.as_str()).yellow().to_string(),
            None => style("?").dim().to_string(),
        };
        // Same 8-char form `list` shows.
        let entry = event
            .entry_id
            .as_deref()
            .map_or_else(|| "-".to_string(), |id| id.chars().take(8).collect());

        table.add_row(vec![
            event.at.format("%Y-%m-%d %H:%M:%S").to_string(),
            op,
            event.vault.clone(),
            entry,
            event.identifier.clone().unwrap_or_else(|| "-".into()),
            event.note.clone().unwrap_or_else(|| "-".into()),
        ]);
    }

    println!(
        "{}",
        style(format!("{} audit entries:", events.len())).bold()
    );
    println!("{table}");
}
