//! `passmaster list`: display entries in a table.

use crate::cli::{open_vault, output, Context};
use crate::errors::Result;

/// Execute the `list` command.
pub fn execute(ctx: &Context, filter: Option<&str>) -> Result<()> {
    let store = open_vault(ctx)?;
    let entries = store.list_entries(filter.unwrap_or(""));

    match filter {
        Some(f) if !f.is_empty() => output::info(&format!(
            "{} of {} entries match '{f}'",
            entries.len(),
            store.entry_count()
        )),
        _ => output::info(&format!("{} entries", entries.len())),
    }

    output::print_entries_table(&entries);

    Ok(())
}
