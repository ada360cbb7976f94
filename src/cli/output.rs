//! Colored terminal output helpers.
//!
//! All user-facing output goes through these functions so we get
//! consistent styling across every command.

use comfy_table::{ContentArrangement, Table};
use console::style;

use crate::password::{Strength, StrengthLabel};
use crate::vault::Entry;

/// Print a green success message: "check_mark {msg}"
pub fn success(msg: &str) {
    println!("{} {}", style("\u{2713}").green().bold(), msg);
}

/// Print a red error message: "x_mark {msg}"
pub fn error(msg: &str) {
    eprintln!("{} {}", style("\u{2717}").red().bold(), msg);
}

/// Print a yellow warning: "warning_sign {msg}"
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("\u{26a0}").yellow().bold(), msg);
}

/// Print a blue info message: "info_sign {msg}"
pub fn info(msg: &str) {
    println!("{} {}", style("\u{2139}").blue().bold(), msg);
}

/// Print a dim tip/hint: "arrow {msg}"
pub fn tip(msg: &str) {
    println!("{} {}", style("\u{2192}").dim(), style(msg).dim());
}

/// Print a strength rating, colored by label.
pub fn strength(rating: &Strength) {
    let label = rating.label.to_string();
    let label = match rating.label {
        StrengthLabel::Strong => style(label).green().bold(),
        StrengthLabel::Medium => style(label).yellow().bold(),
        StrengthLabel::Weak => style(label).red().bold(),
    };
    println!("Strength: {} (score {:.3})", label, rating.score);
}

/// Print a table of entries (ID, Created, Identifier, Memo).
///
/// Secrets are never shown here; use `show` for that.
pub fn print_entries_table(entries: &[Entry]) {
    if entries.is_empty() {
        info("No matching entries.");
        tip("Run `passmaster add <IDENTIFIER> --generate` to store one.");
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["ID", "Created", "Identifier", "Memo"]);

    for e in entries {
        table.add_row(vec![
            e.id().short(),
            e.created_at().format("%Y-%m-%d %H:%M:%S").to_string(),
            e.identifier().to_string(),
            e.memo().to_string(),
        ]);
    }

    println!("{table}");
}
