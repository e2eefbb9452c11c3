//! Colored terminal output helpers.
//!
//! All user-facing output goes through these functions so we get
//! consistent styling across every command.

use comfy_table::{ContentArrangement, Table};
use console::style;

use crate::vault::Entry;

/// Placeholder printed instead of a secret.
pub const MASK: &str = "******";

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

/// Build the entries table (#, Site, Username, Password) with masked secrets.
pub fn entries_table(entries: &[Entry]) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Site", "Username", "Password"]);

    for (i, e) in entries.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            e.site.clone(),
            e.username.clone(),
            MASK.to_string(),
        ]);
    }

    table
}

/// Print the entries table, or a hint when the vault is empty.
pub fn print_entries_table(entries: &[Entry]) {
    if entries.is_empty() {
        info("No passwords in this vault yet.");
        tip("Run `passvault add <SITE> <USERNAME>` to add your first one.");
        return;
    }

    println!("{}", entries_table(entries));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_masks_secrets_and_numbers_from_one() {
        let entries = vec![
            Entry::new("github.com", "me", "p@ss1").unwrap(),
            Entry::new("example.org", "you", "hunter2").unwrap(),
        ];
        let rendered = entries_table(&entries).to_string();

        assert!(rendered.contains("github.com"));
        assert!(rendered.contains("you"));
        assert!(rendered.contains(MASK));
        assert!(!rendered.contains("p@ss1"));
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains(" 1 "));
        assert!(rendered.contains(" 2 "));
    }
}
