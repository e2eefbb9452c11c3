//! `passvault shell` — unlock once, then drive the vault from a menu.
//!
//! Copying from the menu holds the menu until the clipboard clear has run,
//! so no secret sits on the clipboard while the shell waits for input.

use dialoguer::{Input, Select};

use crate::cli::commands::{add, copy, delete, delete_all, info, list};
use crate::cli::output;
use crate::cli::{prompt_error, unlock, Cli};
use crate::engine::Engine;
use crate::errors::{PassVaultError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuItem {
    List,
    Add,
    Copy,
    Delete,
    DeleteAll,
    Info,
    Quit,
}

impl MenuItem {
    const ALL: [MenuItem; 7] = [
        MenuItem::List,
        MenuItem::Add,
        MenuItem::Copy,
        MenuItem::Delete,
        MenuItem::DeleteAll,
        MenuItem::Info,
        MenuItem::Quit,
    ];

    fn label(self) -> &'static str {
        match self {
            MenuItem::List => "My passwords",
            MenuItem::Add => "Add password",
            MenuItem::Copy => "Copy password",
            MenuItem::Delete => "Delete password",
            MenuItem::DeleteAll => "Delete ALL passwords",
            MenuItem::Info => "Vault info",
            MenuItem::Quit => "Quit",
        }
    }
}

/// Execute the `shell` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let mut engine = unlock(cli)?;
    let labels: Vec<&str> = MenuItem::ALL.iter().map(|item| item.label()).collect();

    loop {
        let choice = Select::new()
            .with_prompt("PassVault")
            .items(&labels)
            .default(0)
            .interact_opt()
            .map_err(|e| prompt_error("menu", e))?;

        let item = match choice {
            Some(i) => MenuItem::ALL[i],
            None => MenuItem::Quit,
        };
        if item == MenuItem::Quit {
            break;
        }

        match perform(&mut engine, item) {
            Ok(()) => {}
            Err(e) if e.is_fatal() => return Err(e),
            Err(PassVaultError::PersistFailed { path, source }) => {
                output::error(&format!("Could not save vault to {}: {source}", path.display()));
                output::tip("Your change is kept in memory; the next successful save writes it.");
            }
            Err(PassVaultError::UserCancelled) => output::info("Cancelled."),
            Err(e) => output::error(&e.to_string()),
        }
    }

    Ok(())
}

fn perform(engine: &mut Engine, item: MenuItem) -> Result<()> {
    match item {
        MenuItem::List => list::run(engine),
        MenuItem::Add => {
            let site = prompt_text("Site URL/Name")?;
            let username = prompt_text("Username/Email")?;
            let secret = add::prompt_secret(&site)?;
            add::run(engine, &site, &username, &secret)
        }
        MenuItem::Copy => {
            let number = prompt_number(engine)?;
            copy::run_and_wait(engine, number)
        }
        MenuItem::Delete => {
            let number = prompt_number(engine)?;
            delete::run(engine, number, false)
        }
        MenuItem::DeleteAll => delete_all::run(engine, false),
        MenuItem::Info => info::run(engine),
        MenuItem::Quit => Ok(()),
    }
}

fn prompt_text(prompt: &str) -> Result<String> {
    Input::<String>::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .map_err(|e| prompt_error("input prompt", e))
}

fn prompt_number(engine: &Engine) -> Result<usize> {
    list::run(engine)?;
    if engine.entry_count()? == 0 {
        return Err(PassVaultError::CommandFailed("the vault is empty".into()));
    }
    Input::<usize>::new()
        .with_prompt("Entry #")
        .interact_text()
        .map_err(|e| prompt_error("input prompt", e))
}
