//! `passvault completions` — print a shell completion script to stdout.
//!
//!   passvault completions bash > ~/.local/share/bash-completion/completions/passvault
//!   passvault completions zsh > "${fpath[1]}/_passvault"

use std::io::{self, Write};

use clap::CommandFactory;
use clap_complete::{generate, Shell};

use crate::cli::Cli;
use crate::errors::Result;

/// Execute the `completions` command.
pub fn execute(shell: Shell) -> Result<()> {
    write_script(shell, &mut io::stdout())
}

/// Render the completion script for `shell` into `out`.
pub fn write_script(shell: Shell, out: &mut dyn Write) -> Result<()> {
    let mut cmd = Cli::command();
    let bin = cmd.get_name().to_string();
    generate(shell, &mut cmd, bin, out);
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn script(shell: Shell) -> String {
        let mut buf = Vec::new();
        write_script(shell, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn bash_script_knows_the_vault_subcommands() {
        let out = script(Shell::Bash);
        assert!(out.contains("passvault"));
        assert!(out.contains("delete-all"));
        assert!(out.contains("copy"));
    }

    #[test]
    fn every_supported_shell_renders() {
        for shell in [Shell::Bash, Shell::Zsh, Shell::Fish, Shell::PowerShell, Shell::Elvish] {
            assert!(!script(shell).is_empty(), "{shell} produced no script");
        }
    }
}
