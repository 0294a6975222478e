//! Shell completion scripts.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::io;

const BIN_NAME: &str = "hoiku";

/// Generate shell completion scripts
#[derive(Args)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Execute the completions command.
    ///
    /// The script goes to stdout; install hints go to stderr so the output
    /// can be redirected straight into a completions directory.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let mut cmd = Cli::command();

        if let Some(hint) = install_hint(self.shell) {
            eprintln!("# {hint}");
            eprintln!();
        }

        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());
        Ok(())
    }
}

fn install_hint(shell: Shell) -> Option<&'static str> {
    match shell {
        Shell::Bash => Some("hoiku completions bash > ~/.local/share/bash-completion/completions/hoiku"),
        Shell::Zsh => Some("hoiku completions zsh > ~/.zsh/completions/_hoiku"),
        Shell::Fish => Some("hoiku completions fish > ~/.config/fish/completions/hoiku.fish"),
        Shell::PowerShell => Some("hoiku completions powershell | Out-String | Invoke-Expression"),
        _ => None,
    }
}
