//! Shell completion generation
//!
//! Emits a static completion script for the requested shell on stdout.
//! Install by redirecting into the shell's completion directory, e.g.
//! `ghreport completion bash > /etc/bash_completion.d/ghreport`.

use std::io;

use clap::CommandFactory;
use clap_complete::{Shell, generate};

use crate::cli::Cli;
use crate::error::Result;

/// Run the completion command for the given shell.
pub fn run(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
