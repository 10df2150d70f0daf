//! qapairs CLI - Extract question/answer pairs from CSV text into JSON Lines.

use clap::Parser;
use qapairs_cli::commands;
use qapairs_cli::{Cli, Formatter};
use std::io::IsTerminal;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("{}", qapairs_cli::error_line(&e));
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> qapairs_cli::Result<()> {
    qapairs_cli::init_tracing()?;

    let formatter = Formatter::new(std::io::stdout().is_terminal());
    commands::execute_extract(cli, &formatter)?;

    Ok(())
}
