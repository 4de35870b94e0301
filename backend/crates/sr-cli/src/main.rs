//! status-codes - outcome registry inspector
//!
//! # Examples
//!
//! ```bash
//! # List every registered code
//! status-codes list --pretty
//!
//! # Only the custom WebSocket close codes
//! status-codes list --space private
//!
//! # Look up a single outcome
//! status-codes lookup "Not Found"
//! ```

use sr_cli::{Cli, logger, run};
use sr_core::StatusRegistry;

use std::io::IsTerminal;
use std::process::ExitCode;

use clap::Parser;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let colored = std::io::stderr().is_terminal();
    if let Err(e) = logger::initialize(cli.log_level, colored) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    let registry = StatusRegistry::global();

    match run(&cli.command, registry, cli.pretty) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
