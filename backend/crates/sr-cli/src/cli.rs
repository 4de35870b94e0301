use crate::DEFAULT_LOG_LEVEL_STRING;
use crate::commands::Commands;
use crate::log_level::LogLevel;

use clap::Parser;

#[derive(Parser)]
#[command(name = "status-codes")]
#[command(about = "Inspect the outcome name to status code registry")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Log level written to stderr (off, error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = DEFAULT_LOG_LEVEL_STRING)]
    pub log_level: LogLevel,
}
