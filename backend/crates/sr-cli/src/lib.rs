//! sr-cli library
//!
//! Command parsing and execution for the `status-codes` binary.

pub mod cli;
pub mod commands;
pub mod error;
pub mod log_level;
pub mod logger;
pub mod runner;


pub use cli::Cli;
pub use commands::{Commands, SpaceArg};
pub use error::{CliError, CliErrorResult};
pub use log_level::LogLevel;
pub use runner::run;

const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
