use crate::{CliError, CliErrorResult, LogLevel};

use std::panic::Location;
use std::time::SystemTime;

use error_location::ErrorLocation;
use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};

/// Initialize the stderr logger with fern
///
/// # Arguments
/// * `log_level` - Log level filter
/// * `colored` - Enable colored level names
#[track_caller]
pub fn initialize(log_level: LogLevel, colored: bool) -> CliErrorResult<()> {
    let colors = ColoredLevelConfig::new()
        .trace(Color::Magenta)
        .debug(Color::Blue)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    Dispatch::new()
        .level(log_level.0)
        .format(move |out, message, record| {
            let level = if colored {
                colors.color(record.level()).to_string()
            } else {
                record.level().to_string()
            };
            out.finish(format_args!(
                "[{date} - {level}] {message} [{file}:{line}]",
                date = humantime::format_rfc3339(SystemTime::now()),
                level = level,
                message = message,
                file = record.file().unwrap_or("unknown"),
                line = record.line().unwrap_or(0),
            ))
        })
        .chain(std::io::stderr())
        .apply()
        .map_err(|e| CliError::Logger {
            message: format!("Failed to initialize logger: {e}"),
            location: ErrorLocation::from(Location::caller()),
        })?;

    log::debug!("Logger initialized: level={:?}, stderr", log_level.0);

    Ok(())
}
