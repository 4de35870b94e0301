use crate::{CliError, CliErrorResult, Commands};

use sr_core::{CodeSpace, StatusEntry, StatusRegistry};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::Serialize;

/// Execute a command against the registry and render its JSON output
#[track_caller]
pub fn run(command: &Commands, registry: &StatusRegistry, pretty: bool) -> CliErrorResult<String> {
    match command {
        Commands::List { space } => {
            let entries = list(registry, space.map(CodeSpace::from));
            render(&entries, pretty)
        }
        Commands::Lookup { name } => {
            let outcome = registry.resolve(name)?;
            render(registry.entry(outcome), pretty)
        }
    }
}

fn list(registry: &StatusRegistry, space: Option<CodeSpace>) -> Vec<&StatusEntry> {
    let entries: Vec<&StatusEntry> = match space {
        Some(space) => registry.in_space(space).collect(),
        None => registry.entries().iter().collect(),
    };
    log::debug!("Listing {} of {} entries", entries.len(), registry.len());

    entries
}

#[track_caller]
fn render<T: Serialize + ?Sized>(value: &T, pretty: bool) -> CliErrorResult<String> {
    let output = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };

    output.map_err(|source| CliError::Serialize {
        source,
        location: ErrorLocation::from(Location::caller()),
    })
}
