//! Status registry: the single table mapping outcome names to the numeric
//! codes embedded in HTTP responses and WebSocket close frames.

mod code_space;
mod error;
mod outcome;
mod status_entry;
mod status_registry;

#[cfg(test)]
mod tests;

pub use code_space::CodeSpace;
pub use error::{RegistryError, Result};
pub use outcome::Outcome;
pub use status_entry::StatusEntry;
pub use status_registry::StatusRegistry;
