//! Embeds registry codes into the two transports: HTTP response status and
//! WebSocket close frames.

pub mod error;
pub mod outcome_response;
pub mod wire_codes;

#[cfg(test)]
mod tests;

pub use error::{Result, WireError};
pub use outcome_response::{OutcomeResponse, OutcomeResponseBody};
pub use wire_codes::WireCodes;
