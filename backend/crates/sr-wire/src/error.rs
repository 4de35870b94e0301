use sr_core::{CodeSpace, Outcome};

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WireError {
    #[error("Outcome {outcome} is not in the {expected} code space {location}")]
    CodeSpaceMismatch {
        outcome: Outcome,
        expected: CodeSpace,
        location: ErrorLocation,
    },

    /// `http` rejected the code. The registry keeps standard codes inside
    /// 200..600 at compile time, so this only fires if that check is loosened.
    #[error("Invalid HTTP status code: {value}: {source} {location}")]
    InvalidHttpStatus {
        value: u16,
        #[source]
        source: http::status::InvalidStatusCode,
        location: ErrorLocation,
    },
}

pub type Result<T> = std::result::Result<T, WireError>;
