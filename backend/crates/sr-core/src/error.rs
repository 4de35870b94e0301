use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistryError {
    /// A name outside the closed outcome set was looked up. Always a caller
    /// defect: a new outcome was used without registering its code.
    #[error("Unknown outcome name: {name:?} {location}")]
    UnknownOutcomeName {
        name: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, RegistryError>;
