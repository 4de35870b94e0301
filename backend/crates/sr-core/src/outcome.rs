use crate::{CodeSpace, RegistryError, Result as RegistryResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Closed set of outcomes the server reports to clients.
///
/// Discriminants double as indices into the registry table, so variants
/// must stay in table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    #[serde(rename = "Success")]
    Success = 0,
    #[serde(rename = "Bad Request")]
    BadRequest = 1,
    #[serde(rename = "Unauthorized")]
    Unauthorized = 2,
    #[serde(rename = "Not Found")]
    NotFound = 3,
    #[serde(rename = "Conflict")]
    Conflict = 4,
    #[serde(rename = "Internal Server Error")]
    InternalServerError = 5,
    /// Connection closed because the same client identity is connected elsewhere
    #[serde(rename = "Client Already Connected")]
    ClientAlreadyConnected = 6,
}

impl Outcome {
    pub const ALL: [Outcome; 7] = [
        Self::Success,
        Self::BadRequest,
        Self::Unauthorized,
        Self::NotFound,
        Self::Conflict,
        Self::InternalServerError,
        Self::ClientAlreadyConnected,
    ];

    /// Human-readable outcome name, the lookup key
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::BadRequest => "Bad Request",
            Self::Unauthorized => "Unauthorized",
            Self::NotFound => "Not Found",
            Self::Conflict => "Conflict",
            Self::InternalServerError => "Internal Server Error",
            Self::ClientAlreadyConnected => "Client Already Connected",
        }
    }

    pub const fn code_space(&self) -> CodeSpace {
        match self {
            Self::ClientAlreadyConnected => CodeSpace::PrivateClose,
            _ => CodeSpace::Standard,
        }
    }

    pub(crate) const fn index(&self) -> usize {
        *self as usize
    }
}

impl FromStr for Outcome {
    type Err = RegistryError;

    #[track_caller]
    fn from_str(s: &str) -> RegistryResult<Self> {
        match Self::ALL.iter().find(|outcome| outcome.name() == s) {
            Some(outcome) => Ok(*outcome),
            None => Err(RegistryError::UnknownOutcomeName {
                name: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
