use std::ops::Range;

use serde::{Deserialize, Serialize};

const STANDARD_RANGE: Range<u16> = 200..600;
const PRIVATE_CLOSE_RANGE: Range<u16> = 3000..4000;

/// Numeric space a status code belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CodeSpace {
    /// HTTP response status (2xx, 4xx, 5xx)
    Standard,
    /// Application-defined WebSocket close codes, 3000..4000
    PrivateClose,
}

impl CodeSpace {
    pub const fn range(&self) -> Range<u16> {
        match self {
            Self::Standard => STANDARD_RANGE,
            Self::PrivateClose => PRIVATE_CLOSE_RANGE,
        }
    }

    pub const fn contains(&self, value: u16) -> bool {
        let range = self.range();
        value >= range.start && value < range.end
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::PrivateClose => "private_close",
        }
    }
}

impl std::fmt::Display for CodeSpace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
