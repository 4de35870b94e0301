use crate::{OutcomeResponse, Result as WireErrorResult, WireError};

use sr_core::{CodeSpace, Outcome, StatusRegistry};

use std::panic::Location;

use axum::extract::ws::{CloseFrame, Message};
use error_location::ErrorLocation;
use http::StatusCode;

/// Translates outcomes into transport-level codes using an injected registry
#[derive(Debug, Clone, Copy)]
pub struct WireCodes {
    registry: &'static StatusRegistry,
}

impl WireCodes {
    pub fn new(registry: &'static StatusRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &'static StatusRegistry {
        self.registry
    }

    /// HTTP status for a standard-space outcome
    #[track_caller]
    pub fn http_status(&self, outcome: Outcome) -> WireErrorResult<StatusCode> {
        let value = self.code_in(outcome, CodeSpace::Standard)?;

        StatusCode::from_u16(value).map_err(|source| WireError::InvalidHttpStatus {
            value,
            source,
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Close frame for a private close-space outcome
    #[track_caller]
    pub fn close_frame(
        &self,
        outcome: Outcome,
        reason: impl Into<String>,
    ) -> WireErrorResult<CloseFrame> {
        let code = self.code_in(outcome, CodeSpace::PrivateClose)?;
        let reason = reason.into();

        log::debug!("Closing connection with {} ({}): {}", code, outcome, reason);

        Ok(CloseFrame {
            code,
            reason: reason.into(),
        })
    }

    #[track_caller]
    pub fn close_message(
        &self,
        outcome: Outcome,
        reason: impl Into<String>,
    ) -> WireErrorResult<Message> {
        Ok(Message::Close(Some(self.close_frame(outcome, reason)?)))
    }

    /// Build an HTTP response for a standard-space outcome
    #[track_caller]
    pub fn respond(
        &self,
        outcome: Outcome,
        message: impl Into<String>,
    ) -> WireErrorResult<OutcomeResponse> {
        let status = self.http_status(outcome)?;
        Ok(OutcomeResponse::new(outcome, status, message.into()))
    }

    #[track_caller]
    fn code_in(&self, outcome: Outcome, expected: CodeSpace) -> WireErrorResult<u16> {
        let entry = self.registry.entry(outcome);
        if entry.space != expected {
            log::warn!(
                "Outcome {} used as {} code, registered as {}",
                outcome,
                expected,
                entry.space
            );
            return Err(WireError::CodeSpaceMismatch {
                outcome,
                expected,
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(entry.value)
    }
}
