use sr_core::Outcome;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// JSON body sent alongside the status code
#[derive(Debug, Serialize)]
pub struct OutcomeResponseBody {
    pub outcome: Outcome,
    pub code: u16,
    pub message: String,
}

/// HTTP response whose status comes from the registry
#[derive(Debug)]
pub struct OutcomeResponse {
    status: StatusCode,
    body: OutcomeResponseBody,
}

impl OutcomeResponse {
    pub(crate) fn new(outcome: Outcome, status: StatusCode, message: String) -> Self {
        Self {
            status,
            body: OutcomeResponseBody {
                outcome,
                code: status.as_u16(),
                message,
            },
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn outcome(&self) -> Outcome {
        self.body.outcome
    }
}

impl IntoResponse for OutcomeResponse {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            log::error!("{}: {}", self.body.outcome, self.body.message);
        }

        (self.status, Json(self.body)).into_response()
    }
}
