use crate::{WireCodes, WireError};

use sr_core::{CodeSpace, Outcome, StatusRegistry};

use axum::extract::ws::Message;
use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, err};
use http::StatusCode;

// =========================================================================
// HTTP status
// =========================================================================

#[test]
fn given_standard_outcomes_when_mapped_then_match_http_constants() {
    let codes = WireCodes::new(StatusRegistry::global());

    let expected = [
        (Outcome::Success, StatusCode::OK),
        (Outcome::BadRequest, StatusCode::BAD_REQUEST),
        (Outcome::Unauthorized, StatusCode::UNAUTHORIZED),
        (Outcome::NotFound, StatusCode::NOT_FOUND),
        (Outcome::Conflict, StatusCode::CONFLICT),
        (Outcome::InternalServerError, StatusCode::INTERNAL_SERVER_ERROR),
    ];

    for (outcome, status) in expected {
        assert_eq!(codes.http_status(outcome).unwrap(), status);
    }
}

#[test]
fn given_private_outcome_when_mapped_to_http_then_code_space_mismatch() {
    let codes = WireCodes::new(StatusRegistry::global());

    let result = codes.http_status(Outcome::ClientAlreadyConnected);

    assert_that!(result, err(anything()));
    match result {
        Err(WireError::CodeSpaceMismatch {
            outcome, expected, ..
        }) => {
            assert_eq!(outcome, Outcome::ClientAlreadyConnected);
            assert_eq!(expected, CodeSpace::Standard);
        }
        other => panic!("Expected CodeSpaceMismatch, got {:?}", other),
    }
}

// =========================================================================
// Close frames
// =========================================================================

#[test]
fn given_client_already_connected_when_closing_then_frame_uses_3001() {
    let codes = WireCodes::new(StatusRegistry::global());

    let frame = codes
        .close_frame(Outcome::ClientAlreadyConnected, "Client already connected")
        .unwrap();

    assert_eq!(frame.code, 3001);
    assert_eq!(frame.reason.as_str(), "Client already connected");
}

#[test]
fn given_client_already_connected_when_building_message_then_close_message() {
    let codes = WireCodes::new(StatusRegistry::global());

    let message = codes
        .close_message(Outcome::ClientAlreadyConnected, String::from("duplicate"))
        .unwrap();

    match message {
        Message::Close(Some(frame)) => {
            assert_eq!(frame.code, 3001);
            assert!(CodeSpace::PrivateClose.contains(frame.code));
        }
        other => panic!("Expected close frame, got {:?}", other),
    }
}

#[test]
fn given_standard_outcome_when_closing_then_code_space_mismatch() {
    let codes = WireCodes::new(StatusRegistry::global());

    let result = codes.close_frame(Outcome::Unauthorized, "nope");

    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("Unauthorized"));
    assert_that!(err_msg, contains_substring("private_close"));
}

#[test]
fn given_codes_when_created_then_hold_injected_registry() {
    let codes = WireCodes::new(StatusRegistry::global());

    assert!(std::ptr::eq(codes.registry(), StatusRegistry::global()));
}

#[test]
fn given_standard_entries_when_converted_then_http_accepts_every_value() {
    let registry = StatusRegistry::global();
    let codes = WireCodes::new(registry);

    for entry in registry.in_space(CodeSpace::Standard) {
        let status = codes.http_status(entry.outcome).unwrap();
        assert_eq!(status.as_u16(), entry.value);
    }
}
