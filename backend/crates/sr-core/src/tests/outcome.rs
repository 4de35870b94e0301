use crate::{CodeSpace, Outcome, RegistryError};

use std::str::FromStr;

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, err};

#[test]
fn given_every_outcome_when_named_then_name_parses_back() {
    for outcome in Outcome::ALL {
        assert_eq!(Outcome::from_str(outcome.name()).unwrap(), outcome);
        assert_eq!(outcome.to_string(), outcome.name());
    }
}

#[test]
fn given_name_with_different_case_when_parsed_then_error() {
    let result = Outcome::from_str("not found");

    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("not found"));
}

#[test]
fn given_unknown_name_when_parsed_then_error_carries_name() {
    match Outcome::from_str("Does Not Exist") {
        Err(RegistryError::UnknownOutcomeName { name, .. }) => {
            assert_eq!(name, "Does Not Exist");
        }
        other => panic!("Expected UnknownOutcomeName, got {:?}", other),
    }
}

#[test]
fn given_outcomes_when_classified_then_only_client_already_connected_is_private() {
    for outcome in Outcome::ALL {
        let expected = match outcome {
            Outcome::ClientAlreadyConnected => CodeSpace::PrivateClose,
            _ => CodeSpace::Standard,
        };
        assert_eq!(outcome.code_space(), expected);
    }
}

#[test]
fn given_outcome_when_serialized_then_uses_outcome_name() {
    let json = serde_json::to_string(&Outcome::InternalServerError).unwrap();
    assert_eq!(json, "\"Internal Server Error\"");

    let parsed: Outcome = serde_json::from_str("\"Client Already Connected\"").unwrap();
    assert_eq!(parsed, Outcome::ClientAlreadyConnected);
}

#[test]
fn given_code_space_when_checked_then_bounds_are_half_open() {
    assert!(CodeSpace::Standard.contains(200));
    assert!(CodeSpace::Standard.contains(599));
    assert!(!CodeSpace::Standard.contains(600));
    assert!(!CodeSpace::Standard.contains(199));

    assert!(CodeSpace::PrivateClose.contains(3000));
    assert!(CodeSpace::PrivateClose.contains(3999));
    assert!(!CodeSpace::PrivateClose.contains(4000));
    assert!(!CodeSpace::PrivateClose.contains(1000));
}
