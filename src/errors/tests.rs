//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use std::{error::Error as _, io};

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::Position;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        Position(10, 2),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_source_line(), None);
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::NumberParseError {
            token: "99999999999".to_string(),
        },
        Position(42, 7),
    );

    assert_eq!(error.get_line(), 42);
    assert_eq!(error.get_position().1, 7);
    assert_eq!(error.get_error_name(), "NumberParseError");
}

#[test]
fn test_error_display() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "\"abc".to_string(),
        },
        Position(3, 0),
    );

    assert_eq!(error.to_string(), "unrecognised token: \"\\\"abc\" at line 3");
}

#[test]
fn test_io_error_keeps_source() {
    let error = Error::new(
        io::Error::new(io::ErrorKind::UnexpectedEof, "stream closed").into(),
        Position(5, 0),
    );

    assert_eq!(error.get_error_name(), "Io");
    assert_eq!(error.source().unwrap().to_string(), "stream closed");
}

#[test]
fn test_error_chain_does_not_repeat_message() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        Position(1, 0),
    );

    assert!(error.source().is_none());
    assert_eq!(
        anyhow::Error::new(error).to_string(),
        "unrecognised token: \"@\" at line 1"
    );
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "#".to_string(),
        },
        Position(1, 0),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_unterminated_string() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "\"abc".to_string(),
        },
        Position(1, 0),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.starts_with("Unterminated string literal")),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}
