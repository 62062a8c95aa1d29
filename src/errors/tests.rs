//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{ConsoleReporter, Diagnostics, Error, ErrorImpl, ErrorReporter, ErrorTip};

#[test]
fn test_error_creation() {
    let error = Error::new(ErrorImpl::UnexpectedCharacter { character: '@' }, 10);

    assert_eq!(error.get_error_name(), "UnexpectedCharacter");
    assert_eq!(error.get_line(), 10);
}

#[test]
fn test_unterminated_string_error() {
    let error = Error::new(ErrorImpl::UnterminatedString, 3);

    assert_eq!(error.get_error_name(), "UnterminatedString");
    assert_eq!(error.message(), "Unterminated string.");
    assert_eq!(error.get_kind(), &ErrorImpl::UnterminatedString);
}

#[test]
fn test_number_parse_error() {
    let error = Error::new(
        ErrorImpl::NumberParseError {
            token: "1e".to_string(),
        },
        1,
    );

    assert_eq!(error.get_error_name(), "NumberParseError");
    assert_eq!(error.message(), "Invalid number literal \"1e\".");
}

#[test]
fn test_error_display_has_line_prefix() {
    let error = Error::new(ErrorImpl::UnexpectedCharacter { character: '#' }, 4);

    assert_eq!(error.to_string(), "[line 4] Error: Unexpected character.");
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::NumberParseError {
            token: "9".to_string(),
        },
        0,
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(ErrorImpl::UnexpectedCharacter { character: '$' }, 1);

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert_eq!(tip, "`$` cannot start any token"),
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

#[test]
fn test_diagnostics_collects_in_order() {
    let mut diagnostics = Diagnostics::new();
    assert!(!diagnostics.had_error());
    assert!(diagnostics.is_empty());

    diagnostics.report(Error::new(ErrorImpl::UnexpectedCharacter { character: '@' }, 1));
    diagnostics.report(Error::new(ErrorImpl::UnterminatedString, 2));

    assert!(diagnostics.had_error());
    assert_eq!(diagnostics.len(), 2);
    assert_eq!(diagnostics.errors()[0].get_line(), 1);

    let errors = diagnostics.into_errors();
    assert_eq!(errors[1].get_error_name(), "UnterminatedString");
}

#[test]
fn test_console_reporter_sets_flag() {
    let mut reporter = ConsoleReporter::new("@", "test.lox");
    assert!(!reporter.had_error());

    reporter.report(Error::new(ErrorImpl::UnexpectedCharacter { character: '@' }, 1));
    assert!(reporter.had_error());
}
