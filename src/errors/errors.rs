use std::fmt::Display;

use thiserror::Error;

use crate::display_error;

#[derive(Error, Debug, Clone, PartialEq)]
#[error("[line {line}] Error: {internal_error}")]
pub struct Error {
    internal_error: ErrorImpl,
    line: usize,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, line: usize) -> Self {
        Error {
            internal_error: error_impl,
            line,
        }
    }

    pub fn get_line(&self) -> usize {
        self.line
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// The bare diagnostic text, without the line prefix.
    pub fn message(&self) -> String {
        self.internal_error.to_string()
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::UnexpectedCharacter { .. } => "UnexpectedCharacter",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnterminatedString => {
                ErrorTip::Suggestion(String::from("Add a closing `\"` to end the string"))
            }
            ErrorImpl::UnexpectedCharacter { character } => ErrorTip::Suggestion(format!(
                "`{}` cannot start any token",
                character
            )),
            ErrorImpl::NumberParseError { .. } => ErrorTip::None,
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("Unterminated string.")]
    UnterminatedString,
    #[error("Unexpected character.")]
    UnexpectedCharacter { character: char },
    #[error("Invalid number literal {token:?}.")]
    NumberParseError { token: String },
}

/// Sink for lexical errors. The scanner calls `report` as soon as an error
/// is detected and then carries on scanning.
pub trait ErrorReporter {
    fn report(&mut self, error: Error);
}

/// Collects every reported error.
#[derive(Debug, Default, Clone)]
pub struct Diagnostics {
    errors: Vec<Error>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Diagnostics::default()
    }

    pub fn had_error(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<Error> {
        self.errors
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl ErrorReporter for Diagnostics {
    fn report(&mut self, error: Error) {
        self.errors.push(error);
    }
}

/// Prints errors to stderr against the source they came from.
pub struct ConsoleReporter<'s> {
    source: &'s str,
    file: &'s str,
    had_error: bool,
}

impl<'s> ConsoleReporter<'s> {
    pub fn new(source: &'s str, file: &'s str) -> Self {
        ConsoleReporter {
            source,
            file,
            had_error: false,
        }
    }

    pub fn had_error(&self) -> bool {
        self.had_error
    }
}

impl ErrorReporter for ConsoleReporter<'_> {
    fn report(&mut self, error: Error) {
        eprint!("{}", display_error(&error, self.source, self.file));
        self.had_error = true;
    }
}
