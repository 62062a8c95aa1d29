//! Error types and error reporting for the scanner.
//!
//! This module defines:
//!
//! - Lexical error variants tagged with the line they were detected on
//! - The `ErrorReporter` sink the scanner reports into
//! - A collecting reporter and a console reporter

pub mod errors;

#[cfg(test)]
mod tests;
