//! Lexical analysis module.
//!
//! This module contains the scanner that converts source text into a
//! stream of tokens for a parser. It handles:
//!
//! - One and two character operators with a single character of lookahead
//! - Number and string literals
//! - Keywords and identifiers
//! - Line tracking for error reporting
//! - Comments and whitespace handling

pub mod lexer;
pub mod tokens;
