use tracing::{debug, trace};

use crate::{
    errors::errors::{Error, ErrorImpl, ErrorReporter},
    MK_TOKEN,
};

use super::tokens::{Literal, Token, TokenKind, RESERVED_LOOKUP};

/// Single-pass scanner over one source snapshot.
///
/// `start` marks the first character of the lexeme being recognised and
/// `current` the next unconsumed character. Both only move forward, and
/// `scan_tokens` consumes the scanner so it cannot be run twice.
pub struct Scanner {
    source: Vec<char>,
    tokens: Vec<Token>,
    start: usize,
    current: usize,
    line: usize,
}

impl Scanner {
    pub fn new(source: &str) -> Scanner {
        Scanner {
            source: source.chars().collect(),
            tokens: vec![],
            start: 0,
            current: 0,
            line: 1,
        }
    }

    pub fn scan_tokens<R: ErrorReporter + ?Sized>(mut self, reporter: &mut R) -> Vec<Token> {
        debug!(chars = self.source.len(), "scanning source");
        let mut errors = 0usize;

        while !self.at_eof() {
            self.start = self.current;
            if let Err(error) = self.scan_token() {
                debug!(line = error.get_line(), %error, "lexical error");
                errors += 1;
                reporter.report(error);
            }
        }

        self.tokens
            .push(MK_TOKEN!(TokenKind::EOF, String::new(), None, self.line));
        debug!(tokens = self.tokens.len(), errors, lines = self.line, "scan finished");
        self.tokens
    }

    /// Recognises exactly one lexeme starting at `start`.
    fn scan_token(&mut self) -> Result<(), Error> {
        let c = self.advance();

        match c {
            '(' => self.add_token(TokenKind::LeftParen),
            ')' => self.add_token(TokenKind::RightParen),
            '{' => self.add_token(TokenKind::LeftBrace),
            '}' => self.add_token(TokenKind::RightBrace),
            ',' => self.add_token(TokenKind::Comma),
            '.' => self.add_token(TokenKind::Dot),
            '-' => self.add_token(TokenKind::Minus),
            '+' => self.add_token(TokenKind::Plus),
            ';' => self.add_token(TokenKind::Semicolon),
            '*' => self.add_token(TokenKind::Star),

            '!' => {
                let kind = if self.matches('=') { TokenKind::BangEqual } else { TokenKind::Bang };
                self.add_token(kind);
            }
            '=' => {
                let kind = if self.matches('=') { TokenKind::EqualEqual } else { TokenKind::Equal };
                self.add_token(kind);
            }
            '>' => {
                let kind = if self.matches('=') { TokenKind::GreaterEqual } else { TokenKind::Greater };
                self.add_token(kind);
            }
            '<' => {
                let kind = if self.matches('=') { TokenKind::LessEqual } else { TokenKind::Less };
                self.add_token(kind);
            }

            '/' => {
                if self.matches('/') {
                    // The newline is left for the main loop so it bumps `line`.
                    while self.peek() != '\n' && !self.at_eof() {
                        self.advance();
                    }
                } else {
                    self.add_token(TokenKind::Slash);
                }
            }

            ' ' | '\t' | '\r' => {}
            '\n' => self.line += 1,

            '"' => return self.string(),

            c if is_digit(c) => return self.number(),
            c if is_alpha(c) => self.identifier(),

            character => {
                return Err(Error::new(ErrorImpl::UnexpectedCharacter { character }, self.line));
            }
        }

        Ok(())
    }

    fn string(&mut self) -> Result<(), Error> {
        while self.peek() != '"' && !self.at_eof() {
            if self.peek() == '\n' {
                self.line += 1;
            }
            self.advance();
        }

        if self.at_eof() {
            return Err(Error::new(ErrorImpl::UnterminatedString, self.line));
        }

        // closing quote
        self.advance();

        let value = self.source[(self.start + 1)..(self.current - 1)].iter().collect::<String>();
        self.add_literal_token(TokenKind::String, Some(Literal::String(value)));
        Ok(())
    }

    fn number(&mut self) -> Result<(), Error> {
        while is_digit(self.peek()) {
            self.advance();
        }

        // A trailing '.' with no digit after it belongs to the next token.
        if self.peek() == '.' && is_digit(self.peek_next()) {
            self.advance();

            while is_digit(self.peek()) {
                self.advance();
            }
        }

        let text = self.lexeme();
        match text.parse::<f64>() {
            Ok(value) => {
                self.add_literal_token(TokenKind::Number, Some(Literal::Number(value)));
                Ok(())
            }
            Err(_) => Err(Error::new(ErrorImpl::NumberParseError { token: text }, self.line)),
        }
    }

    fn identifier(&mut self) {
        while is_alpha_numeric(self.peek()) {
            self.advance();
        }

        let text = self.lexeme();
        let kind = RESERVED_LOOKUP
            .get(text.as_str())
            .copied()
            .unwrap_or(TokenKind::Identifier);

        self.add_token(kind);
    }

    fn add_token(&mut self, kind: TokenKind) {
        self.add_literal_token(kind, None);
    }

    fn add_literal_token(&mut self, kind: TokenKind, literal: Option<Literal>) {
        let token = MK_TOKEN!(kind, self.lexeme(), literal, self.line);
        trace!(%token, line = token.line, "token");
        self.tokens.push(token);
    }

    fn lexeme(&self) -> String {
        self.source[self.start..self.current].iter().collect()
    }

    /// Consumes the next character if it is `expected`.
    pub fn matches(&mut self, expected: char) -> bool {
        if self.at_eof() || self.source[self.current] != expected {
            return false;
        }

        self.current += 1;
        true
    }

    /// Callers check `at_eof` first; past the end this yields `'\0'`
    /// without moving the cursor.
    pub fn advance(&mut self) -> char {
        match self.source.get(self.current) {
            Some(&c) => {
                self.current += 1;
                c
            }
            None => '\0',
        }
    }

    pub fn peek(&self) -> char {
        self.source.get(self.current).copied().unwrap_or('\0')
    }

    pub fn peek_next(&self) -> char {
        self.source.get(self.current + 1).copied().unwrap_or('\0')
    }

    pub fn at_eof(&self) -> bool {
        self.current >= self.source.len()
    }
}

fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_alpha(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_alpha_numeric(c: char) -> bool {
    is_alpha(c) || is_digit(c)
}

/// Scans `source` in one pass, reporting lexical errors to `reporter`.
///
/// The returned tokens always end with a single [`TokenKind::EOF`], even
/// when errors were reported; check the reporter before trusting them.
pub fn tokenize<R: ErrorReporter + ?Sized>(source: &str, reporter: &mut R) -> Vec<Token> {
    Scanner::new(source).scan_tokens(reporter)
}
