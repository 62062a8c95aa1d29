#![allow(clippy::module_inception)]

use std::sync::Once;

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod macros;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Nothing is installed unless `RUST_LOG` is
/// set, e.g. `RUST_LOG=lox=debug` or `RUST_LOG=lox=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(std::io::stderr).with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

/// Returns the text of the 1-based `line` in `content`, without its line ending.
pub fn get_line(content: &str, line: usize) -> Option<&str> {
    if line == 0 {
        return None;
    }

    content
        .split('\n')
        .nth(line - 1)
        .map(|text| text.strip_suffix('\r').unwrap_or(text))
}

#[cfg(test)]
mod tests {
    use crate::errors::errors::{Error, ErrorImpl};

    #[test]
    fn test_get_line() {
        let content = "Hello, world!\nsecond\r\n\nTesting { }\n";
        assert_eq!(super::get_line(content, 1), Some("Hello, world!"));
        assert_eq!(super::get_line(content, 2), Some("second"));
        assert_eq!(super::get_line(content, 3), Some(""));
        assert_eq!(super::get_line(content, 4), Some("Testing { }"));
        assert_eq!(super::get_line(content, 0), None);
        assert_eq!(super::get_line(content, 9), None);
    }

    #[test]
    fn test_display_error() {
        let source = "var a = 1;\nvar b = @;\n";
        let error = Error::new(ErrorImpl::UnexpectedCharacter { character: '@' }, 2);
        let rendered = super::display_error(&error, source, "main.lox");

        assert_eq!(
            rendered,
            "[line 2] Error: Unexpected character. (`@` cannot start any token)\n\
             -> main.lox\n   |\n 2 | var b = @;\n"
        );
    }

    #[test]
    fn test_display_error_line_past_end() {
        let error = Error::new(ErrorImpl::UnterminatedString, 7);
        let rendered = super::display_error(&error, "\"abc", "shell");

        assert!(rendered.starts_with("[line 7] Error: Unterminated string."));
        assert!(rendered.ends_with("-> shell\n"));
    }
}

/// Renders an error the way the command line reports it:
///
/// ```text
/// [line 2] Error: Unexpected character. (`@` cannot start any token)
/// -> main.lox
///    |
///  2 | var b = @;
/// ```
pub fn display_error(error: &Error, source: &str, file: &str) -> String {
    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("{}\n", error));
    } else {
        out.push_str(&format!("{} ({})\n", error, error.get_tip()));
    }
    out.push_str(&format!("-> {}\n", file));

    if let Some(line_text) = get_line(source, error.get_line()) {
        let line_string = error.get_line().to_string();
        let padding = line_string.len() + 3;

        out.push_str(&format!("{:>padding$}\n", "|"));
        out.push_str(&format!(" {} | {}\n", line_string, line_text.trim()));
    }

    out
}
