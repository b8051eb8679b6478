//! CLI command implementations.

pub mod check;
pub mod tokens;

use std::fs;
use std::io::{self, Read};

/// Read a whole source file; `-` means standard input.
pub fn read_source(file: &str) -> Result<String, String> {
    if file == "-" {
        let mut source = String::new();
        io::stdin()
            .read_to_string(&mut source)
            .map_err(|e| format!("cannot read stdin: {}", e))?;
        return Ok(source);
    }
    fs::read_to_string(file).map_err(|e| format!("cannot read file '{}': {}", file, e))
}

/// How front-end errors are shown.
#[derive(Debug, Clone, Copy, Default)]
pub struct Reporting {
    /// Only the one-line prefixed message
    pub brief: bool,
    pub color: bool,
    /// Print nothing at all
    pub quiet: bool,
}

/// Report a front-end error on stderr.
pub fn report(source: &str, file: &str, error: &teeny_parser::Error, how: Reporting) {
    if let Some(text) = format_error(source, file, error, how) {
        eprint!("{text}");
    }
}

fn format_error(
    source: &str,
    file: &str,
    error: &teeny_parser::Error,
    how: Reporting,
) -> Option<String> {
    if how.quiet {
        return None;
    }
    if how.brief {
        return Some(format!("{error}\n"));
    }
    let diagnostic = error.to_diagnostic();
    match teeny_diagnostic::render(source, file, &diagnostic, how.color) {
        Ok(text) => Some(text),
        Err(_) => Some(format!("{error}\n")),
    }
}
