//! The `teeny tokens` command.

use super::Reporting;
use teeny_lexer::{Lexer, Token};

/// Print every token of a file, one per line.
pub fn run(file: &str, how: Reporting) -> Result<(), String> {
    let source = super::read_source(file)?;

    match Lexer::new(&source).tokenize() {
        Ok(tokens) => {
            for token in &tokens {
                println!("{}", format_token(token));
            }
            Ok(())
        }
        Err(e) => {
            super::report(&source, file, &e.into(), how);
            Err("lexing error".to_string())
        }
    }
}

fn format_token(token: &Token) -> String {
    let text = format!("{:?}", token.text);
    format!("{:<9} {:<12} {}", token.kind, text, token.span)
}
