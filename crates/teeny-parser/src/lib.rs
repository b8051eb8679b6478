//! Parser for Teeny.
//!
//! A recursive descent parser over a two-token window. Besides building the
//! syntax tree it enforces the two semantic rules of the language: variables
//! are assigned before they are read, and every GOTO target is declared
//! somewhere in the program.
//!
//! ## Errors
//!
//! There is no recovery. The first lexing, syntax or semantic error stops
//! the run and is returned to the caller.

mod error;
mod parser;
mod symbols;

pub use error::{Error, ParseError};
pub use parser::{Analysis, Parser};
pub use symbols::SymbolTable;

use teeny_lexer::Lexer;

/// Parse and check source code. Every call starts from fresh state.
pub fn parse(source: &str) -> Result<Analysis, Error> {
    let lexer = Lexer::new(source);
    Parser::new(lexer)?.program()
}
