//! Lexical analysis for Teeny.
//! Teeny 词法分析模块。
//!
//! This crate provides the scanner that turns source text into tokens,
//! one token per call.
//! 本 crate 提供扫描器，每次调用产生一个 token。

mod error;
mod lexer;
mod token;

pub use error::LexError;
pub use lexer::Lexer;
pub use token::{Token, TokenKind};
