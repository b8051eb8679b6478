//! Syntax tree definitions for Teeny.
//!
//! The parser validates by traversal; the tree built along the way is what a
//! later code generator would consume.

mod ast;
mod expr;

pub use ast::*;
pub use expr::*;
