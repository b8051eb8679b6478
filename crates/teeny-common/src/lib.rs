//! Common data structures for Teeny.
//!
//! This crate provides the source location types used across the front end:
//! - `BytePos`: an offset into the source text
//! - `Span`: a half-open byte range attached to tokens, nodes and diagnostics

mod span;

pub use span::{BytePos, Span};
