//! Lexing errors.

use teeny_common::Span;
use teeny_diagnostic::{Diagnostic, DiagnosticKind, ErrorCode};
use thiserror::Error;

/// A fatal scanning error. Scanning stops at the first one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("[Lexing error] {message}")]
pub struct LexError {
    pub code: ErrorCode,
    pub message: String,
    pub span: Span,
}

impl LexError {
    pub fn new(code: ErrorCode, span: Span, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            span,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(DiagnosticKind::Lexer, self.span, self.to_string()).with_code(self.code)
    }
}
