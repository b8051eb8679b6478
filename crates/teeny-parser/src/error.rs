//! Parse errors and the combined front-end error.

use teeny_common::Span;
use teeny_diagnostic::{Diagnostic, DiagnosticKind, ErrorCode, Label};
use teeny_lexer::LexError;

/// A fatal syntax or semantic error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("[Error parsing] {message}")]
pub struct ParseError {
    pub code: ErrorCode,
    pub message: String,
    pub span: Span,
    /// A second location worth pointing at, e.g. the first declaration of a
    /// duplicated label.
    pub related: Option<(Span, String)>,
}

impl ParseError {
    pub fn new(code: ErrorCode, span: Span, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            span,
            related: None,
        }
    }

    pub fn with_related(mut self, span: Span, message: impl Into<String>) -> Self {
        self.related = Some((span, message.into()));
        self
    }

    /// True for definition/label violations, false for grammar mismatches.
    pub fn is_semantic(&self) -> bool {
        matches!(
            self.code,
            ErrorCode::UndefinedVariable | ErrorCode::DuplicateLabel | ErrorCode::UndeclaredLabel
        )
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let kind = if self.is_semantic() {
            DiagnosticKind::Semantic
        } else {
            DiagnosticKind::Parser
        };
        let mut diagnostic =
            Diagnostic::error(kind, self.span, self.to_string()).with_code(self.code);
        if let Some((span, message)) = &self.related {
            diagnostic = diagnostic.with_label(Label::new(*span, message.clone()));
        }
        if self.code == ErrorCode::UndefinedVariable {
            diagnostic = diagnostic
                .with_note("definitions are checked in source order, not by control flow");
        }
        diagnostic
    }
}

/// Any error the front end can stop with.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl Error {
    pub fn code(&self) -> ErrorCode {
        match self {
            Error::Lex(e) => e.code,
            Error::Parse(e) => e.code,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            Error::Lex(e) => e.to_diagnostic(),
            Error::Parse(e) => e.to_diagnostic(),
        }
    }
}
