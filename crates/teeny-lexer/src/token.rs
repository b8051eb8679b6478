//! Token definitions for Teeny.

use std::fmt;
use teeny_common::Span;

/// A token: the raw lexeme, its kind and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// The lexeme. For strings this is the text between the quotes.
    pub text: String,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }
}

/// The kind of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Special
    Newline,
    Eof,

    // Literals
    Number,
    Ident,
    String,

    // Keywords
    Label,
    Goto,
    Print,
    Input,
    Let,
    If,
    Then,
    EndIf,
    While,
    Repeat,
    EndWhile,

    // Operators
    Eq,       // =
    EqEq,     // ==
    NotEq,    // !=
    Lt,       // <
    LtEq,     // <=
    Gt,       // >
    GtEq,     // >=
    Plus,     // +
    Minus,    // -
    Asterisk, // *
    Slash,    // /
    Pow,      // **
}

impl TokenKind {
    /// Returns true for the six relational operators allowed in a condition.
    pub fn is_comparison_operator(&self) -> bool {
        matches!(
            self,
            TokenKind::EqEq
                | TokenKind::NotEq
                | TokenKind::Lt
                | TokenKind::LtEq
                | TokenKind::Gt
                | TokenKind::GtEq
        )
    }

    /// Returns the keyword for an identifier-shaped lexeme, if any.
    /// Matching is exact and case-sensitive.
    pub fn keyword_from_str(s: &str) -> Option<TokenKind> {
        match s {
            "LABEL" => Some(TokenKind::Label),
            "GOTO" => Some(TokenKind::Goto),
            "PRINT" => Some(TokenKind::Print),
            "INPUT" => Some(TokenKind::Input),
            "LET" => Some(TokenKind::Let),
            "IF" => Some(TokenKind::If),
            "THEN" => Some(TokenKind::Then),
            "ENDIF" => Some(TokenKind::EndIf),
            "WHILE" => Some(TokenKind::While),
            "REPEAT" => Some(TokenKind::Repeat),
            "ENDWHILE" => Some(TokenKind::EndWhile),
            _ => None,
        }
    }

    /// The stable name used in diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Newline => "NEWLINE",
            TokenKind::Eof => "EOF",
            TokenKind::Number => "NUMBER",
            TokenKind::Ident => "IDENT",
            TokenKind::String => "STRING",
            TokenKind::Label => "LABEL",
            TokenKind::Goto => "GOTO",
            TokenKind::Print => "PRINT",
            TokenKind::Input => "INPUT",
            TokenKind::Let => "LET",
            TokenKind::If => "IF",
            TokenKind::Then => "THEN",
            TokenKind::EndIf => "ENDIF",
            TokenKind::While => "WHILE",
            TokenKind::Repeat => "REPEAT",
            TokenKind::EndWhile => "ENDWHILE",
            TokenKind::Eq => "EQ",
            TokenKind::EqEq => "EQEQ",
            TokenKind::NotEq => "NOTEQ",
            TokenKind::Lt => "LT",
            TokenKind::LtEq => "LTEQ",
            TokenKind::Gt => "GT",
            TokenKind::GtEq => "GTEQ",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Asterisk => "ASTERISK",
            TokenKind::Slash => "SLASH",
            TokenKind::Pow => "POW",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_lookup_is_exact() {
        assert_eq!(TokenKind::keyword_from_str("ENDIF"), Some(TokenKind::EndIf));
        assert_eq!(TokenKind::keyword_from_str("endif"), None);
        assert_eq!(TokenKind::keyword_from_str("END"), None);
        assert_eq!(TokenKind::keyword_from_str("ENDIFX"), None);
        assert_eq!(TokenKind::keyword_from_str("NEWLINE"), None);
    }

    #[test]
    fn test_every_keyword_round_trips_through_its_name() {
        let keywords = [
            TokenKind::Label,
            TokenKind::Goto,
            TokenKind::Print,
            TokenKind::Input,
            TokenKind::Let,
            TokenKind::If,
            TokenKind::Then,
            TokenKind::EndIf,
            TokenKind::While,
            TokenKind::Repeat,
            TokenKind::EndWhile,
        ];
        for kw in keywords {
            assert_eq!(TokenKind::keyword_from_str(kw.as_str()), Some(kw));
        }
    }

    #[test]
    fn test_comparison_operators() {
        assert!(TokenKind::GtEq.is_comparison_operator());
        assert!(!TokenKind::Eq.is_comparison_operator());
        assert!(!TokenKind::Pow.is_comparison_operator());
    }
}
