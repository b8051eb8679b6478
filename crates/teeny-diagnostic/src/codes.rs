//! Error codes for Teeny diagnostics.

/// Error codes for categorizing diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Lexer errors (E0001 - E0099)
    UnexpectedCharacter,
    UnterminatedString,
    IllegalStringCharacter,
    InvalidNumber,
    LoneBang,

    // Syntax errors (E0100 - E0199)
    UnexpectedToken,
    InvalidStatement,
    ExpectedComparison,

    // Semantic errors (E0200 - E0299)
    UndefinedVariable,
    DuplicateLabel,
    UndeclaredLabel,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            // Lexer
            ErrorCode::UnexpectedCharacter => "E0001",
            ErrorCode::UnterminatedString => "E0002",
            ErrorCode::IllegalStringCharacter => "E0003",
            ErrorCode::InvalidNumber => "E0004",
            ErrorCode::LoneBang => "E0005",

            // Syntax
            ErrorCode::UnexpectedToken => "E0100",
            ErrorCode::InvalidStatement => "E0101",
            ErrorCode::ExpectedComparison => "E0102",

            // Semantic
            ErrorCode::UndefinedVariable => "E0200",
            ErrorCode::DuplicateLabel => "E0201",
            ErrorCode::UndeclaredLabel => "E0202",
        }
    }

    /// Get a human-readable description of the error.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::UnexpectedCharacter => "unexpected character in input",
            ErrorCode::UnterminatedString => "string literal is not terminated",
            ErrorCode::IllegalStringCharacter => "character not allowed inside a string literal",
            ErrorCode::InvalidNumber => "invalid number literal",
            ErrorCode::LoneBang => "`!` must be followed by `=`",

            ErrorCode::UnexpectedToken => "unexpected token",
            ErrorCode::InvalidStatement => "token cannot start a statement",
            ErrorCode::ExpectedComparison => "expected a comparison operator",

            ErrorCode::UndefinedVariable => "variable referenced before assignment",
            ErrorCode::DuplicateLabel => "label declared more than once",
            ErrorCode::UndeclaredLabel => "GOTO targets a label that is never declared",
        }
    }

    /// Get a suggested fix for the error, if available.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            ErrorCode::IllegalStringCharacter => {
                Some("strings may not contain tabs, newlines, backslashes or `%`")
            }
            ErrorCode::InvalidNumber => Some("add at least one digit after the decimal point"),
            ErrorCode::LoneBang => Some("use `!=` for not-equal"),
            ErrorCode::ExpectedComparison => {
                Some("conditions need one of `==`, `!=`, `<`, `<=`, `>`, `>=`")
            }
            ErrorCode::UndefinedVariable => {
                Some("assign the variable with LET or INPUT on an earlier line")
            }
            ErrorCode::UndeclaredLabel => Some("declare the target with `LABEL <name>`"),
            _ => None,
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
