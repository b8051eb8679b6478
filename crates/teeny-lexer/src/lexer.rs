//! The Teeny lexer.
//! Teeny 词法分析器。

use crate::error::LexError;
use crate::token::{Token, TokenKind};
use teeny_common::Span;
use teeny_diagnostic::ErrorCode;
use tracing::trace;

/// The Teeny lexer.
/// Teeny 词法分析器。
///
/// Produces one token per `next_token` call. The cursor only moves forward.
/// 每次调用 `next_token` 产生一个 token，游标只会向前移动。
pub struct Lexer {
    /// Source text with a trailing newline appended
    /// 追加了结尾换行符的源码
    source: String,
    /// Byte offset of `current`
    /// `current` 的字节偏移
    pos: usize,
    /// Character under the cursor, `None` at end of input
    /// 游标处的字符，输入结束时为 `None`
    current: Option<char>,
}

impl Lexer {
    /// Create a new lexer for the given source code.
    /// 为给定的源代码创建新的词法分析器。
    ///
    /// A newline is appended so the last statement is always terminated.
    /// 追加一个换行符，保证最后一条语句总是以换行结束。
    pub fn new(source: &str) -> Self {
        let mut source = source.to_owned();
        source.push('\n');
        let current = source.chars().next();
        Self {
            source,
            pos: 0,
            current,
        }
    }

    /// Tokenize the entire source, up to and including EOF.
    /// 对整个源代码进行词法分析，直到并包括 EOF。
    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token()?;
            let is_eof = token.kind == TokenKind::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }

        Ok(tokens)
    }

    /// Return the character after the cursor without consuming anything.
    /// 查看游标后的下一个字符但不消耗它。
    pub fn peek(&self) -> Option<char> {
        let ch = self.current?;
        self.source[self.pos + ch.len_utf8()..].chars().next()
    }

    /// Scan the next token.
    /// 扫描下一个 token。
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace();
        self.skip_comment();

        let start = self.pos;

        // End of input - 输入结束
        let Some(ch) = self.current else {
            return Ok(Token::new(TokenKind::Eof, "", Span::point(start)));
        };

        let kind = match ch {
            '\n' => TokenKind::Newline,
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '/' => TokenKind::Slash,

            // Multiply or power - 乘号或乘方
            '*' => self.one_or_two('*', TokenKind::Pow, TokenKind::Asterisk),

            // Assignment or equality - 赋值或相等
            '=' => self.one_or_two('=', TokenKind::EqEq, TokenKind::Eq),

            '>' => self.one_or_two('=', TokenKind::GtEq, TokenKind::Gt),
            '<' => self.one_or_two('=', TokenKind::LtEq, TokenKind::Lt),

            // `!` only exists as part of `!=` - `!` 只能作为 `!=` 的一部分
            '!' => {
                if self.peek() == Some('=') {
                    self.advance();
                    TokenKind::NotEq
                } else {
                    let follower = match self.peek() {
                        Some(next) => format!("{next:?}"),
                        None => "end of input".to_string(),
                    };
                    return Err(LexError::new(
                        ErrorCode::LoneBang,
                        Span::from_usize(start, self.token_end()),
                        format!("Expected !=, got ! followed by {follower}"),
                    ));
                }
            }

            // String literal - 字符串字面量
            '"' => {
                self.string_literal(start)?;
                TokenKind::String
            }

            // Numbers - 数字
            c if c.is_ascii_digit() => {
                self.number(start)?;
                TokenKind::Number
            }

            // Identifiers and keywords - 标识符和关键字
            c if c.is_alphabetic() => self.identifier(start),

            _ => {
                return Err(LexError::new(
                    ErrorCode::UnexpectedCharacter,
                    Span::from_usize(start, self.token_end()),
                    format!("Unknown token: {ch:?}"),
                ));
            }
        };

        let end = self.token_end();
        let text = match kind {
            // Drop the quotes - 去掉引号
            TokenKind::String => &self.source[start + 1..self.pos],
            _ => &self.source[start..end],
        };
        let token = Token::new(kind, text, Span::from_usize(start, end));
        trace!(kind = %token.kind, text = ?token.text, span = %token.span, "token");

        // Step past the token so the next call starts cleanly.
        self.advance();
        Ok(token)
    }

    /// Advance to the next character.
    /// 前进到下一个字符。
    fn advance(&mut self) {
        if let Some(ch) = self.current {
            self.pos += ch.len_utf8();
            self.current = self.source[self.pos..].chars().next();
        }
    }

    /// Byte offset just past the character under the cursor.
    fn token_end(&self) -> usize {
        self.pos + self.current.map_or(0, char::len_utf8)
    }

    /// Pick the two-character kind when the next character is `second`.
    /// 如果下一个字符是 `second`，选择双字符 token。
    fn one_or_two(&mut self, second: char, double: TokenKind, single: TokenKind) -> TokenKind {
        if self.peek() == Some(second) {
            self.advance();
            double
        } else {
            single
        }
    }

    /// Skip spaces, tabs and carriage returns. Newlines are tokens.
    /// 跳过空格、制表符和回车；换行符是 token。
    fn skip_whitespace(&mut self) {
        while matches!(self.current, Some(' ' | '\t' | '\r')) {
            self.advance();
        }
    }

    /// Skip a `#` comment up to, but not including, the newline.
    /// 跳过 `#` 注释，直到换行符（不包含换行符）。
    fn skip_comment(&mut self) {
        if self.current == Some('#') {
            while !matches!(self.current, Some('\n') | None) {
                self.advance();
            }
        }
    }

    /// Scan a string literal. Leaves the cursor on the closing quote.
    /// 扫描字符串字面量，游标停在右引号上。
    fn string_literal(&mut self, start: usize) -> Result<(), LexError> {
        self.advance();

        loop {
            match self.current {
                Some('"') => return Ok(()),
                Some(ch @ ('\r' | '\n' | '\t' | '\\' | '%')) => {
                    return Err(LexError::new(
                        ErrorCode::IllegalStringCharacter,
                        Span::from_usize(self.pos, self.token_end()),
                        format!("Illegal character in string: {ch:?}"),
                    ));
                }
                Some(_) => self.advance(),
                None => {
                    return Err(LexError::new(
                        ErrorCode::UnterminatedString,
                        Span::from_usize(start, self.pos),
                        "Unterminated string",
                    ));
                }
            }
        }
    }

    /// Scan digits with an optional fractional part. Leaves the cursor on the
    /// last digit.
    /// 扫描数字及可选的小数部分，游标停在最后一位数字上。
    fn number(&mut self, start: usize) -> Result<(), LexError> {
        self.eat_digits();

        // Decimal part - 小数部分
        if self.peek() == Some('.') {
            self.advance();

            // At least one digit after the point - 小数点后至少一位数字
            if !self.peek().is_some_and(|c| c.is_ascii_digit()) {
                return Err(LexError::new(
                    ErrorCode::InvalidNumber,
                    Span::from_usize(start, self.token_end()),
                    "Illegal character in number",
                ));
            }
            self.eat_digits();
        }

        Ok(())
    }

    fn eat_digits(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }
    }

    /// Scan an identifier and classify it as a keyword if it is one.
    /// 扫描标识符，如果是关键字则归类为关键字。
    fn identifier(&mut self, start: usize) -> TokenKind {
        while self.peek().is_some_and(char::is_alphanumeric) {
            self.advance();
        }

        let text = &self.source[start..self.token_end()];
        TokenKind::keyword_from_str(text).unwrap_or(TokenKind::Ident)
    }
}
