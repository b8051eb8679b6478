//! The Teeny parser.

use std::mem;

use teeny_common::Span;
use teeny_diagnostic::ErrorCode;
use teeny_lexer::{Lexer, Token, TokenKind};
use teeny_syntax::*;
use tracing::{debug, trace};

use crate::error::{Error, ParseError};
use crate::symbols::SymbolTable;

/// The result of a successful parse.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub program: Program,
    pub symbols: SymbolTable,
}

/// The Teeny parser.
///
/// Pulls tokens from the lexer into a `current`/`peek` window and checks
/// variable and label rules while it walks the grammar.
pub struct Parser {
    lexer: Lexer,
    current: Token,
    peek: Token,
    /// Span of the last consumed token
    previous: Span,
    symbols: SymbolTable,
}

impl Parser {
    /// Create a parser and fill the token window.
    pub fn new(mut lexer: Lexer) -> Result<Self, Error> {
        let current = lexer.next_token()?;
        let peek = lexer.next_token()?;
        Ok(Self {
            lexer,
            previous: Span::point(usize::from(current.span.start)),
            current,
            peek,
            symbols: SymbolTable::new(),
        })
    }

    pub fn current(&self) -> &Token {
        &self.current
    }

    pub fn peek(&self) -> &Token {
        &self.peek
    }

    /// program := {NEWLINE} {statement} EOF
    pub fn program(mut self) -> Result<Analysis, Error> {
        debug!("parsing program");
        let start = self.current.span;

        while self.check(TokenKind::Newline) {
            self.advance()?;
        }

        let mut statements = Vec::new();
        while !self.check(TokenKind::Eof) {
            statements.push(self.statement()?);
        }

        // Labels may be declared after the GOTO that uses them, so they are
        // only checked once everything has been seen.
        if let Some(target) = self.symbols.undeclared_labels().next() {
            return Err(ParseError::new(
                ErrorCode::UndeclaredLabel,
                target.span,
                format!("Attempting to GOTO to undeclared label: {}", target.name),
            )
            .into());
        }

        let program = Program {
            statements,
            span: start.merge(self.current.span),
        };
        debug!(
            statements = program.statement_count(),
            variables = self.symbols.variable_count(),
            labels = self.symbols.label_count(),
            "program accepted"
        );

        Ok(Analysis {
            program,
            symbols: self.symbols,
        })
    }

    fn statement(&mut self) -> Result<Stmt, Error> {
        let start = self.current.span;

        let kind = match self.current.kind {
            // "PRINT" (expression | string)
            TokenKind::Print => {
                trace!("PRINT statement");
                self.advance()?;
                if self.check(TokenKind::String) {
                    let text = self.advance()?.text;
                    StmtKind::Print(PrintArg::String(text))
                } else {
                    StmtKind::Print(PrintArg::Expr(self.expression()?))
                }
            }

            // "IF" comparison "THEN" nl {statement} "ENDIF"
            TokenKind::If => {
                trace!("IF statement");
                self.advance()?;
                let condition = self.comparison()?;
                self.expect(TokenKind::Then)?;
                self.nl()?;
                let body = self.block(TokenKind::EndIf)?;
                StmtKind::If { condition, body }
            }

            // "WHILE" comparison "REPEAT" nl {statement} "ENDWHILE"
            TokenKind::While => {
                trace!("WHILE statement");
                self.advance()?;
                let condition = self.comparison()?;
                self.expect(TokenKind::Repeat)?;
                self.nl()?;
                let body = self.block(TokenKind::EndWhile)?;
                StmtKind::While { condition, body }
            }

            // "LABEL" ident
            TokenKind::Label => {
                trace!("LABEL statement");
                self.advance()?;
                // Checked while the name is still current, before the window
                // pulls in anything after it.
                let name = self.current_ident()?;
                if let Err(first) = self.symbols.declare_label(&name) {
                    return Err(ParseError::new(
                        ErrorCode::DuplicateLabel,
                        name.span,
                        format!("Label already exists: {}", name.name),
                    )
                    .with_related(first, "first declared here")
                    .into());
                }
                self.advance()?;
                StmtKind::Label(name)
            }

            // "GOTO" ident
            TokenKind::Goto => {
                trace!("GOTO statement");
                self.advance()?;
                let target = self.ident()?;
                self.symbols.reference_label(target.clone());
                StmtKind::Goto(target)
            }

            // "LET" ident "=" expression
            TokenKind::Let => {
                trace!("LET statement");
                self.advance()?;
                let name = self.ident()?;
                self.symbols.declare_variable(&name.name);
                self.expect(TokenKind::Eq)?;
                let value = self.expression()?;
                StmtKind::Let { name, value }
            }

            // "INPUT" ident
            TokenKind::Input => {
                trace!("INPUT statement");
                self.advance()?;
                let name = self.ident()?;
                self.symbols.declare_variable(&name.name);
                StmtKind::Input(name)
            }

            _ => {
                return Err(self
                    .error(
                        ErrorCode::InvalidStatement,
                        format!(
                            "Invalid statement at {:?} ({})",
                            self.current.text, self.current.kind
                        ),
                    )
                    .into());
            }
        };

        let stmt = Stmt::new(kind, start.merge(self.previous));
        self.nl()?;
        Ok(stmt)
    }

    /// Statements up to and including the closing keyword.
    fn block(&mut self, end: TokenKind) -> Result<Vec<Stmt>, Error> {
        let mut body = Vec::new();
        while !self.check(end) {
            body.push(self.statement()?);
        }
        self.expect(end)?;
        Ok(body)
    }

    /// comparison := expression (cmp_op expression)+
    fn comparison(&mut self) -> Result<Comparison, Error> {
        let left = self.expression()?;

        if !self.current.kind.is_comparison_operator() {
            return Err(self
                .error(
                    ErrorCode::ExpectedComparison,
                    format!(
                        "Expected comparison operator at: {:?} ({})",
                        self.current.text, self.current.kind
                    ),
                )
                .into());
        }

        let mut rest = Vec::new();
        while let Some(op) = cmp_op(self.current.kind) {
            self.advance()?;
            rest.push((op, self.expression()?));
        }

        Ok(Comparison {
            span: left.span.merge(self.previous),
            left,
            rest,
        })
    }

    /// expression := term {("+" | "-") term}
    fn expression(&mut self) -> Result<Expr, Error> {
        let mut left = self.term()?;

        loop {
            let op = match self.current.kind {
                TokenKind::Plus => BinOp::Add,
                TokenKind::Minus => BinOp::Sub,
                _ => break,
            };
            self.advance()?;
            let right = self.term()?;
            left = binary(op, left, right);
        }

        Ok(left)
    }

    /// term := unary {("*" | "/") unary}
    fn term(&mut self) -> Result<Expr, Error> {
        let mut left = self.unary()?;

        loop {
            let op = match self.current.kind {
                TokenKind::Asterisk => BinOp::Mul,
                TokenKind::Slash => BinOp::Div,
                _ => break,
            };
            self.advance()?;
            let right = self.unary()?;
            left = binary(op, left, right);
        }

        Ok(left)
    }

    /// unary := ["+" | "-"] primary
    fn unary(&mut self) -> Result<Expr, Error> {
        let op = match self.current.kind {
            TokenKind::Plus => UnaryOp::Plus,
            TokenKind::Minus => UnaryOp::Neg,
            _ => return self.primary(),
        };
        let start = self.advance()?.span;
        let operand = self.primary()?;
        Ok(Expr::new(
            ExprKind::Unary {
                op,
                operand: Box::new(operand),
            },
            start.merge(self.previous),
        ))
    }

    /// primary := NUMBER | IDENT
    fn primary(&mut self) -> Result<Expr, Error> {
        match self.current.kind {
            TokenKind::Number => {
                let token = self.advance()?;
                Ok(Expr::new(ExprKind::Number(token.text), token.span))
            }
            TokenKind::Ident => {
                // Lexical order only: the assignment must appear earlier in
                // the source, whatever the control flow.
                if !self.symbols.is_variable(&self.current.text) {
                    return Err(self
                        .error(
                            ErrorCode::UndefinedVariable,
                            format!(
                                "Referencing variable before assignment: {}",
                                self.current.text
                            ),
                        )
                        .into());
                }
                let token = self.advance()?;
                let span = token.span;
                Ok(Expr::new(ExprKind::Var(Ident::new(token.text, span)), span))
            }
            _ => Err(self
                .error(
                    ErrorCode::UnexpectedToken,
                    format!(
                        "Unexpected token at {:?} ({})",
                        self.current.text, self.current.kind
                    ),
                )
                .into()),
        }
    }

    /// nl := NEWLINE {NEWLINE}
    fn nl(&mut self) -> Result<(), Error> {
        trace!("NEWLINE");
        self.expect(TokenKind::Newline)?;
        while self.check(TokenKind::Newline) {
            self.advance()?;
        }
        Ok(())
    }

    fn ident(&mut self) -> Result<Ident, Error> {
        let token = self.expect(TokenKind::Ident)?;
        Ok(Ident::new(token.text, token.span))
    }

    /// The current token as an identifier, without consuming it.
    fn current_ident(&self) -> Result<Ident, Error> {
        if !self.check(TokenKind::Ident) {
            return Err(self.expected(TokenKind::Ident).into());
        }
        Ok(Ident::new(self.current.text.clone(), self.current.span))
    }

    // ========== Token window ==========

    fn check(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    /// Shift `peek` into `current` and pull a new `peek`. Returns the token
    /// that was current.
    fn advance(&mut self) -> Result<Token, Error> {
        let next = self.lexer.next_token()?;
        let peek = mem::replace(&mut self.peek, next);
        let consumed = mem::replace(&mut self.current, peek);
        self.previous = consumed.span;
        Ok(consumed)
    }

    /// Require the current token to be `kind`, then advance past it.
    fn expect(&mut self, kind: TokenKind) -> Result<Token, Error> {
        if !self.check(kind) {
            return Err(self.expected(kind).into());
        }
        self.advance()
    }

    fn expected(&self, kind: TokenKind) -> ParseError {
        self.error(
            ErrorCode::UnexpectedToken,
            format!("Expected: {}, got: {}", kind, self.current.kind),
        )
    }

    fn error(&self, code: ErrorCode, message: String) -> ParseError {
        ParseError::new(code, self.current.span, message)
    }
}

fn cmp_op(kind: TokenKind) -> Option<CmpOp> {
    match kind {
        TokenKind::EqEq => Some(CmpOp::Eq),
        TokenKind::NotEq => Some(CmpOp::NotEq),
        TokenKind::Lt => Some(CmpOp::Lt),
        TokenKind::LtEq => Some(CmpOp::LtEq),
        TokenKind::Gt => Some(CmpOp::Gt),
        TokenKind::GtEq => Some(CmpOp::GtEq),
        _ => None,
    }
}

fn binary(op: BinOp, left: Expr, right: Expr) -> Expr {
    let span = left.span.merge(right.span);
    Expr::new(
        ExprKind::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        },
        span,
    )
}
