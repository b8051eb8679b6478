//! Program and statement nodes.
//! 程序和语句节点。

use crate::{Comparison, Expr};
use teeny_common::Span;

/// An identifier with its location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
    pub name: String,
    pub span: Span,
}

impl Ident {
    pub fn new(name: impl Into<String>, span: Span) -> Self {
        Self {
            name: name.into(),
            span,
        }
    }
}

/// A whole program: statements in source order.
#[derive(Debug, Clone)]
pub struct Program {
    pub statements: Vec<Stmt>,
    pub span: Span,
}

impl Program {
    /// Count every statement, including those nested in IF/WHILE bodies.
    pub fn statement_count(&self) -> usize {
        fn count(stmts: &[Stmt]) -> usize {
            stmts
                .iter()
                .map(|stmt| match &stmt.kind {
                    StmtKind::If { body, .. } | StmtKind::While { body, .. } => 1 + count(body),
                    _ => 1,
                })
                .sum()
        }
        count(&self.statements)
    }
}

/// A statement.
/// 语句。
#[derive(Debug, Clone)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

impl Stmt {
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// Statement kind.
/// 语句类型。
#[derive(Debug, Clone)]
pub enum StmtKind {
    /// `PRINT expr` or `PRINT "text"`
    Print(PrintArg),
    /// `IF cmp THEN ... ENDIF`
    If { condition: Comparison, body: Vec<Stmt> },
    /// `WHILE cmp REPEAT ... ENDWHILE`
    While { condition: Comparison, body: Vec<Stmt> },
    /// `LABEL name`
    Label(Ident),
    /// `GOTO name`
    Goto(Ident),
    /// `LET name = expr`
    Let { name: Ident, value: Expr },
    /// `INPUT name`
    Input(Ident),
}

/// The operand of a PRINT statement.
#[derive(Debug, Clone)]
pub enum PrintArg {
    Expr(Expr),
    /// String contents without the quotes.
    String(String),
}
