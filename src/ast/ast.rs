use std::fmt::Display;

use crate::Span;

use super::{
    expressions::{BinaryExpr, CallExpr, LiteralExpr, SymbolExpr, VarDeclExpr},
    statements::{FnDefStmt, ImportStmt},
};

/// Expression Types
///
/// Defines the various kinds of expressions in the AST.
#[derive(PartialEq, Clone, Copy, Debug)]
pub enum ExprType {
    Literal,
    Symbol,
    Binary,
    Call,
    VarDecl,
}

/// Expression node
///
/// Every child expression is owned by exactly one parent, so a parsed
/// statement is always a strict tree.
#[derive(Debug, Clone)]
pub enum Expr {
    Literal(LiteralExpr),
    Symbol(SymbolExpr),
    Binary(BinaryExpr),
    Call(CallExpr),
    VarDecl(VarDeclExpr),
}

impl Expr {
    /// Returns the expression type of the expression.
    pub fn get_expr_type(&self) -> ExprType {
        match self {
            Expr::Literal(_) => ExprType::Literal,
            Expr::Symbol(_) => ExprType::Symbol,
            Expr::Binary(_) => ExprType::Binary,
            Expr::Call(_) => ExprType::Call,
            Expr::VarDecl(_) => ExprType::VarDecl,
        }
    }

    /// Returns the span of the expression.
    pub fn get_span(&self) -> &Span {
        match self {
            Expr::Literal(expr) => &expr.span,
            Expr::Symbol(expr) => &expr.span,
            Expr::Binary(expr) => &expr.span,
            Expr::Call(expr) => &expr.span,
            Expr::VarDecl(expr) => &expr.span,
        }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Literal(expr) => write!(f, "{}", expr),
            Expr::Symbol(expr) => write!(f, "{}", expr),
            Expr::Binary(expr) => write!(f, "{}", expr),
            Expr::Call(expr) => write!(f, "{}", expr),
            Expr::VarDecl(expr) => write!(f, "{}", expr),
        }
    }
}

/// Statement Types
#[derive(PartialEq, Clone, Copy, Debug)]
pub enum StmtType {
    ImportStmt,
    FnDefStmt,
}

/// Top-level unit handed to the parser's consumer.
///
/// Bare top-level expressions arrive as anonymous function definitions.
#[derive(Debug, Clone)]
pub enum Stmt {
    Import(ImportStmt),
    Function(FnDefStmt),
}

impl Stmt {
    /// Returns the type of the statement.
    pub fn get_stmt_type(&self) -> StmtType {
        match self {
            Stmt::Import(_) => StmtType::ImportStmt,
            Stmt::Function(_) => StmtType::FnDefStmt,
        }
    }

    /// Returns the span of the statement.
    pub fn get_span(&self) -> &Span {
        match self {
            Stmt::Import(stmt) => &stmt.span,
            Stmt::Function(stmt) => &stmt.span,
        }
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stmt::Import(stmt) => write!(f, "{}", stmt),
            Stmt::Function(stmt) => write!(f, "{}", stmt),
        }
    }
}
