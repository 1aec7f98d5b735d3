use std::fmt::Display;

use crate::{lexer::tokens::TokenKind, Span};

use super::{ast::Expr, types::Literals};

// LITERALS

/// Literal Expression
/// Represents an integer, float or string literal in the AST.
#[derive(Debug, Clone)]
pub struct LiteralExpr {
    pub value: Literals,
    pub span: Span,
}

impl Display for LiteralExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Symbol Expression
/// Represents a variable reference in the AST.
#[derive(Debug, Clone)]
pub struct SymbolExpr {
    pub value: String,
    pub span: Span,
}

impl Display for SymbolExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

// COMPLEX

/// Binary Expression
/// Represents `left <operator> right`. The operator is one of the binary
/// operator token kinds.
#[derive(Debug, Clone)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub operator: TokenKind,
    pub right: Box<Expr>,
    pub span: Span,
}

impl Display for BinaryExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({} {} {})", self.left, self.operator.as_str(), self.right)
    }
}

/// Call Expression
/// Represents a call of a named function. Arguments keep source order.
#[derive(Debug, Clone)]
pub struct CallExpr {
    pub callee: String,
    pub arguments: Vec<Expr>,
    pub span: Span,
}

impl Display for CallExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let arguments = self
            .arguments
            .iter()
            .map(|argument| argument.to_string())
            .collect::<Vec<_>>()
            .join(" ");

        write!(f, "{}({})", self.callee, arguments)
    }
}

/// Variable Declaration Expression
/// Introduced by `'` (immutable) or `,` (mutable). The initializer is optional.
#[derive(Debug, Clone)]
pub struct VarDeclExpr {
    pub identifier: String,
    pub is_mutable: bool,
    pub assigned_value: Option<Box<Expr>>,
    pub span: Span,
}

impl Display for VarDeclExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let keyword = if self.is_mutable { "let mut" } else { "let" };

        match &self.assigned_value {
            Some(value) => write!(f, "{} {} = {}", keyword, self.identifier, value),
            None => write!(f, "{} {}", keyword, self.identifier),
        }
    }
}
