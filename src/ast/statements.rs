use std::fmt::Display;

use crate::Span;

use super::ast::Expr;

/// Function Prototype
///
/// The signature in front of a function body. `arg_names` and `arg_types`
/// always have the same length.
#[derive(Debug, Clone)]
pub struct Prototype {
    pub name: String,
    pub arg_types: Vec<String>,
    pub arg_names: Vec<String>,
    pub return_type: Option<String>,
    pub span: Span,
}

impl Prototype {
    /// The nameless, parameterless prototype wrapped around top-level expressions.
    pub fn anonymous(span: Span) -> Self {
        Prototype {
            name: String::new(),
            arg_types: vec![],
            arg_names: vec![],
            return_type: None,
            span,
        }
    }
}

impl Display for Prototype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let arguments = self
            .arg_types
            .iter()
            .zip(self.arg_names.iter())
            .map(|(type_, name)| format!("{} {}", type_, name))
            .collect::<Vec<_>>()
            .join(", ");

        write!(f, "{}({})", self.name, arguments)?;

        if let Some(return_type) = &self.return_type {
            write!(f, " -> {}", return_type)?;
        }

        Ok(())
    }
}

/// Function Definition Statement
#[derive(Debug, Clone)]
pub struct FnDefStmt {
    pub prototype: Prototype,
    pub body: Expr,
    pub span: Span,
}

impl FnDefStmt {
    /// Whether this wraps a bare top-level expression.
    pub fn is_anonymous(&self) -> bool {
        self.prototype.name.is_empty()
    }
}

impl Display for FnDefStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {{\n\t{}\n}}", self.prototype, self.body)
    }
}

/// Import Statement
///
/// A module path as a tree; `$math:sqrt` is `math` with one nested `sqrt`.
#[derive(Debug, Clone)]
pub struct ImportStmt {
    pub module: String,
    pub nested: Vec<ImportStmt>,
    pub span: Span,
}

impl Display for ImportStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.module)?;
        for import in &self.nested {
            write!(f, ":{}", import)?;
        }
        Ok(())
    }
}
