use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{
    ast::ast::{Expr, Stmt},
    errors::errors::{DiagnosticSink, Error},
    lexer::{lexer::CharSource, tokens::TokenKind},
};

use super::{expr::*, parser::Parser, stmt::*};

/// Precedence tiers of the binary operators, weakest first.
///
/// The discriminant of each tier is its numeric precedence.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Assignment = 0,
    Range = 10,
    Logical = 20,
    Bitwise = 30,
    Relational = 40,
    Shift = 50,
    Additive = 60,
    Multiplicative = 70,
    Exponent = 80,
    Member = 90,
}

impl BindingPower {
    pub fn tier(self) -> i32 {
        self as i32
    }
}

lazy_static! {
    pub static ref PRECEDENCE_LOOKUP: HashMap<TokenKind, BindingPower> = {
        let mut map = HashMap::new();
        map.insert(TokenKind::Assignment, BindingPower::Assignment);

        map.insert(TokenKind::DotDot, BindingPower::Range);

        // Logical
        map.insert(TokenKind::And, BindingPower::Logical);
        map.insert(TokenKind::Or, BindingPower::Logical);

        // Bitwise
        map.insert(TokenKind::Ampersand, BindingPower::Bitwise);
        map.insert(TokenKind::Pipe, BindingPower::Bitwise);

        // Relational
        map.insert(TokenKind::Less, BindingPower::Relational);
        map.insert(TokenKind::Greater, BindingPower::Relational);
        map.insert(TokenKind::LessEquals, BindingPower::Relational);
        map.insert(TokenKind::GreaterEquals, BindingPower::Relational);
        map.insert(TokenKind::Equals, BindingPower::Relational);
        map.insert(TokenKind::NotEquals, BindingPower::Relational);

        // Shifts and pipes
        map.insert(TokenKind::ShiftLeft, BindingPower::Shift);
        map.insert(TokenKind::ShiftRight, BindingPower::Shift);
        map.insert(TokenKind::PipeLeft, BindingPower::Shift);
        map.insert(TokenKind::PipeRight, BindingPower::Shift);

        // Additive and multiplicative
        map.insert(TokenKind::Plus, BindingPower::Additive);
        map.insert(TokenKind::Dash, BindingPower::Additive);
        map.insert(TokenKind::Star, BindingPower::Multiplicative);
        map.insert(TokenKind::Slash, BindingPower::Multiplicative);
        map.insert(TokenKind::Percent, BindingPower::Multiplicative);

        map.insert(TokenKind::StarStar, BindingPower::Exponent);

        // Member
        map.insert(TokenKind::Dot, BindingPower::Member);
        map
    };
}

/// Precedence of `kind` as a binary operator, or -1 if it is not one.
pub fn precedence(kind: TokenKind) -> i32 {
    PRECEDENCE_LOOKUP
        .get(&kind)
        .map(|binding_power| binding_power.tier())
        .unwrap_or(-1)
}

pub type StmtHandler<S, D> = fn(&mut Parser<S, D>) -> Result<Stmt, Error>;
pub type NUDHandler<S, D> = fn(&mut Parser<S, D>) -> Result<Expr, Error>;

pub fn create_token_lookups<S: CharSource, D: DiagnosticSink>(parser: &mut Parser<S, D>) {
    // Literals and symbols
    parser.nud(TokenKind::Int, parse_literal_expr);
    parser.nud(TokenKind::Float, parse_literal_expr);
    parser.nud(TokenKind::String, parse_literal_expr);
    parser.nud(TokenKind::Identifier, parse_identifier_expr);
    parser.nud(TokenKind::OpenParen, parse_grouping_expr);
    parser.nud(TokenKind::Comment, parse_comment_expr);

    // Declarations
    parser.nud(TokenKind::Apostrophe, parse_var_decl_expr);
    parser.nud(TokenKind::Comma, parse_var_decl_expr);

    // Statements
    parser.stmt(TokenKind::Dollar, parse_import_stmt);
    parser.stmt(TokenKind::Dot, parse_fn_def_stmt);
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup<S, D> = HashMap<TokenKind, StmtHandler<S, D>>;
pub type NUDLookup<S, D> = HashMap<TokenKind, NUDHandler<S, D>>;
