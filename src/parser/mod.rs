//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that turns the lexer's token stream into
//! top-level statements. Primaries and statements are parsed by recursive
//! descent; binary operator chains use precedence climbing over the tiers in
//! [`lookups::PRECEDENCE_LOOKUP`]. It handles:
//!
//! - Imports (`$module:item`)
//! - Function definitions (`.name|Types -> Ret 'args = body`)
//! - Top-level expressions, wrapped as anonymous functions
//! - Error reporting and resynchronisation between statements

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
