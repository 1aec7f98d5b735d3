//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that turns a character stream
//! into tokens, one token per call. It handles:
//!
//! - Maximal-munch recognition of operators and punctuation
//! - Identifiers, type names, numeric and string literals
//! - Line comments, surfaced as tokens
//! - Lexical error reporting through a diagnostic sink

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
