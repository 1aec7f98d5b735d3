//! Error types and diagnostic reporting for the front end.
//!
//! This module defines the error types used by the lexer and the parser.
//! It includes:
//!
//! - Error structures with source position information
//! - Lexical and syntactic error variants
//! - Error names and suggestions for display
//! - The diagnostic sink the lexer and parser report through

pub mod errors;
