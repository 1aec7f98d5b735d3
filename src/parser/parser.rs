//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the top-level parse
//! loop. The parser pulls tokens from the lexer one at a time and keeps a
//! single token of lookahead; it never backtracks.
//!
//! It maintains lookup tables for:
//! - Statement handlers (`$` imports, `.` function definitions)
//! - NUD (null denotation) handlers for primary expressions

use std::{collections::HashMap, mem, rc::Rc};

use crate::{
    ast::ast::Stmt,
    errors::errors::{DiagnosticSink, Error, ErrorImpl},
    lexer::{
        lexer::{CharSource, Lexer},
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::{
    lookups::{
        create_token_lookups, precedence, NUDHandler, NUDLookup, StmtHandler, StmtLookup,
    },
    stmt::parse_stmt,
};

/// The main parser structure that maintains parsing state.
///
/// Owns the lexer (and through it the character source and the diagnostic
/// sink) together with the current lookahead token.
pub struct Parser<S: CharSource, D: DiagnosticSink> {
    /// Source of tokens
    lexer: Lexer<S, D>,
    /// The most recently fetched, not yet consumed token
    current: Token,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup<S, D>,
    /// Lookup table for null denotation (primary) expression handlers
    nud_lookup: NUDLookup<S, D>,
}

impl<S: CharSource, D: DiagnosticSink> Parser<S, D> {
    /// Creates a new Parser and primes the first token.
    pub fn new(mut lexer: Lexer<S, D>) -> Self {
        let current = lexer.next_token();

        let mut parser = Parser {
            lexer,
            current,
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
        };
        create_token_lookups(&mut parser);

        parser
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Precedence of the current token as a binary operator, -1 if it is not one.
    pub fn current_precedence(&self) -> i32 {
        precedence(self.current.kind)
    }

    /// Advances to the next token and returns the previous token.
    pub fn advance(&mut self) -> Token {
        let next = self.lexer.next_token();
        mem::replace(&mut self.current, next)
    }

    /// Builds the error for a required construct missing at the current token.
    ///
    /// An `Invalid` token already had its diagnostic reported by the lexer, so
    /// it yields a lexical error that the top-level loop will not repeat.
    pub fn error_at_current(&self, message: &str) -> Error {
        let token = self.current_token();

        if token.kind == TokenKind::Invalid {
            Error::new(
                ErrorImpl::InvalidToken {
                    token: token.to_string(),
                },
                self.get_position(),
            )
        } else {
            Error::new(
                ErrorImpl::UnexpectedTokenDetailed {
                    token: token.to_string(),
                    message: String::from(message),
                },
                self.get_position(),
            )
        }
    }

    /// Expects a token of the specified kind, failing with `message`.
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) and advances if the current token matches, otherwise returns an Error.
    pub fn expect_error(&mut self, expected_kind: TokenKind, message: &str) -> Result<Token, Error> {
        if self.current_token_kind() != expected_kind {
            Err(self.error_at_current(message))
        } else {
            Ok(self.advance())
        }
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup<S, D> {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup<S, D> {
        &self.nud_lookup
    }

    /// Registers a null denotation (primary) handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler<S, D>) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler<S, D>) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Returns the start position of the current token.
    pub fn get_position(&self) -> Position {
        self.current.span.start.clone()
    }

    pub fn file(&self) -> Rc<String> {
        self.lexer.file()
    }

    pub fn report(&mut self, error: Error) {
        self.lexer.report(error);
    }

    pub fn sink(&self) -> &D {
        self.lexer.sink()
    }

    pub fn into_sink(self) -> D {
        self.lexer.into_sink()
    }

    /// Discards tokens until one that can start a statement boundary
    /// (`$`, `.` or end of file) is current.
    pub fn synchronize(&mut self) {
        while !matches!(
            self.current_token_kind(),
            TokenKind::Dollar | TokenKind::Dot | TokenKind::EOF
        ) {
            self.advance();
        }
    }

    /// Parses top-level statements until end of input, handing each one to
    /// `consumer` in source order.
    ///
    /// A statement that fails to parse is reported (unless the lexer already
    /// reported it) and skipped; parsing resumes at the next `$` or `.`.
    pub fn parse_program(&mut self, mut consumer: impl FnMut(Stmt)) {
        loop {
            match self.current_token_kind() {
                TokenKind::EOF => break,
                TokenKind::Comment => {
                    self.advance();
                }
                _ => match parse_stmt(self) {
                    Ok(stmt) => consumer(stmt),
                    Err(error) => {
                        if !error.is_lexical() {
                            self.report(error);
                        }
                        self.synchronize();
                    }
                },
            }
        }
    }
}

/// Parses a whole source string.
///
/// This is the main entry point for parsing. It returns every statement that
/// parsed successfully together with all diagnostics, lexical and syntactic,
/// in the order they were reported.
pub fn parse(source: &str, file: Option<String>) -> (Vec<Stmt>, Vec<Error>) {
    let lexer = Lexer::new(source.chars(), file, Vec::new());
    let mut parser = Parser::new(lexer);

    let mut body = vec![];
    parser.parse_program(|stmt| body.push(stmt));

    (body, parser.into_sink())
}
