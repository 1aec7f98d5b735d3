use std::fmt::Display;

use thiserror::Error;

use crate::{display_error, Position};

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// The single-line human readable message.
    pub fn message(&self) -> String {
        self.internal_error.to_string()
    }

    /// Whether the error originates in the lexer.
    ///
    /// Lexical errors are reported by the lexer as soon as the bad token is
    /// produced, so the parser must not report them a second time.
    pub fn is_lexical(&self) -> bool {
        matches!(
            self.internal_error,
            ErrorImpl::UnrecognisedToken { .. }
                | ErrorImpl::InvalidNumberFormat { .. }
                | ErrorImpl::NumberParseError { .. }
                | ErrorImpl::UnterminatedString { .. }
                | ErrorImpl::InvalidToken { .. }
        )
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::InvalidNumberFormat { .. } => "InvalidNumberFormat",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::UnterminatedString { .. } => "UnterminatedString",
            ErrorImpl::InvalidToken { .. } => "InvalidToken",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedTokenDetailed { .. } => "UnexpectedTokenDetailed",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::InvalidNumberFormat { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, a number may contain at most one `.`",
                token
            )),
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::UnterminatedString { .. } => {
                ErrorTip::Suggestion(String::from("String literal does not have a closing quote"))
            }
            ErrorImpl::InvalidToken { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedToken { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, expected an expression",
                token
            )),
            ErrorImpl::UnexpectedTokenDetailed { token, message } => {
                ErrorTip::Suggestion(format!("{}, found `{}`", message, token))
            }
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("invalid token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("invalid number format: {token:?}")]
    InvalidNumberFormat { token: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("unterminated string literal: {token:?}")]
    UnterminatedString { token: String },
    #[error("invalid token consumed: {token:?}")]
    InvalidToken { token: String },
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("{message}, found {token:?}")]
    UnexpectedTokenDetailed { token: String, message: String },
}

/// Receiver for diagnostics produced while lexing and parsing.
///
/// Reporting never fails and never aborts the parse.
pub trait DiagnosticSink {
    fn report(&mut self, error: Error);
}

impl DiagnosticSink for Vec<Error> {
    fn report(&mut self, error: Error) {
        self.push(error);
    }
}

/// Prints every diagnostic to stderr, pointing into `source`.
pub struct ConsoleSink {
    source: String,
    reported: usize,
}

impl ConsoleSink {
    pub fn new(source: String) -> Self {
        ConsoleSink {
            source,
            reported: 0,
        }
    }

    /// Number of diagnostics reported so far.
    pub fn reported(&self) -> usize {
        self.reported
    }
}

impl DiagnosticSink for ConsoleSink {
    fn report(&mut self, error: Error) {
        display_error(&error, &self.source);
        self.reported += 1;
    }
}
