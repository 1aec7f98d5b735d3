use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    errors::errors::{DiagnosticSink, Error, ErrorImpl},
    Position, Span, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, TokenValue};

lazy_static! {
    static ref INT_PATTERN: Regex = Regex::new(r"^[0-9]+$").unwrap();
    static ref FLOAT_PATTERN: Regex = Regex::new(r"^[0-9]*\.[0-9]*$").unwrap();
}

/// Anything the lexer can pull characters from.
///
/// `None` signals end of input.
pub trait CharSource {
    fn next_char(&mut self) -> Option<char>;
}

impl<I: Iterator<Item = char>> CharSource for I {
    fn next_char(&mut self) -> Option<char> {
        self.next()
    }
}

/// Streaming lexer with a single character of lookahead.
///
/// `current` is the next unprocessed character; it is the only state carried
/// between calls to [`Lexer::next_token`]. Lexical errors are reported to the
/// sink and surface as `Invalid` tokens.
pub struct Lexer<S: CharSource, D: DiagnosticSink> {
    source: S,
    current: Option<char>,
    pos: u32,
    file: Rc<String>,
    sink: D,
}

impl<S: CharSource, D: DiagnosticSink> Lexer<S, D> {
    pub fn new(mut source: S, file: Option<String>, sink: D) -> Lexer<S, D> {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        let current = source.next_char();

        Lexer {
            source,
            current,
            pos: 0,
            file: file_name,
            sink,
        }
    }

    pub fn file(&self) -> Rc<String> {
        Rc::clone(&self.file)
    }

    pub fn get_position(&self) -> Position {
        Position(self.pos, Rc::clone(&self.file))
    }

    pub fn report(&mut self, error: Error) {
        self.sink.report(error);
    }

    pub fn sink(&self) -> &D {
        &self.sink
    }

    pub fn into_sink(self) -> D {
        self.sink
    }

    /// Moves past the current character. Once the source is exhausted it is
    /// never polled again.
    fn advance(&mut self) {
        if self.current.is_some() {
            self.current = self.source.next_char();
            self.pos += 1;
        }
    }

    /// Consumes the current character if it is `expected`.
    fn eat(&mut self, expected: char) -> bool {
        if self.current == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn span_from(&self, start: u32) -> Span {
        Span {
            start: Position(start, Rc::clone(&self.file)),
            end: self.get_position(),
        }
    }

    fn make_token(&self, kind: TokenKind, value: TokenValue, start: u32) -> Token {
        MK_TOKEN!(kind, value, self.span_from(start))
    }

    fn invalid(&mut self, error_impl: ErrorImpl, text: String, start: u32) -> Token {
        let error = Error::new(error_impl, Position(start, Rc::clone(&self.file)));
        self.report(error);
        self.make_token(TokenKind::Invalid, TokenValue::Text(text), start)
    }

    pub fn next_token(&mut self) -> Token {
        while matches!(self.current, Some(c) if c.is_whitespace()) {
            self.advance();
        }

        let start = self.pos;
        let Some(c) = self.current else {
            return self.make_token(TokenKind::EOF, TokenValue::Empty, start);
        };
        self.advance();

        let kind = match c {
            '!' => {
                if self.eat('=') {
                    TokenKind::NotEquals
                } else {
                    TokenKind::Not
                }
            }
            '-' => {
                if self.eat('=') {
                    TokenKind::MinusEquals
                } else if self.eat('-') {
                    TokenKind::MinusMinus
                } else if self.eat('>') {
                    TokenKind::Arrow
                } else {
                    TokenKind::Dash
                }
            }
            '+' => {
                if self.eat('=') {
                    TokenKind::PlusEquals
                } else if self.eat('+') {
                    TokenKind::PlusPlus
                } else {
                    TokenKind::Plus
                }
            }
            '/' => {
                if self.eat('=') {
                    TokenKind::SlashEquals
                } else {
                    TokenKind::Slash
                }
            }
            '*' => {
                if self.eat('=') {
                    TokenKind::StarEquals
                } else if self.eat('*') {
                    if self.eat('=') {
                        TokenKind::StarStarEquals
                    } else {
                        TokenKind::StarStar
                    }
                } else {
                    TokenKind::Star
                }
            }
            '%' => {
                if self.eat('=') {
                    TokenKind::PercentEquals
                } else {
                    TokenKind::Percent
                }
            }
            '.' => {
                if self.eat('.') {
                    TokenKind::DotDot
                } else if matches!(self.current, Some(d) if d.is_ascii_digit()) {
                    return self.lex_number('.', start);
                } else {
                    TokenKind::Dot
                }
            }
            '&' => {
                if self.eat('=') {
                    TokenKind::AmpersandEquals
                } else if self.eat('&') {
                    TokenKind::And
                } else {
                    TokenKind::Ampersand
                }
            }
            '|' => {
                if self.eat('=') {
                    TokenKind::PipeEquals
                } else if self.eat('|') {
                    TokenKind::Or
                } else if self.eat('>') {
                    TokenKind::PipeRight
                } else {
                    TokenKind::Pipe
                }
            }
            '~' => {
                if self.eat('=') {
                    TokenKind::TildeEquals
                } else {
                    TokenKind::Tilde
                }
            }
            '^' => {
                if self.eat('=') {
                    TokenKind::CaretEquals
                } else {
                    TokenKind::Caret
                }
            }
            '<' => {
                if self.eat('=') {
                    TokenKind::LessEquals
                } else if self.eat('|') {
                    if self.eat('=') {
                        TokenKind::PipeLeftEquals
                    } else {
                        TokenKind::PipeLeft
                    }
                } else if self.eat('<') {
                    if self.eat('=') {
                        TokenKind::ShiftLeftEquals
                    } else {
                        TokenKind::ShiftLeft
                    }
                } else {
                    TokenKind::Less
                }
            }
            '>' => {
                if self.eat('=') {
                    TokenKind::GreaterEquals
                } else if self.eat('>') {
                    TokenKind::ShiftRight
                } else {
                    TokenKind::Greater
                }
            }
            '=' => {
                if self.eat('=') {
                    TokenKind::Equals
                } else {
                    TokenKind::Assignment
                }
            }
            '(' => TokenKind::OpenParen,
            ')' => TokenKind::CloseParen,
            '{' => TokenKind::OpenCurly,
            '}' => TokenKind::CloseCurly,
            '[' => TokenKind::OpenBracket,
            ']' => TokenKind::CloseBracket,
            ',' => TokenKind::Comma,
            ':' => TokenKind::Colon,
            '#' => TokenKind::Pound,
            '@' => TokenKind::At,
            '$' => TokenKind::Dollar,
            '\'' => TokenKind::Apostrophe,
            ';' => return self.lex_comment(start),
            '"' => return self.lex_string(start),
            c if c.is_ascii_alphabetic() => return self.lex_symbol(c, start),
            c if c.is_ascii_digit() => return self.lex_number(c, start),
            c => {
                return self.invalid(
                    ErrorImpl::UnrecognisedToken {
                        token: c.to_string(),
                    },
                    c.to_string(),
                    start,
                )
            }
        };

        self.make_token(kind, TokenValue::Empty, start)
    }

    fn lex_comment(&mut self, start: u32) -> Token {
        let mut body = String::new();

        while let Some(c) = self.current {
            if c == '\n' || c == '\r' {
                break;
            }
            body.push(c);
            self.advance();
        }

        self.make_token(TokenKind::Comment, TokenValue::Text(body), start)
    }

    fn lex_symbol(&mut self, first: char, start: u32) -> Token {
        let kind = if first.is_ascii_lowercase() {
            TokenKind::Identifier
        } else {
            TokenKind::Type
        };

        let mut name = first.to_string();
        while let Some(c) = self.current.filter(|c| c.is_ascii_alphanumeric()) {
            name.push(c);
            self.advance();
        }

        self.make_token(kind, TokenValue::Text(name), start)
    }

    fn lex_number(&mut self, first: char, start: u32) -> Token {
        let mut text = first.to_string();
        while let Some(c) = self.current.filter(|c| c.is_ascii_digit() || *c == '.') {
            text.push(c);
            self.advance();
        }

        if INT_PATTERN.is_match(&text) {
            return match text.parse::<i64>() {
                Ok(value) => self.make_token(TokenKind::Int, TokenValue::Int(value), start),
                Err(_) => self.invalid(
                    ErrorImpl::NumberParseError {
                        token: text.clone(),
                    },
                    text,
                    start,
                ),
            };
        }

        if FLOAT_PATTERN.is_match(&text) {
            if let Ok(value) = text.parse::<f64>() {
                return self.make_token(TokenKind::Float, TokenValue::Float(value), start);
            }
        }

        self.invalid(
            ErrorImpl::InvalidNumberFormat {
                token: text.clone(),
            },
            text,
            start,
        )
    }

    fn lex_string(&mut self, start: u32) -> Token {
        let mut body = String::new();

        while let Some(c) = self.current {
            if c == '"' {
                self.advance();
                return self.make_token(TokenKind::String, TokenValue::Text(body), start);
            }
            body.push(c);
            self.advance();
        }

        self.invalid(
            ErrorImpl::UnterminatedString {
                token: body.clone(),
            },
            body,
            start,
        )
    }
}

/// Lexes a whole source string up to and including the `EOF` token.
///
/// Invalid input does not stop lexing; each problem yields an `Invalid`
/// token and an entry in the returned diagnostics.
pub fn tokenize(source: &str, file: Option<String>) -> (Vec<Token>, Vec<Error>) {
    let mut lex = Lexer::new(source.chars(), file, Vec::new());
    let mut tokens = vec![];

    loop {
        let token = lex.next_token();
        let at_eof = token.kind == TokenKind::EOF;
        tokens.push(token);

        if at_eof {
            break;
        }
    }

    (tokens, lex.into_sink())
}
