use std::fmt::Display;

use crate::Span;

/// Every token kind the lexer can produce.
///
/// Binary operators occupy ordinals `0..=90` in tiers of ten, ordered by
/// increasing binding strength. Everything else sits above 90.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Assignment = 0, // =

    DotDot = 10, // ..

    And = 20, // &&
    Or = 21,  // ||

    Ampersand = 30, // &
    Pipe = 31,      // |

    Less = 40,          // <
    Greater = 41,       // >
    LessEquals = 42,    // <=
    GreaterEquals = 43, // >=
    Equals = 44,        // ==
    NotEquals = 45,     // !=

    ShiftLeft = 50,  // <<
    ShiftRight = 51, // >>
    PipeLeft = 52,   // <|
    PipeRight = 53,  // |>

    Plus = 60, // +
    Dash = 61, // -

    Star = 70,    // *
    Slash = 71,   // /
    Percent = 72, // %

    StarStar = 80, // **

    Dot = 90, // .

    Invalid,
    EOF,
    Not, // !

    OpenParen,
    CloseParen,
    OpenCurly,
    CloseCurly,
    OpenBracket,
    CloseBracket,

    Comma,
    Colon,
    Tilde,
    PlusPlus,
    MinusMinus,
    Caret,
    Pound,
    At,
    Dollar,
    Apostrophe,
    Arrow,

    PlusEquals,
    MinusEquals,
    StarEquals,
    SlashEquals,
    PercentEquals,
    AmpersandEquals,
    PipeEquals,
    TildeEquals,
    CaretEquals,
    StarStarEquals,
    ShiftLeftEquals,
    PipeLeftEquals,

    Identifier, // [a-z][a-zA-Z0-9]*
    Type,       // [A-Z][a-zA-Z0-9]*
    Comment,    // ; to end of line
    Float,
    Int,
    String,
}

impl TokenKind {
    /// Source spelling of fixed-text kinds; a descriptive name otherwise.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Assignment => "=",
            TokenKind::DotDot => "..",
            TokenKind::And => "&&",
            TokenKind::Or => "||",
            TokenKind::Ampersand => "&",
            TokenKind::Pipe => "|",
            TokenKind::Less => "<",
            TokenKind::Greater => ">",
            TokenKind::LessEquals => "<=",
            TokenKind::GreaterEquals => ">=",
            TokenKind::Equals => "==",
            TokenKind::NotEquals => "!=",
            TokenKind::ShiftLeft => "<<",
            TokenKind::ShiftRight => ">>",
            TokenKind::PipeLeft => "<|",
            TokenKind::PipeRight => "|>",
            TokenKind::Plus => "+",
            TokenKind::Dash => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Percent => "%",
            TokenKind::StarStar => "**",
            TokenKind::Dot => ".",
            TokenKind::Invalid => "invalid",
            TokenKind::EOF => "end of file",
            TokenKind::Not => "!",
            TokenKind::OpenParen => "(",
            TokenKind::CloseParen => ")",
            TokenKind::OpenCurly => "{",
            TokenKind::CloseCurly => "}",
            TokenKind::OpenBracket => "[",
            TokenKind::CloseBracket => "]",
            TokenKind::Comma => ",",
            TokenKind::Colon => ":",
            TokenKind::Tilde => "~",
            TokenKind::PlusPlus => "++",
            TokenKind::MinusMinus => "--",
            TokenKind::Caret => "^",
            TokenKind::Pound => "#",
            TokenKind::At => "@",
            TokenKind::Dollar => "$",
            TokenKind::Apostrophe => "'",
            TokenKind::Arrow => "->",
            TokenKind::PlusEquals => "+=",
            TokenKind::MinusEquals => "-=",
            TokenKind::StarEquals => "*=",
            TokenKind::SlashEquals => "/=",
            TokenKind::PercentEquals => "%=",
            TokenKind::AmpersandEquals => "&=",
            TokenKind::PipeEquals => "|=",
            TokenKind::TildeEquals => "~=",
            TokenKind::CaretEquals => "^=",
            TokenKind::StarStarEquals => "**=",
            TokenKind::ShiftLeftEquals => "<<=",
            TokenKind::PipeLeftEquals => "<|=",
            TokenKind::Identifier => "identifier",
            TokenKind::Type => "type",
            TokenKind::Comment => "comment",
            TokenKind::Float => "float",
            TokenKind::Int => "int",
            TokenKind::String => "string",
        }
    }

    pub fn ordinal(&self) -> i32 {
        *self as i32
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Data carried by a token, if any.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    Empty,
    /// Identifier, type name, comment body, string body or invalid text.
    Text(String),
    Int(i64),
    Float(f64),
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub value: TokenValue,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.value {
            TokenValue::Empty => write!(f, "{}", self.kind.as_str()),
            TokenValue::Text(text) => write!(f, "{}", text),
            TokenValue::Int(value) => write!(f, "{}", value),
            TokenValue::Float(value) => write!(f, "{:?}", value),
        }
    }
}

impl Token {
    /// The textual payload, or an empty string for tokens without one.
    pub fn text(&self) -> &str {
        match &self.value {
            TokenValue::Text(text) => text,
            _ => "",
        }
    }

    fn is_one_of_many(&self, tokens: &[TokenKind]) -> bool {
        tokens.contains(&self.kind)
    }

    pub fn debug(&self) {
        if self.is_one_of_many(&[
            TokenKind::String,
            TokenKind::Identifier,
            TokenKind::Type,
            TokenKind::Comment,
            TokenKind::Float,
            TokenKind::Int,
            TokenKind::Invalid,
        ]) {
            println!("{} ({})", self.kind, self);
        } else {
            println!("{} ()", self.kind);
        }
    }
}
