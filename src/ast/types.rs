use std::fmt::Display;

/// Literal kinds
///
/// The value carried by a literal expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Literals {
    Int(i64),
    Float(f64),
    String(String),
}

impl Display for Literals {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Literals::Int(value) => write!(f, "{}", value),
            // Debug keeps the fractional part, so `2.0` never reads as an int
            Literals::Float(value) => write!(f, "{:?}", value),
            Literals::String(value) => write!(f, "\"{}\"", value),
        }
    }
}
