use std::fmt;

/// A malformed-input error from the lexer or parser: unknown character,
/// unexpected end of input, missing closing paren, or wrong operator arity.
/// Carries the byte position and a human-readable message; surfaced to the
/// caller, never recovered from internally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub position: usize,
    pub message: String,
}

impl ParseError {
    pub fn new(position: usize, message: impl Into<String>) -> Self {
        Self {
            position,
            message: message.into(),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "parse error at column {}: {}", self.position, self.message)
    }
}

impl std::error::Error for ParseError {}
