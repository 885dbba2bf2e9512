#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during tokenizing or parsing.
pub enum ParseError {
    /// The grammar required one thing and the token stream held another.
    UnexpectedToken {
        /// What the grammar expected at this position.
        expected: String,
        /// The token that was actually found.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// The tokenizer met a character that starts no token.
    InvalidCharacter {
        /// The offending source text.
        text: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A string literal was opened but never closed.
    UnterminatedString {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Expressions or blocks were nested deeper than the parser allows.
    NestingTooDeep {
        /// The maximum nesting depth.
        limit: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
}

impl ParseError {
    /// Returns the source line the error points at.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedToken { line, .. }
            | Self::InvalidCharacter { line, .. }
            | Self::UnterminatedString { line }
            | Self::NestingTooDeep { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected, found, line } => {
                write!(f, "Error on line {line}: Expected {expected}, found {found}.")
            },
            Self::InvalidCharacter { text, line } => {
                write!(f, "Error on line {line}: Unexpected character '{text}'.")
            },
            Self::UnterminatedString { line } => {
                write!(f, "Error on line {line}: Unterminated string literal.")
            },
            Self::NestingTooDeep { limit, line } => {
                write!(f, "Error on line {line}: Nesting deeper than {limit} levels.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
