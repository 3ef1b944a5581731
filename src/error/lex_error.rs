use thiserror::Error;

/// Represents all errors that can occur while turning source text into tokens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A string literal was opened but never closed.
    #[error("Error on line {line}: Unterminated string literal.")]
    UnterminatedString {
        /// The source line where the literal starts.
        line: usize,
    },
    /// A `!` appeared without a following `=`.
    #[error("Error on line {line}: Invalid character '!', only '!=' is allowed.")]
    InvalidCharacter {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A character that starts no token.
    #[error("Error on line {line}: Unknown character '{character}'.")]
    UnknownCharacter {
        /// The offending character.
        character: char,
        /// The source line where the error occurred.
        line:      usize,
    },
}
