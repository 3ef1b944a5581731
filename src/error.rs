use thiserror::Error;

/// Lexing errors.
///
/// Raised while converting source text into tokens: unterminated strings, a
/// lone `!`, and characters that start no token.
pub mod lex_error;
/// Runtime errors.
///
/// Raised while executing a parsed program: undefined variables, indexing a
/// non-array, out-of-bounds indices and output failures.
pub mod runtime_error;
/// Syntax errors.
///
/// Raised by the parser when the token stream does not match the grammar.
pub mod syntax_error;

pub use lex_error::LexError;
pub use runtime_error::RuntimeError;
pub use syntax_error::SyntaxError;

/// Any error that aborts a run, tagged with the phase that raised it.
///
/// Every error is fatal: the pipeline stops at the first one and hands it back
/// to the caller unchanged.
#[derive(Debug, Error)]
pub enum Error {
    /// The source text could not be tokenized.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The token stream did not match the grammar.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    /// Execution failed.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl Error {
    /// Names the phase that raised the error.
    ///
    /// # Example
    /// ```
    /// let err = alphadelta::get_output("print(y);").unwrap_err();
    ///
    /// assert_eq!(err.category(), "runtime");
    /// ```
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::Lex(_) => "lex",
            Self::Syntax(_) => "syntax",
            Self::Runtime(_) => "runtime",
        }
    }

    /// Returns the source line the error was detected on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Lex(LexError::UnterminatedString { line }
                      | LexError::InvalidCharacter { line }
                      | LexError::UnknownCharacter { line, .. })
            | Self::Syntax(SyntaxError::UnexpectedToken { line, .. }
                           | SyntaxError::InvalidAfterIdentifier { line, .. })
            | Self::Runtime(RuntimeError::UndefinedVariable { line, .. }
                            | RuntimeError::NotAnArray { line, .. }
                            | RuntimeError::IndexOutOfBounds { line, .. }
                            | RuntimeError::Output { line, .. }) => *line,
        }
    }
}
