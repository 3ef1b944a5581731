use thiserror::Error;

/// Represents all errors that can occur while building the syntax tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    /// The parser required one kind of token but found another.
    #[error("Error on line {line}: Expected {expected}, found {found}.")]
    UnexpectedToken {
        /// What the grammar required at this point.
        expected: String,
        /// The token actually encountered.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A statement started with an identifier that was not followed by `=`.
    #[error("Error on line {line}: Invalid syntax after identifier '{name}', expected '=' but found {found}.")]
    InvalidAfterIdentifier {
        /// The identifier that started the statement.
        name:  String,
        /// The token that followed it.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
}
