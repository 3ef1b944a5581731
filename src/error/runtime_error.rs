use thiserror::Error;

/// Represents all errors that can occur during evaluation.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// Tried to read a variable that was never assigned.
    #[error("Error on line {line}: Undefined variable '{name}'.")]
    UndefinedVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Tried to index a variable that is unassigned or does not hold an array.
    #[error("Error on line {line}: '{name}' is not an array.")]
    NotAnArray {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The truncated index was negative or not smaller than the array length.
    #[error("Error on line {line}: Index {index} is out of bounds for an array of length {len}.")]
    IndexOutOfBounds {
        /// The index that was requested, after truncation toward zero.
        index: i64,
        /// The length of the indexed array.
        len:   usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Writing a `print` line to the output failed.
    #[error("Error on line {line}: Failed to write output: {source}.")]
    Output {
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
        /// The source line of the `print` statement.
        line:   usize,
    },
}
