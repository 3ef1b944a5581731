/// Core evaluation logic and context management.
///
/// Contains the [`core::Context`] that owns the variable store and the output
/// sink, and the dispatch over every expression and statement form.
pub mod core;

/// Arithmetic evaluation.
///
/// Evaluates `+`, `-`, `*` and `/`, treating every non-number operand as
/// `0.0`.
pub mod binary;

/// Evaluation of variables, assignments and arrays.
///
/// Reads and writes the variable store, builds array values and indexes into
/// them.
pub mod utils;

/// The `print` statement.
///
/// Renders a value and writes it as one line to the context's output.
pub mod print;
