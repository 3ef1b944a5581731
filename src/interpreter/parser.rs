/// Core parser state and program-level parsing.
///
/// Holds the [`core::Parser`] context (the lexer cursor and the current
/// lookahead token) along with the shared `accept`/`expect` helpers.
pub mod core;

/// Statement parsing.
///
/// Implements the three statement forms: `print(...)`, assignment and
/// expression statements.
pub mod statement;

/// Binary operator parsing.
///
/// Implements the two left-associative precedence levels: `+`/`-` over
/// `*`/`/`.
pub mod binary;

/// Primary expression parsing.
///
/// Literals, variables, array indexing, grouping and array literals.
pub mod primary;
