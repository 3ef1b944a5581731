/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the AST statement by statement, evaluates expressions,
/// updates the variable store and writes `print` output.
///
/// # Responsibilities
/// - Evaluates every expression and statement form.
/// - Applies the numeric coercion rule for arithmetic.
/// - Reports runtime errors such as undefined variables or bad indices.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces tokens on demand: numbers,
/// strings, identifiers, operators and punctuation, followed by an endless
/// supply of end-of-input tokens.
///
/// # Responsibilities
/// - Converts the input text into tokens with line information.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// A recursive-descent parser with one token of lookahead, pulling tokens from
/// the lexer as it goes.
///
/// # Responsibilities
/// - Converts tokens into statements and expressions.
/// - Enforces the grammar, reporting the expected and found token on failure.
pub mod parser;
/// The flat variable store.
///
/// A single name-to-value mapping owned by one evaluation context.
pub mod store;
/// The value module defines the runtime data types for evaluation.
///
/// # Responsibilities
/// - Defines the `Value` enum: numbers, strings and arrays.
/// - Implements the printed form of every value.
pub mod value;
