//! # alphadelta
//!
//! alphadelta is an interpreter for AlphaDelta-lite, a small scripting language
//! with numbers, strings, fixed-length arrays, variables, arithmetic and a
//! `print` statement. Source text is tokenized on demand, parsed into a syntax
//! tree by a recursive-descent parser, and executed by walking that tree.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::Write;

use crate::{ast::Program, interpreter::parser::core::Parser};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums that represent the
/// syntactic structure of a program as a tree. The AST is built by the parser
/// and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source lines to AST nodes for error reporting.
pub mod ast;
/// Provides unified error types for lexing, parsing, and evaluation.
///
/// Every failure is fatal and carries the source line where it was detected.
/// The top-level [`Error`] tags each failure with the phase that raised it.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation and value
/// representations.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Owns the per-run state (the variable store) inside an evaluation
///   context.
pub mod interpreter;
/// General utilities for numeric conversion.
pub mod util;

pub use error::Error;
pub use interpreter::evaluator::core::Context;

/// Parses a complete source text into its list of statements.
///
/// Nothing is executed.
///
/// # Errors
/// The first lexing or syntax error in the source.
///
/// # Examples
/// ```
/// let program = alphadelta::parse("a = [1, 2]; print(a[0]);").unwrap();
/// assert_eq!(program.len(), 2);
///
/// let err = alphadelta::parse("print(1 < 2);").unwrap_err();
/// assert_eq!(err.category(), "syntax");
/// ```
pub fn parse(source: &str) -> Result<Program, Error> {
    Parser::new(source)?.parse_program()
}

/// Parses and executes a program, writing `print` output to `output`.
///
/// The whole source is parsed before any statement runs, so a syntax error
/// anywhere produces no output at all. A runtime error stops execution; lines
/// printed before it have already been written to `output`.
///
/// # Errors
/// Returns the first lexing, syntax or runtime error.
///
/// # Examples
/// ```
/// let mut output = Vec::new();
/// let result = alphadelta::run("print(1); print(missing); print(2);", &mut output);
///
/// assert!(result.is_err());
/// assert_eq!(output, b"1\n");
/// ```
pub fn run<W: Write>(source: &str, output: W) -> Result<(), Error> {
    let program = parse(source)?;

    let mut context = Context::with_output(output);
    context.eval_program(&program)?;

    Ok(())
}

/// Executes a program and returns everything it printed.
///
/// # Errors
/// Returns the first lexing, syntax or runtime error; partial output is
/// discarded in that case.
///
/// # Examples
/// ```
/// use alphadelta::get_output;
///
/// assert_eq!(get_output("print(2 + 3 * 4);").unwrap(), "14\n");
///
/// // 'y' is never assigned.
/// assert!(get_output("print(y);").is_err());
/// ```
pub fn get_output(source: &str) -> Result<String, Error> {
    let mut buffer = Vec::new();
    run(source, &mut buffer)?;

    Ok(String::from_utf8_lossy(&buffer).into_owned())
}
