use std::io::Write;

use crate::{
    ast::{Expr, Statement},
    error::RuntimeError,
    interpreter::{store::Variables, value::core::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state of one run: the flat variable store
/// and the sink `print` writes to. Nothing is global, so independent contexts
/// can run side by side.
///
/// ## Usage
///
/// `Context` is created once per run and reused for every statement. The
/// driver passes a buffered standard output; tests pass a `Vec<u8>`. Any
/// [`Write`] implementation works with [`Context::with_output`].
///
/// # Example
/// ```
/// use alphadelta::{Context, interpreter::value::core::Value};
///
/// let program = alphadelta::parse("x = 2 * 3; print(x);").unwrap();
/// let mut context = Context::with_output(Vec::new());
/// context.eval_program(&program).unwrap();
///
/// assert_eq!(context.variables().get("x"), Some(&Value::Number(6.0)));
/// assert_eq!(context.into_output(), b"6\n");
/// ```
pub struct Context<W> {
    pub(super) variables: Variables,
    pub(super) output:    W,
}

impl<W: Write> Context<W> {
    /// Creates a context with an empty variable store that prints to
    /// `output`.
    pub fn with_output(output: W) -> Self {
        Self { variables: Variables::new(),
               output }
    }

    /// The variable store as it stands after the statements run so far.
    #[must_use]
    pub const fn variables(&self) -> &Variables {
        &self.variables
    }

    /// Consumes the context and returns its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. Operands and
    /// array elements are evaluated left to right.
    ///
    /// # Errors
    /// Any `RuntimeError` raised by a sub-expression.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Number { value, .. } => Ok(Value::Number(*value)),
            Expr::Str { text, .. } => Ok(Value::Str(text.clone())),
            Expr::Variable { name, line } => self.eval_variable(name, *line),
            Expr::BinaryOp { left, op, right, .. } => self.eval_binary_op(left, *op, right),
            Expr::ArrayLiteral { elements, .. } => self.eval_array_literal(elements),
            Expr::ArrayIndex { name, index, line } => self.eval_array_index(name, index, *line),
        }
    }

    /// Evaluates a single statement.
    ///
    /// # Returns
    /// The printed or assigned value for `print` and assignment statements;
    /// `None` for expression statements, whose value is discarded.
    ///
    /// # Errors
    /// Any `RuntimeError` raised while evaluating the statement.
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<Option<Value>> {
        match statement {
            Statement::Print { expr, line } => {
                let value = self.eval(expr)?;
                self.print(&value, *line)?;
                Ok(Some(value))
            },
            Statement::Assignment { name, value, .. } => {
                Ok(Some(self.eval_assignment(name, value)?))
            },
            Statement::Expression { expr, .. } => {
                self.eval(expr)?;
                Ok(None)
            },
        }
    }

    /// Runs every statement in source order.
    ///
    /// Execution stops at the first error; statements after it never run,
    /// while the effects of those before it (variables, printed lines) remain.
    ///
    /// # Errors
    /// The first `RuntimeError` raised by any statement.
    pub fn eval_program(&mut self, program: &[Statement]) -> EvalResult<()> {
        for statement in program {
            self.eval_statement(statement)?;
        }
        Ok(())
    }
}
