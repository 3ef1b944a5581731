use std::io::Write;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl<W: Write> Context<W> {
    /// Evaluates a binary operator applied to two expressions.
    ///
    /// Both operands are always evaluated, left first. Each operand
    /// contributes its number, or `0.0` if it is a string or an array; the
    /// result is always a `Value::Number`. Division by zero follows IEEE 754
    /// and produces an infinity or NaN.
    ///
    /// # Example
    /// ```
    /// use alphadelta::{
    ///     Context,
    ///     ast::{BinaryOperator, Expr},
    ///     interpreter::value::core::Value,
    /// };
    ///
    /// let mut context = Context::with_output(Vec::new());
    /// let text = Expr::Str { text: "x".to_string(),
    ///                        line: 1, };
    /// let one = Expr::Number { value: 1.0,
    ///                          line:  1, };
    ///
    /// let r = context.eval_binary_op(&text, BinaryOperator::Add, &one).unwrap();
    /// assert_eq!(r, Value::Number(1.0));
    /// ```
    ///
    /// # Errors
    /// Propagates errors from evaluating either operand.
    pub fn eval_binary_op(&mut self,
                          left: &Expr,
                          op: BinaryOperator,
                          right: &Expr)
                          -> EvalResult<Value> {
        let left = self.eval(left)?;
        let right = self.eval(right)?;

        Ok(Value::Number(op.apply(left.arithmetic_operand(), right.arithmetic_operand())))
    }
}
