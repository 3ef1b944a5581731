use std::{io::Write, rc::Rc};

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
    util::num::{f64_to_i64_truncated, i64_to_index},
};

impl<W: Write> Context<W> {
    /// Looks up a variable by name.
    ///
    /// # Errors
    /// `RuntimeError::UndefinedVariable` if the name was never assigned.
    pub fn eval_variable(&self, name: &str, line: usize) -> EvalResult<Value> {
        self.variables()
            .get(name)
            .cloned()
            .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.to_owned(),
                                                             line })
    }

    /// Evaluates `value` and binds the result to `name`.
    ///
    /// Any previous binding is replaced regardless of its type. The assigned
    /// value is also the result of the assignment.
    ///
    /// # Errors
    /// Propagates errors from evaluating the right-hand side; the store is left
    /// untouched in that case.
    pub fn eval_assignment(&mut self, name: &str, value: &Expr) -> EvalResult<Value> {
        let value = self.eval(value)?;
        self.variables.set(name, value.clone());
        Ok(value)
    }

    /// Evaluates an array literal expression.
    ///
    /// Each element expression is evaluated in order and the results are
    /// collected into a fixed-length `Value::Array`.
    ///
    /// # Errors
    /// The first error raised by an element.
    pub fn eval_array_literal(&mut self, elements: &[Expr]) -> EvalResult<Value> {
        let values = elements.iter()
                             .map(|element| self.eval(element))
                             .collect::<EvalResult<Vec<_>>>()?;

        Ok(Value::from(values))
    }

    /// Evaluates `name[index]`.
    ///
    /// The variable is resolved first, then the index expression. The index
    /// contributes its number (`0.0` for a string or array), truncated toward
    /// zero. The element is returned as stored: nested arrays keep sharing
    /// their elements with the original.
    ///
    /// # Errors
    /// - `RuntimeError::NotAnArray` if `name` is unassigned or holds a
    ///   non-array value.
    /// - `RuntimeError::IndexOutOfBounds` if the truncated index is negative
    ///   or not smaller than the array length.
    pub fn eval_array_index(&mut self, name: &str, index: &Expr, line: usize) -> EvalResult<Value> {
        let array = match self.variables().get(name) {
            Some(Value::Array(items)) => Rc::clone(items),
            _ => {
                return Err(RuntimeError::NotAnArray { name: name.to_owned(),
                                                      line });
            },
        };

        let index = f64_to_i64_truncated(self.eval(index)?.arithmetic_operand());

        i64_to_index(index, array.len()).and_then(|i| array.get(i))
                                        .cloned()
                                        .ok_or(RuntimeError::IndexOutOfBounds { index,
                                                                                len: array.len(),
                                                                                line })
    }
}
