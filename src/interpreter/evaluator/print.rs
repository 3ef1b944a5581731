use std::io::Write;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl<W: Write> Context<W> {
    /// Writes a value to the context's output, followed by a newline.
    ///
    /// The value is formatted using its `Display` implementation.
    ///
    /// # Example
    /// ```
    /// use alphadelta::{Context, interpreter::value::core::Value};
    ///
    /// let mut context = Context::with_output(Vec::new());
    /// context.print(&Value::from(vec![Value::Number(2.0), Value::from("b")]), 1)
    ///        .unwrap();
    ///
    /// assert_eq!(context.into_output(), b"[2, \"b\"]\n");
    /// ```
    ///
    /// # Errors
    /// `RuntimeError::Output` if the sink rejects the write.
    pub fn print(&mut self, value: &Value, line: usize) -> EvalResult<()> {
        writeln!(self.output, "{value}").map_err(|source| RuntimeError::Output { source, line })
    }
}
