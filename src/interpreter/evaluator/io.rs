use crate::{
    ast::Node,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::Value,
    },
};

impl Context<'_> {
    /// Evaluates `print`: writes the value's display form and a newline.
    ///
    /// # Returns
    /// `Value::Empty`.
    ///
    /// # Errors
    /// Returns `RuntimeError::Io` if the output cannot be written.
    pub fn eval_print(&mut self, expr: &Node, line: usize) -> EvalResult<Value> {
        let value = self.eval_value(expr)?;
        self.write_line(&value, line)?;
        Ok(Value::Empty)
    }

    /// Evaluates `input`: writes the prompt, then reads one line.
    ///
    /// The prompt is written without a trailing newline and the output is
    /// flushed first so it is visible before reading blocks. The line is
    /// converted with [`Value::from_input`]. At end of input the result is an
    /// empty string.
    ///
    /// # Errors
    /// Returns `RuntimeError::Io` if writing the prompt or reading fails.
    ///
    /// # Example
    /// ```
    /// use quill::interpreter::{evaluator::core::Context, value::Value};
    ///
    /// let mut input: &[u8] = b"21\nbob\n";
    /// let mut output = Vec::new();
    /// let mut context = Context::new(&mut input, &mut output);
    ///
    /// assert_eq!(context.eval_input("age? ", 1), Ok(Value::Number(21.0)));
    /// assert_eq!(context.eval_input("name? ", 1), Ok(Value::from("bob")));
    /// assert_eq!(context.eval_input("", 1), Ok(Value::from("")));
    /// drop(context);
    ///
    /// assert_eq!(output, b"age? name? ");
    /// ```
    pub fn eval_input(&mut self, prompt: &str, line: usize) -> EvalResult<Value> {
        write!(self.output, "{prompt}").map_err(|e| io_error(&e, line))?;
        self.output.flush().map_err(|e| io_error(&e, line))?;

        let mut buffer = String::new();
        self.input
            .read_line(&mut buffer)
            .map_err(|e| io_error(&e, line))?;

        Ok(Value::from_input(&buffer))
    }

    /// Writes a value followed by a newline to the context's output.
    ///
    /// # Errors
    /// Returns `RuntimeError::Io` if the output cannot be written.
    pub fn write_line(&mut self, value: &Value, line: usize) -> EvalResult<()> {
        writeln!(self.output, "{value}").map_err(|e| io_error(&e, line))
    }
}

fn io_error(error: &std::io::Error, line: usize) -> RuntimeError {
    RuntimeError::Io { details: error.to_string(),
                       line }
}
