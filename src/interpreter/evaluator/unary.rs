use crate::{
    ast::{Node, UnaryOperator},
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::Value,
    },
};

impl Context<'_> {
    /// Evaluates a unary operation.
    ///
    /// `+` and `-` require a number, `!` requires a boolean.
    ///
    /// # Errors
    /// - `RuntimeError::ExpectedNumber` if `+` or `-` is applied to a
    ///   non-number.
    /// - `RuntimeError::ExpectedBoolean` if `!` is applied to a non-boolean.
    ///
    /// # Example
    /// ```
    /// use quill::{
    ///     ast::{Node, UnaryOperator},
    ///     interpreter::{evaluator::core::Context, value::Value},
    /// };
    ///
    /// let mut input = std::io::empty();
    /// let mut output = Vec::new();
    /// let mut context = Context::new(&mut input, &mut output);
    ///
    /// let operand = Node::NumberLiteral { value: 3.0,
    ///                                     line:  1, };
    ///
    /// let result = context.eval_unary_op(UnaryOperator::Negate, &operand, 1);
    ///
    /// assert_eq!(result, Ok(Value::Number(-3.0)));
    /// ```
    pub fn eval_unary_op(&mut self,
                         op: UnaryOperator,
                         operand: &Node,
                         line: usize)
                         -> EvalResult<Value> {
        let value = self.eval_value(operand)?;

        match op {
            UnaryOperator::Plus => Ok(Value::Number(value.as_number(line)?)),
            UnaryOperator::Negate => Ok(Value::Number(-value.as_number(line)?)),
            UnaryOperator::Not => Ok(Value::Boolean(!value.as_bool(line)?)),
        }
    }
}
