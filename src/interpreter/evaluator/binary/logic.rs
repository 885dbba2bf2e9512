use crate::{
    ast::{LogicOperator, Node},
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::Value,
    },
};

impl Context<'_> {
    /// Evaluates `&&` or `||` with short-circuiting.
    ///
    /// The right operand is evaluated only when the left one does not decide
    /// the result: `false && ...` is `false` and `true || ...` is `true`
    /// without touching the right side.
    ///
    /// # Errors
    /// Returns `RuntimeError::ExpectedBoolean` if an evaluated operand is not
    /// a boolean.
    ///
    /// # Example
    /// ```
    /// use quill::{
    ///     ast::{LogicOperator, Node},
    ///     interpreter::{evaluator::core::Context, value::Value},
    /// };
    ///
    /// let mut input = std::io::empty();
    /// let mut output = Vec::new();
    /// let mut context = Context::new(&mut input, &mut output);
    ///
    /// let left = Node::BoolLiteral { value: false,
    ///                                line:  1, };
    /// // Never evaluated, so the unknown variable is not an error.
    /// let right = Node::Variable { name: "missing".to_string(),
    ///                              line: 1, };
    ///
    /// let result = context.eval_logic_op(&left, LogicOperator::And, &right, 1);
    ///
    /// assert_eq!(result, Ok(Value::Boolean(false)));
    /// ```
    pub fn eval_logic_op(&mut self,
                         left: &Node,
                         op: LogicOperator,
                         right: &Node,
                         line: usize)
                         -> EvalResult<Value> {
        let lhs = self.eval_value(left)?.as_bool(line)?;

        match (op, lhs) {
            (LogicOperator::And, false) => Ok(Value::Boolean(false)),
            (LogicOperator::Or, true) => Ok(Value::Boolean(true)),
            _ => Ok(Value::Boolean(self.eval_value(right)?.as_bool(line)?)),
        }
    }
}
