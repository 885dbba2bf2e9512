use crate::{
    ast::{BinaryOperator, Node},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::Value,
    },
};

impl Context<'_> {
    /// Evaluates an arithmetic operation.
    ///
    /// Both operands are evaluated left to right before the operator is
    /// applied.
    ///
    /// # Errors
    /// Propagates errors from either operand and from
    /// [`Context::eval_arithmetic`].
    pub fn eval_binary_op(&mut self,
                          left: &Node,
                          op: BinaryOperator,
                          right: &Node,
                          line: usize)
                          -> EvalResult<Value> {
        let lhs = self.eval_value(left)?;
        let rhs = self.eval_value(right)?;

        Self::eval_arithmetic(op, &lhs, &rhs, line)
    }

    /// Applies an arithmetic operator to two values.
    ///
    /// `+` adds two numbers or concatenates two strings. `-`, `*` and `/`
    /// require two numbers. Division follows IEEE 754, so dividing by zero
    /// gives an infinity or NaN instead of an error.
    ///
    /// # Errors
    /// - `RuntimeError::TypeMismatch` for any other combination of operands.
    /// - `RuntimeError::InvalidAssignmentTarget` for [`BinaryOperator::Assign`],
    ///   which does not operate on values.
    ///
    /// # Example
    /// ```
    /// use quill::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::Value},
    /// };
    ///
    /// let a = Value::from("foo");
    /// let b = Value::from("bar");
    ///
    /// let result = Context::eval_arithmetic(BinaryOperator::Add, &a, &b, 1);
    ///
    /// assert_eq!(result, Ok(Value::from("foobar")));
    /// assert!(Context::eval_arithmetic(BinaryOperator::Add, &a, &Value::Number(1.0), 1).is_err());
    /// ```
    pub fn eval_arithmetic(op: BinaryOperator,
                           left: &Value,
                           right: &Value,
                           line: usize)
                           -> EvalResult<Value> {
        match (op, left, right) {
            (BinaryOperator::Add, Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
            (BinaryOperator::Add, Value::String(a), Value::String(b)) => {
                Ok(Value::String(format!("{a}{b}")))
            },
            (BinaryOperator::Sub, Value::Number(a), Value::Number(b)) => Ok(Value::Number(a - b)),
            (BinaryOperator::Mul, Value::Number(a), Value::Number(b)) => Ok(Value::Number(a * b)),
            (BinaryOperator::Div, Value::Number(a), Value::Number(b)) => Ok(Value::Number(a / b)),
            (BinaryOperator::Assign, ..) => Err(RuntimeError::InvalidAssignmentTarget { line }),
            _ => Err(type_mismatch(&op.to_string(), left, right, line)),
        }
    }
}

/// Builds the error for an operator applied to operands it does not accept.
pub(crate) fn type_mismatch(op: &str, left: &Value, right: &Value, line: usize) -> RuntimeError {
    RuntimeError::TypeMismatch { details: format!("cannot apply '{op}' to {} and {}",
                                                  left.type_name(),
                                                  right.type_name()),
                                 line }
}
