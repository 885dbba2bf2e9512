use std::cmp::Ordering;

use crate::{
    ast::{CompareOperator, Node},
    interpreter::{
        evaluator::{
            binary::arithmetic::type_mismatch,
            core::{Context, EvalResult},
        },
        value::Value,
    },
};

/// Maps a comparison operator and the ordering of its operands to the final
/// boolean.
///
/// `None` stands for unordered operands (a NaN is involved); only `!=` holds
/// for those.
#[must_use]
pub fn ordering_result(op: CompareOperator, ordering: Option<Ordering>) -> bool {
    match op {
        CompareOperator::Equal => ordering == Some(Ordering::Equal),
        CompareOperator::NotEqual => ordering != Some(Ordering::Equal),
        CompareOperator::Less => ordering == Some(Ordering::Less),
        CompareOperator::LessEqual => matches!(ordering, Some(Ordering::Less | Ordering::Equal)),
        CompareOperator::Greater => ordering == Some(Ordering::Greater),
        CompareOperator::GreaterEqual => {
            matches!(ordering, Some(Ordering::Greater | Ordering::Equal))
        },
    }
}

impl Context<'_> {
    /// Evaluates a comparison node. Both operands are evaluated left to right.
    ///
    /// # Errors
    /// Propagates errors from either operand and from
    /// [`Context::eval_comparison`].
    pub fn eval_compare_op(&mut self,
                           left: &Node,
                           op: CompareOperator,
                           right: &Node,
                           line: usize)
                           -> EvalResult<Value> {
        let lhs = self.eval_value(left)?;
        let rhs = self.eval_value(right)?;

        Self::eval_comparison(op, &lhs, &rhs, line)
    }

    /// Compares two values.
    ///
    /// Numbers compare numerically and strings lexicographically by code
    /// point. Booleans and empty values support only `==` and `!=`. Values of
    /// different types are never compared.
    ///
    /// # Errors
    /// Returns `RuntimeError::TypeMismatch` for operands of different types
    /// and for ordering operators applied to booleans or empty values.
    ///
    /// # Example
    /// ```
    /// use quill::{
    ///     ast::CompareOperator,
    ///     interpreter::{evaluator::core::Context, value::Value},
    /// };
    ///
    /// let a = Value::Number(3.0);
    /// let b = Value::Number(5.0);
    ///
    /// let result = Context::eval_comparison(CompareOperator::Less, &a, &b, 1);
    ///
    /// assert_eq!(result, Ok(Value::Boolean(true)));
    /// ```
    pub fn eval_comparison(op: CompareOperator,
                           left: &Value,
                           right: &Value,
                           line: usize)
                           -> EvalResult<Value> {
        let equality = matches!(op, CompareOperator::Equal | CompareOperator::NotEqual);

        let ordering = match (left, right) {
            (Value::Number(a), Value::Number(b)) => a.partial_cmp(b),
            (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
            (Value::Boolean(a), Value::Boolean(b)) if equality => Some(a.cmp(b)),
            (Value::Empty, Value::Empty) if equality => Some(Ordering::Equal),
            _ => return Err(type_mismatch(&op.to_string(), left, right, line)),
        };

        Ok(Value::Boolean(ordering_result(op, ordering)))
    }
}
