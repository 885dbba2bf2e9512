use crate::{
    ast::Node,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult, Flow},
        value::Value,
    },
};

impl Context<'_> {
    /// Evaluates an `if` statement.
    ///
    /// The condition must be a boolean. When it holds, the then-block runs;
    /// otherwise the else branch runs if there is one. An `elif` chain is a
    /// nested `if` in the else branch, so at most one block of the chain runs.
    ///
    /// # Returns
    /// The flow of the block that ran, or `Flow::Normal(Value::Empty)` when no
    /// block ran.
    ///
    /// # Errors
    /// Returns `RuntimeError::ExpectedBoolean` if the condition is not a
    /// boolean, and propagates errors from the executed block.
    pub fn eval_if(&mut self,
                   condition: &Node,
                   then_block: &Node,
                   else_branch: Option<&Node>,
                   line: usize)
                   -> EvalResult<Flow> {
        let condition_line = condition.line_number().unwrap_or(line);

        if self.eval_value(condition)?.as_bool(condition_line)? {
            self.eval(then_block)
        } else if let Some(branch) = else_branch {
            self.eval(branch)
        } else {
            Ok(Flow::Normal(Value::Empty))
        }
    }

    /// Evaluates a block of statements in order.
    ///
    /// Blocks do not introduce a scope; assignments inside them bind in the
    /// current scope. Evaluation stops at the first statement that returns.
    ///
    /// # Returns
    /// The value of the last statement, `Value::Empty` for an empty block, or
    /// the return signal that stopped the block.
    pub fn eval_block(&mut self, statements: &[Node]) -> EvalResult<Flow> {
        let mut last = Value::Empty;

        for statement in statements {
            match self.eval(statement)? {
                Flow::Normal(value) => last = value,
                flow @ Flow::Return(_) => return Ok(flow),
            }
        }

        Ok(Flow::Normal(last))
    }

    /// Evaluates a `while` loop.
    ///
    /// The condition is checked before every iteration and must be a boolean
    /// each time. A return signal from the body ends the loop and is handed to
    /// the caller.
    ///
    /// # Returns
    /// The value of the last iteration's body, or `Value::Empty` if the body
    /// never ran.
    ///
    /// # Errors
    /// Returns `RuntimeError::ExpectedBoolean` if the condition is not a
    /// boolean, and propagates errors from the body.
    ///
    /// # Example
    /// ```
    /// use quill::{interpreter::evaluator::core::Context, parse};
    ///
    /// let program = parse("i = 0; while (i < 3) { print i; i = i + 1; }").unwrap();
    ///
    /// let mut input = std::io::empty();
    /// let mut output = Vec::new();
    /// let mut context = Context::new(&mut input, &mut output);
    /// context.evaluate(&program).unwrap();
    /// drop(context);
    ///
    /// assert_eq!(String::from_utf8(output).unwrap(), "0\n1\n2\n");
    /// ```
    pub fn eval_while(&mut self, condition: &Node, body: &Node, line: usize) -> EvalResult<Flow> {
        let condition_line = condition.line_number().unwrap_or(line);
        let mut last = Value::Empty;

        while self.eval_value(condition)?.as_bool(condition_line)? {
            match self.eval(body)? {
                Flow::Normal(value) => last = value,
                flow @ Flow::Return(_) => return Ok(flow),
            }
        }

        Ok(Flow::Normal(last))
    }

    /// Evaluates a `return` statement.
    ///
    /// The value expression is evaluated and wrapped in [`Flow::Return`],
    /// which unwinds through blocks and loops to the enclosing call.
    ///
    /// # Errors
    /// Returns `RuntimeError::ReturnOutsideFunction` when no function call is
    /// active.
    pub fn eval_return(&mut self, value: &Node, line: usize) -> EvalResult<Flow> {
        if self.call_depth == 0 {
            return Err(RuntimeError::ReturnOutsideFunction { line });
        }

        Ok(Flow::Return(self.eval_value(value)?))
    }
}
