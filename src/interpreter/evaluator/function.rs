use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::{FunctionDef, Node},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult, Flow},
        value::Value,
    },
};

impl Context<'_> {
    /// Registers a function declaration.
    ///
    /// Declaring a name that already exists replaces the earlier function.
    /// Nothing is executed.
    pub fn declare_function(&mut self, def: &FunctionDef) {
        self.functions.insert(def.name.clone(), Rc::new(def.clone()));
    }

    /// Evaluates a call to a user-defined function.
    ///
    /// The argument count is checked before any argument is evaluated. The
    /// arguments are then evaluated left to right in the caller's scope, a
    /// fresh scope binding each parameter is pushed, and the body runs. The
    /// scope is popped whether the body succeeds or fails.
    ///
    /// # Returns
    /// The value of the `return` statement that ended the body, or
    /// `Value::Empty` if the body finished without one.
    ///
    /// # Errors
    /// - `RuntimeError::UnknownFunction` if no function has this name.
    /// - `RuntimeError::ArgumentCountMismatch` if the number of arguments
    ///   differs from the number of parameters.
    /// - `RuntimeError::CallDepthExceeded` if the call would nest deeper than
    ///   the configured limit.
    ///
    /// # Example
    /// ```
    /// use quill::{
    ///     interpreter::{evaluator::core::Context, value::Value},
    ///     parse,
    /// };
    ///
    /// let program = parse("def add(a, b) { return a + b; } add(2, 3);").unwrap();
    ///
    /// let mut input = std::io::empty();
    /// let mut output = Vec::new();
    /// let mut context = Context::new(&mut input, &mut output);
    ///
    /// assert_eq!(context.evaluate(&program), Ok(Value::Number(5.0)));
    /// ```
    pub fn eval_call(&mut self, name: &str, arguments: &[Node], line: usize) -> EvalResult<Value> {
        let function =
            self.functions
                .get(name)
                .cloned()
                .ok_or_else(|| RuntimeError::UnknownFunction { name: name.to_string(),
                                                              line })?;

        if arguments.len() != function.params.len() {
            return Err(RuntimeError::ArgumentCountMismatch { name: name.to_string(),
                                                             expected: function.params.len(),
                                                             found: arguments.len(),
                                                             line });
        }

        if self.call_depth >= self.max_call_depth {
            return Err(RuntimeError::CallDepthExceeded { limit: self.max_call_depth,
                                                         line });
        }

        let mut frame = HashMap::with_capacity(arguments.len());
        for (param, argument) in function.params.iter().zip(arguments) {
            frame.insert(param.clone(), self.eval_value(argument)?);
        }

        self.push_scope(frame);
        self.call_depth += 1;

        let result = self.eval(&function.body);

        self.call_depth -= 1;
        self.pop_scope();

        match result? {
            Flow::Return(value) => Ok(value),
            Flow::Normal(_) => Ok(Value::Empty),
        }
    }
}
