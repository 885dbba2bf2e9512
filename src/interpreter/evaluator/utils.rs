use std::collections::HashMap;

use crate::{
    ast::Node,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult, Scoping},
        value::Value,
    },
};

impl Context<'_> {
    /// Evaluates a variable reference.
    ///
    /// Looks the name up with [`Context::get_variable`] and returns a copy of
    /// the bound value.
    ///
    /// # Errors
    /// Returns `RuntimeError::UnknownVariable` if no visible scope binds the
    /// name.
    pub fn eval_variable(&self, name: &str, line: usize) -> EvalResult<Value> {
        self.get_variable(name)
            .cloned()
            .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string(),
                                                          line })
    }

    /// Evaluates an assignment `name = expression`.
    ///
    /// The right side is evaluated first, then bound in the innermost scope.
    /// Inside a function this creates or overwrites a local even when an outer
    /// scope already has a variable of the same name.
    ///
    /// # Returns
    /// [`Value::Empty`]; an assignment produces no value.
    ///
    /// # Example
    /// ```
    /// use quill::{
    ///     ast::Node,
    ///     interpreter::{evaluator::core::Context, value::Value},
    /// };
    ///
    /// let mut input = std::io::empty();
    /// let mut output = Vec::new();
    /// let mut context = Context::new(&mut input, &mut output);
    ///
    /// let target = Node::Variable { name: "x".to_string(),
    ///                               line: 1, };
    /// let value = Node::NumberLiteral { value: 5.0,
    ///                                   line:  1, };
    ///
    /// assert_eq!(context.eval_assignment(&target, &value, 1), Ok(Value::Empty));
    /// assert_eq!(context.get_variable("x"), Some(&Value::Number(5.0)));
    /// ```
    pub fn eval_assignment(&mut self, target: &Node, value: &Node, line: usize) -> EvalResult<Value> {
        let Node::Variable { name, .. } = target else {
            return Err(RuntimeError::InvalidAssignmentTarget { line });
        };

        let value = self.eval_value(value)?;
        self.define_local(name, value);
        Ok(Value::Empty)
    }

    /// Pushes a new local scope.
    ///
    /// # Example
    /// ```
    /// use quill::interpreter::evaluator::core::Context;
    ///
    /// let mut input = std::io::empty();
    /// let mut output = Vec::new();
    /// let mut context = Context::new(&mut input, &mut output);
    /// let initial = context.scope_stack.len();
    ///
    /// context.push_scope(Default::default());
    ///
    /// assert_eq!(context.scope_stack.len(), initial + 1);
    /// ```
    pub fn push_scope(&mut self, scope: HashMap<String, Value>) {
        self.scope_stack.push(scope);
    }

    /// Removes the innermost local scope. The global scope is never removed.
    pub fn pop_scope(&mut self) {
        if self.scope_stack.len() > 1 {
            self.scope_stack.pop();
        }
    }

    /// Retrieves a variable visible from the current scope.
    ///
    /// With [`Scoping::Lexical`] only the innermost scope and the global scope
    /// are searched. With [`Scoping::Dynamic`] every scope on the stack is
    /// searched from the innermost outward.
    ///
    /// Returns `None` if the variable is not visible.
    #[must_use]
    pub fn get_variable(&self, name: &str) -> Option<&Value> {
        match self.scoping {
            Scoping::Lexical => self.scope_stack
                                    .last()
                                    .and_then(|scope| scope.get(name))
                                    .or_else(|| {
                                        self.scope_stack.first().and_then(|scope| scope.get(name))
                                    }),
            Scoping::Dynamic => {
                self.scope_stack.iter().rev().find_map(|scope| scope.get(name))
            },
        }
    }

    /// Defines a variable in the current (innermost) scope, replacing any
    /// previous binding there.
    pub fn define_local(&mut self, name: &str, value: Value) {
        if let Some(scope) = self.scope_stack.last_mut() {
            scope.insert(name.to_string(), value);
        } else {
            self.scope_stack.push(HashMap::from([(name.to_string(), value)]));
        }
    }
}
