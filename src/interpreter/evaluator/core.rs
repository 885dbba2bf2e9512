use std::{
    collections::HashMap,
    io::{BufRead, Write},
    rc::Rc,
};

use crate::{
    ast::{BinaryOperator, FunctionDef, Node},
    error::RuntimeError,
    interpreter::value::Value,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Default limit on nested function calls.
pub const MAX_CALL_DEPTH: usize = 128;

/// The outcome of evaluating a node.
///
/// `Return` is the signal raised by a `return` statement. Blocks, conditionals
/// and loops hand it upward untouched; only a function call turns it back into
/// a plain value.
#[derive(Debug, Clone, PartialEq)]
pub enum Flow {
    /// Evaluation finished normally with this value.
    Normal(Value),
    /// A `return` statement is unwinding to the enclosing call with this value.
    Return(Value),
}

/// Controls which scopes a function body can see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scoping {
    /// A call sees its own parameters and locals plus the global scope.
    #[default]
    Lexical,
    /// Lookup scans every scope on the stack, innermost first, so a callee
    /// can read the locals of whichever functions are currently calling it.
    Dynamic,
}

/// Evaluator settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Scope visibility inside function bodies.
    pub scoping:        Scoping,
    /// Maximum number of nested function calls before evaluation fails.
    pub max_call_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self { scoping:        Scoping::default(),
               max_call_depth: MAX_CALL_DEPTH, }
    }
}

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state: the scope stack, all user defined
/// functions, the settings and the streams used by `print` and `input`.
///
/// ## Usage
///
/// `Context` is created once per run and reused for every statement, so
/// variables and functions defined by one statement are visible to the next.
pub struct Context<'io> {
    /// Active scopes, global scope first. A scope is pushed for every function
    /// call and popped when the call ends.
    pub scope_stack:    Vec<HashMap<String, Value>>,
    /// A mapping from function names to their declarations. Populated when a
    /// `def` statement is evaluated; later declarations replace earlier ones.
    pub functions:      HashMap<String, Rc<FunctionDef>>,
    /// Scope visibility inside function bodies.
    pub scoping:        Scoping,
    /// Maximum number of nested function calls.
    pub max_call_depth: usize,
    pub(crate) call_depth: usize,
    pub(crate) input:      &'io mut dyn BufRead,
    pub(crate) output:     &'io mut dyn Write,
}

impl<'io> Context<'io> {
    /// Creates a new evaluation context with the default [`Config`], a single
    /// empty global scope and no user-defined functions.
    pub fn new(input: &'io mut dyn BufRead, output: &'io mut dyn Write) -> Self {
        Self::with_config(Config::default(), input, output)
    }

    /// Creates a new evaluation context with the given settings.
    pub fn with_config(config: Config,
                       input: &'io mut dyn BufRead,
                       output: &'io mut dyn Write)
                       -> Self {
        Self { scope_stack: vec![HashMap::new()],
               functions: HashMap::new(),
               scoping: config.scoping,
               max_call_depth: config.max_call_depth,
               call_depth: 0,
               input,
               output }
    }

    /// Evaluates a program.
    ///
    /// Top-level statements run in order and the value of the last one is
    /// returned, or [`Value::Empty`] for an empty program. The first error
    /// aborts the run.
    ///
    /// # Example
    /// ```
    /// use quill::{
    ///     interpreter::{evaluator::core::Context, value::Value},
    ///     parse,
    /// };
    ///
    /// let program = parse("x = 5; x + 1;").unwrap();
    ///
    /// let mut input = std::io::empty();
    /// let mut output = Vec::new();
    /// let mut context = Context::new(&mut input, &mut output);
    ///
    /// assert_eq!(context.evaluate(&program), Ok(Value::Number(6.0)));
    /// ```
    pub fn evaluate(&mut self, statements: &[Node]) -> EvalResult<Value> {
        let mut last = Value::Empty;

        for statement in statements {
            last = self.eval_value(statement)?;
        }

        Ok(last)
    }

    /// Evaluates a node and returns how evaluation ended.
    ///
    /// This is the main dispatch of the evaluator, one arm per node variant.
    /// Expressions always finish with [`Flow::Normal`]; only `return` and the
    /// statements that contain it can produce [`Flow::Return`].
    pub fn eval(&mut self, node: &Node) -> EvalResult<Flow> {
        match node {
            Node::NumberLiteral { value, .. } => Ok(Flow::Normal(Value::Number(*value))),
            Node::BoolLiteral { value, .. } => Ok(Flow::Normal(Value::Boolean(*value))),
            Node::StringLiteral { value, .. } => Ok(Flow::Normal(Value::String(value.clone()))),
            Node::Variable { name, line } => self.eval_variable(name, *line).map(Flow::Normal),
            Node::UnaryOp { op, operand, line } => {
                self.eval_unary_op(*op, operand, *line).map(Flow::Normal)
            },
            Node::BinaryOp { left,
                             op: BinaryOperator::Assign,
                             right,
                             line, } => self.eval_assignment(left, right, *line).map(Flow::Normal),
            Node::BinaryOp { left,
                             op,
                             right,
                             line, } => {
                self.eval_binary_op(left, *op, right, *line).map(Flow::Normal)
            },
            Node::CompareOp { left,
                              op,
                              right,
                              line, } => {
                self.eval_compare_op(left, *op, right, *line).map(Flow::Normal)
            },
            Node::LogicOp { left,
                            op,
                            right,
                            line, } => self.eval_logic_op(left, *op, right, *line).map(Flow::Normal),
            Node::Print { expr, line } => self.eval_print(expr, *line).map(Flow::Normal),
            Node::Input { prompt, line } => self.eval_input(prompt, *line).map(Flow::Normal),
            Node::If { condition,
                       then_block,
                       else_branch,
                       line, } => self.eval_if(condition, then_block, else_branch.as_deref(), *line),
            Node::Block { statements, .. } => self.eval_block(statements),
            Node::While { condition, body, line } => self.eval_while(condition, body, *line),
            Node::Function(def) => {
                self.declare_function(def);
                Ok(Flow::Normal(Value::Empty))
            },
            Node::Call { name,
                         arguments,
                         line, } => self.eval_call(name, arguments, *line).map(Flow::Normal),
            Node::Return { value, line } => self.eval_return(value, *line),
        }
    }

    /// Evaluates a node whose result is needed as a value.
    ///
    /// A return signal cannot be used as a value; reaching one here means a
    /// `return` ran outside of any function call.
    pub fn eval_value(&mut self, node: &Node) -> EvalResult<Value> {
        match self.eval(node)? {
            Flow::Normal(value) => Ok(value),
            Flow::Return(_) => {
                Err(RuntimeError::ReturnOutsideFunction { line: node.line_number().unwrap_or(0) })
            },
        }
    }
}
