/// An abstract syntax tree (AST) node.
///
/// `Node` covers every construct of the language, from literals and variables
/// to control flow and function declarations. Each variant models a distinct
/// syntactic construct and carries the source line of the token it was built
/// from, so the evaluator can point errors at the right place.
///
/// Children are owned exclusively by their parent; a tree is never shared and
/// never cyclic.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A numeric literal such as `3.5`.
    NumberLiteral {
        /// The constant value.
        value: f64,
        /// Line number in the source code.
        line:  usize,
    },
    /// A boolean literal, `true` or `false`.
    BoolLiteral {
        /// The constant value.
        value: bool,
        /// Line number in the source code.
        line:  usize,
    },
    /// A string literal such as `"hello"`.
    StringLiteral {
        /// The constant value, without quotes.
        value: String,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A prefix operation (`+x`, `-x`, `!x`).
    UnaryOp {
        /// The unary operator to apply.
        op:      UnaryOperator,
        /// The operand expression.
        operand: Box<Self>,
        /// Line number in the source code.
        line:    usize,
    },
    /// Arithmetic, or an assignment when `op` is [`BinaryOperator::Assign`].
    /// An assignment's left side is always a [`Node::Variable`].
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// Equality and ordering comparisons.
    CompareOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    CompareOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// Short-circuiting `&&` and `||`.
    LogicOp {
        /// Left operand, always evaluated.
        left:  Box<Self>,
        /// The operator.
        op:    LogicOperator,
        /// Right operand, evaluated only when the left side does not decide.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// `print <expression>`.
    Print {
        /// The expression whose value is written out.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// `input("prompt")`.
    Input {
        /// Text written before reading a line.
        prompt: String,
        /// Line number in the source code.
        line:   usize,
    },
    /// `if (...) { ... }` with an optional `else` block or `elif` chain.
    If {
        /// The condition, which must evaluate to a boolean.
        condition:   Box<Self>,
        /// Block evaluated when the condition holds.
        then_block:  Box<Self>,
        /// Either an `else` [`Node::Block`] or a nested [`Node::If`] for
        /// `elif`.
        else_branch: Option<Box<Self>>,
        /// Line number in the source code.
        line:        usize,
    },
    /// A sequence of statements.
    Block {
        /// Statements inside the block.
        statements: Vec<Self>,
        /// Line of the first statement, `None` for an empty block.
        line:       Option<usize>,
    },
    /// `while (...) { ... }`.
    While {
        /// Condition checked before every iteration.
        condition: Box<Self>,
        /// The loop body, a [`Node::Block`].
        body:      Box<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// `def name(params) { ... }`.
    Function(FunctionDef),
    /// `name(args)`.
    Call {
        /// Name of the function being called.
        name:      String,
        /// Arguments to the function.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// `return <expression>`.
    Return {
        /// The value handed back to the caller.
        value: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
}

impl Node {
    /// Gets the line number from `self`.
    ///
    /// Empty blocks have no line of their own and report `None`.
    /// ## Example
    /// ```
    /// use quill::ast::Node;
    ///
    /// let node = Node::Variable { name: "x".to_string(),
    ///                             line: 5, };
    ///
    /// assert_eq!(node.line_number(), Some(5));
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> Option<usize> {
        match self {
            Self::NumberLiteral { line, .. }
            | Self::BoolLiteral { line, .. }
            | Self::StringLiteral { line, .. }
            | Self::Variable { line, .. }
            | Self::UnaryOp { line, .. }
            | Self::BinaryOp { line, .. }
            | Self::CompareOp { line, .. }
            | Self::LogicOp { line, .. }
            | Self::Print { line, .. }
            | Self::Input { line, .. }
            | Self::If { line, .. }
            | Self::While { line, .. }
            | Self::Function(FunctionDef { line, .. })
            | Self::Call { line, .. }
            | Self::Return { line, .. } => Some(*line),
            Self::Block { line, .. } => *line,
        }
    }
}

/// Represents a user-defined function declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    /// The name of the function.
    pub name:   String,
    /// The parameter names, in call order.
    pub params: Vec<String>,
    /// The body, always a [`Node::Block`].
    pub body:   Box<Node>,
    /// Line number in the source code.
    pub line:   usize,
}

/// Represents a prefix operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Numeric identity (`+x`).
    Plus,
    /// Arithmetic negation (`-x`).
    Negate,
    /// Logical NOT (`!x`).
    Not,
}

/// Represents an arithmetic operator or assignment.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition or string concatenation (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Assignment (`=`)
    Assign,
}

/// Represents a comparison operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CompareOperator {
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Less than (`<`)
    Less,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than (`>`)
    Greater,
    /// Greater than or equal (`>=`)
    GreaterEqual,
}

/// Represents a short-circuiting logical operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LogicOperator {
    /// Logical and (`&&`)
    And,
    /// Logical or (`||`)
    Or,
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Plus => "+",
            Self::Negate => "-",
            Self::Not => "!",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Assign => "=",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for CompareOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for LogicOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::And => "&&",
            Self::Or => "||",
        };
        write!(f, "{operator}")
    }
}
