#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Tried to read a variable that is not bound in any visible scope.
    UnknownVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Called a function that was never declared.
    UnknownFunction {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The wrong number of arguments was supplied to a function.
    ArgumentCountMismatch {
        /// The name of the function.
        name:     String,
        /// The number of declared parameters.
        expected: usize,
        /// The number of arguments at the call site.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Operand types do not fit the operator.
    TypeMismatch {
        /// Details about the type mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A numeric value was expected, but not found.
    ExpectedNumber {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A boolean value was expected, but not found.
    ExpectedBoolean {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The left side of an assignment was not a variable.
    InvalidAssignmentTarget {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A `return` statement was reached outside of any function call.
    ReturnOutsideFunction {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Function calls nested deeper than the configured limit.
    CallDepthExceeded {
        /// The configured maximum depth.
        limit: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reading input or writing output failed.
    Io {
        /// Details reported by the underlying stream.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl RuntimeError {
    /// Returns the source line the error points at.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnknownVariable { line, .. }
            | Self::UnknownFunction { line, .. }
            | Self::ArgumentCountMismatch { line, .. }
            | Self::TypeMismatch { line, .. }
            | Self::ExpectedNumber { line }
            | Self::ExpectedBoolean { line }
            | Self::InvalidAssignmentTarget { line }
            | Self::ReturnOutsideFunction { line }
            | Self::CallDepthExceeded { line, .. }
            | Self::Io { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name, line } => {
                write!(f, "Error on line {line}: Unknown variable '{name}'.")
            },
            Self::UnknownFunction { name, line } => {
                write!(f, "Error on line {line}: Unknown function '{name}'.")
            },
            Self::ArgumentCountMismatch { name,
                                          expected,
                                          found,
                                          line, } => write!(f,
                                                            "Error on line {line}: Function '{name}' takes {expected} argument(s) but {found} were given."),
            Self::TypeMismatch { details, line } => {
                write!(f, "Error on line {line}: Type mismatch: {details}.")
            },
            Self::ExpectedNumber { line } => write!(f, "Error on line {line}: Expected number."),
            Self::ExpectedBoolean { line } => write!(f, "Error on line {line}: Expected boolean."),
            Self::InvalidAssignmentTarget { line } => {
                write!(f, "Error on line {line}: Only variables can be assigned to.")
            },
            Self::ReturnOutsideFunction { line } => {
                write!(f, "Error on line {line}: 'return' outside of a function.")
            },
            Self::CallDepthExceeded { limit, line } => write!(f,
                                                              "Error on line {line}: Maximum call depth of {limit} exceeded."),
            Self::Io { details, line } => write!(f, "Error on line {line}: I/O failure: {details}."),
        }
    }
}

impl std::error::Error for RuntimeError {}
