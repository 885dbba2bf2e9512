use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Represents a runtime value in the interpreter.
///
/// Values are plain immutable data and are copied whenever they are bound to a
/// name, passed as an argument or returned from a function.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A numeric value (double precision floating-point).
    Number(f64),
    /// A boolean value (`true` or `false`).
    /// Produced by comparison and logical operators and required by the
    /// conditions of `if` and `while`.
    Boolean(bool),
    /// A string of text.
    String(String),
    /// The absence of a value. Produced by statements such as `print`,
    /// assignments and function declarations.
    Empty,
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl Value {
    /// Converts the value to an `f64`, or returns an error if not numeric.
    ///
    /// # Example
    /// ```
    /// use quill::interpreter::value::Value;
    ///
    /// assert_eq!(Value::Number(10.0).as_number(1), Ok(10.0));
    /// assert!(Value::Boolean(true).as_number(1).is_err());
    /// ```
    pub const fn as_number(&self, line: usize) -> EvalResult<f64> {
        match self {
            Self::Number(n) => Ok(*n),
            _ => Err(RuntimeError::ExpectedNumber { line }),
        }
    }

    /// Converts the value to `bool`, or returns an error if not boolean.
    ///
    /// Used for the conditions of `if` and `while` and for logical operators.
    /// There is no truthiness: numbers and strings are never booleans.
    pub const fn as_bool(&self, line: usize) -> EvalResult<bool> {
        match self {
            Self::Boolean(b) => Ok(*b),
            _ => Err(RuntimeError::ExpectedBoolean { line }),
        }
    }

    /// Returns `true` for [`Value::Empty`].
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns the name of the value's type, used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Boolean(_) => "boolean",
            Self::String(_) => "string",
            Self::Empty => "empty",
        }
    }

    /// Interprets one line of external input.
    ///
    /// Surrounding whitespace is ignored. A line that reads as a finite number
    /// becomes a [`Value::Number`], everything else a [`Value::String`] holding
    /// the line without its line terminator.
    ///
    /// # Example
    /// ```
    /// use quill::interpreter::value::Value;
    ///
    /// assert_eq!(Value::from_input(" 42\n"), Value::Number(42.0));
    /// assert_eq!(Value::from_input("forty two\n"), Value::from("forty two"));
    /// assert_eq!(Value::from_input("inf\n"), Value::from("inf"));
    /// ```
    #[must_use]
    pub fn from_input(line: &str) -> Self {
        let line = line.trim_end_matches(['\n', '\r']);

        match line.trim().parse::<f64>() {
            Ok(n) if n.is_finite() => Self::Number(n),
            _ => Self::String(line.to_string()),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::String(s) => write!(f, "{s}"),
            Self::Empty => Ok(()),
        }
    }
}
