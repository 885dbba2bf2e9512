/// Core parser entry points and shared result types.
///
/// Contains the program and expression entry points and the `if` chain
/// parser used by the statement grammar.
pub mod core;

/// Parsing of the binary operator tiers.
///
/// Implements logical, comparison, additive and multiplicative precedence
/// levels, each left-associative.
pub mod binary;

/// Parsing of unary and primary expressions.
///
/// Handles prefix operators, literals, grouping, `input(...)`, variable
/// references and function calls.
pub mod unary;

/// Block parsing.
///
/// Parses statement sequences and brace-delimited blocks, enforcing the
/// semicolon rules between statements.
pub mod block;

/// Utility functions for the parser.
///
/// Provides token expectations, error construction and comma-separated list
/// parsing shared by the other parser modules.
pub mod utils;

/// Statement parsing.
///
/// Dispatches on the leading token to `print`, `if`, `while`, `def`,
/// `return`, assignment or expression statements.
pub mod statement;
