/// Parsing errors.
///
/// Defines all error types that can occur during tokenizing and parsing of
/// source code. Parse errors include unexpected tokens, malformed literals and
/// characters the tokenizer does not recognize.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Runtime
/// errors include unknown names, argument count mismatches, type mismatches
/// and misplaced `return` statements.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
