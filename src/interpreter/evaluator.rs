/// Core evaluation logic and context management.
///
/// Contains the runtime context, its configuration, the control-flow result
/// type and the dispatch over every AST node.
pub mod core;

/// Binary operator evaluation logic.
///
/// Handles arithmetic, string concatenation, comparisons and the
/// short-circuiting logical operators.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements numeric identity, negation and logical NOT.
pub mod unary;

/// Evaluation of conditionals, blocks, loops and `return`.
///
/// Every construct that sequences statements stops as soon as a return
/// signal appears and hands it to its caller.
pub mod control_flow;

/// Function declaration and call evaluation.
///
/// Handles registration in the function table, argument checking, scope
/// management around calls and capturing the returned value.
pub mod function;

/// Console interaction.
///
/// Implements `print` and `input` against the context's output and input
/// streams.
pub mod io;

/// Utility functions for evaluation.
///
/// Provides scope stack management, variable lookup and assignment.
pub mod utils;
