/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the AST statement by statement, evaluates expressions,
/// manages variable scopes and the function table, and performs console I/O.
/// It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates every AST node kind, including `return` propagation.
/// - Handles variables, user-defined functions and control flow.
/// - Reports runtime errors such as unknown names or mismatched types.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens, each
/// corresponding to a language element such as a number, string, identifier,
/// operator, delimiter or keyword. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens paired with their line.
/// - Skips whitespace and `//` comments.
/// - Reports lexical errors for invalid characters and unterminated strings.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer with recursive
/// descent and constructs the tree of statements and expressions that the
/// evaluator executes.
///
/// # Responsibilities
/// - Converts tokens into [`crate::ast::Node`] trees.
/// - Encodes operator precedence and associativity in the tree shape.
/// - Reports the first syntax error with its line.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// Values are numbers, booleans, strings and the empty value produced by
/// statements. The module also provides the checked conversions used by
/// operators and conditions.
pub mod value;
