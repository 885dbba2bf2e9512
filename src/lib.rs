//! # quill
//!
//! quill is an interpreter for a small dynamically typed scripting language
//! written in Rust. It parses source text into an abstract syntax tree and
//! evaluates it directly, with support for variables, arithmetic, strings,
//! comparisons, conditionals, loops, user-defined functions and console I/O.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::{
    error::Error,
    io::{self, BufRead, Write},
};

use crate::{
    ast::Node,
    error::ParseError,
    interpreter::{
        evaluator::core::{Config, Context},
        lexer::{tokenize, tokenize_at},
        parser::core::parse_program,
        value::Value,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Node` enum and the operator types that represent
/// the syntactic structure of a program as a tree. The AST is built by the
/// parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines one node kind for every language construct.
/// - Attaches source line numbers to nodes for error reporting.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while tokenizing, parsing
/// or evaluating code. Every error carries the source line it refers to and
/// renders as `Error on line N: ...`.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation and value
/// representations to provide a complete runtime for source code.
///
/// # Responsibilities
/// - Coordinates the lexer, parser, evaluator and value types.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Parses source text into a program.
///
/// # Errors
/// Returns the first lexical or syntax error in the source.
///
/// # Examples
/// ```
/// use quill::parse;
///
/// assert_eq!(parse("x = 1; print x;").unwrap().len(), 2);
/// assert!(parse("x = ;").is_err());
/// ```
pub fn parse(source: &str) -> Result<Vec<Node>, ParseError> {
    parse_program(&tokenize(source)?)
}

/// Parses and evaluates a program using the given streams.
///
/// When `auto_print` is set and the program's final value is not empty, that
/// value is written to `output` after the program finishes.
///
/// # Returns
/// The value of the last top-level statement.
///
/// # Errors
/// Returns the parse error or the first runtime error. Nothing is evaluated
/// when parsing fails; output produced before a runtime error stays written.
///
/// # Examples
/// ```
/// use quill::{interpreter::evaluator::core::Config, run};
///
/// let mut input = std::io::empty();
/// let mut output = Vec::new();
///
/// let source = "def square(x) { return x * x; } print square(4); square(5);";
/// run(source, Config::default(), &mut input, &mut output, true).unwrap();
///
/// assert_eq!(String::from_utf8(output).unwrap(), "16\n25\n");
/// ```
pub fn run(source: &str,
           config: Config,
           input: &mut dyn BufRead,
           output: &mut dyn Write,
           auto_print: bool)
           -> Result<Value, Box<dyn Error>> {
    let program = parse(source)?;

    let mut context = Context::with_config(config, input, output);
    let result = context.evaluate(&program)?;

    if auto_print && !result.is_empty() {
        let line = program.last().and_then(Node::line_number).unwrap_or(1);
        context.write_line(&result, line)?;
    }

    Ok(result)
}

/// Evaluates source text one line at a time.
///
/// Every non-blank line is parsed and evaluated on its own, but all lines
/// share one context, so variables and functions carry over. The value of
/// each line that produces one is written to `output`. Because each line is
/// parsed separately, a construct cannot span several lines in this mode.
///
/// # Errors
/// Stops at the first line that fails to parse or evaluate. Errors report the
/// line's position in the whole source.
///
/// # Examples
/// ```
/// use quill::{interpreter::evaluator::core::Config, run_lines};
///
/// let mut input = std::io::empty();
/// let mut output = Vec::new();
///
/// run_lines("x = 2\nx * 21\n\nprint \"done\"", Config::default(), &mut input, &mut output).unwrap();
///
/// assert_eq!(String::from_utf8(output).unwrap(), "42\ndone\n");
/// ```
pub fn run_lines(source: &str,
                 config: Config,
                 input: &mut dyn BufRead,
                 output: &mut dyn Write)
                 -> Result<(), Box<dyn Error>> {
    let mut context = Context::with_config(config, input, output);

    for (index, text) in source.lines().enumerate() {
        if text.trim().is_empty() {
            continue;
        }

        let line = index + 1;
        let program = parse_program(&tokenize_at(text, line)?)?;
        let result = context.evaluate(&program)?;

        if !result.is_empty() {
            context.write_line(&result, line)?;
        }
    }

    Ok(())
}

/// Evaluates a program against standard input and output.
///
/// This is the entry point used by the command line. With `auto_print` the
/// program's final value, if any, is printed after it finishes.
///
/// # Errors
/// Returns an error if parsing or evaluation fails.
///
/// # Examples
/// ```
/// use quill::get_result;
///
/// // Simple program: no error should occur.
/// let res = get_result("result = 2 + 2;", false);
/// assert!(res.is_ok());
///
/// // Example with an intentional error (unknown variable).
/// let res = get_result("y = x + 1;", false);
/// assert!(res.is_err());
/// ```
pub fn get_result(source: &str, auto_print: bool) -> Result<(), Box<dyn Error>> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut output = stdout.lock();

    run(source, Config::default(), &mut input, &mut output, auto_print).map(|_| ())
}
