use std::iter::Peekable;

use crate::{
    ast::Node,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            binary::parse_logical,
            block::{parse_braced_block, parse_statements},
            utils::{deeper, expect},
        },
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// How deeply expressions and blocks may nest before parsing fails.
pub const MAX_NESTING_DEPTH: usize = 64;

/// Parses a whole program.
///
/// This is the entry point of the parser. It consumes the complete token
/// sequence, which must end with [`Token::Eof`], and returns the top-level
/// statements in source order.
///
/// Grammar: `program := statements EOF`
///
/// # Errors
/// Returns the first `ParseError` encountered; nothing is recovered. Input
/// nested deeper than [`MAX_NESTING_DEPTH`] fails with
/// `ParseError::NestingTooDeep`.
///
/// # Example
/// ```
/// use quill::{
///     ast::Node,
///     interpreter::{lexer::tokenize, parser::core::parse_program},
/// };
///
/// let tokens = tokenize("x = 1; print x").unwrap();
/// let program = parse_program(&tokens).unwrap();
///
/// assert_eq!(program.len(), 2);
/// assert!(matches!(program[1], Node::Print { .. }));
/// ```
pub fn parse_program(tokens: &[(Token, usize)]) -> ParseResult<Vec<Node>> {
    let mut iter = tokens.iter().peekable();

    let statements = parse_statements(&mut iter, 0)?;
    expect(&mut iter, &Token::Eof)?;

    Ok(statements)
}

/// Parses a full expression.
///
/// It begins at the lowest-precedence level, the logical operators, and
/// recursively descends through the precedence hierarchy. `depth` is the
/// nesting depth the expression starts at.
///
/// Grammar: `expression := logical`
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_logical(tokens, depth)
}

/// Parses an `if` statement with optional `elif`, `else if` and `else`
/// branches.
///
/// Syntax:
/// ```text
///     if (<condition>) { <statements> }
///     else if (<condition>) { <statements> }
///     elif (<condition>) { <statements> }
///     else { <statements> }
/// ```
/// Chained branches are parsed recursively and stored as a nested `If` in the
/// `else_branch` of the enclosing one.
///
/// # Parameters
/// - `tokens`: Token stream positioned after the `if` (or `elif`) keyword.
/// - `line`: Line number of that keyword.
/// - `depth`: Current nesting depth. Every chained branch nests one level
///   deeper.
///
/// # Errors
/// - `UnexpectedToken` if parentheses or braces are missing.
/// - `NestingTooDeep` if the chain is longer than the nesting limit allows.
/// - Propagates any errors from sub-expression and block parsing.
pub fn parse_if<'a, I>(tokens: &mut Peekable<I>, line: usize, depth: usize) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    expect(tokens, &Token::LParen)?;
    let condition = parse_expression(tokens, depth)?;
    expect(tokens, &Token::RParen)?;

    let then_block = parse_braced_block(tokens, depth)?;

    let else_branch = match tokens.peek().copied() {
        Some((Token::Else, _)) => {
            tokens.next();

            match tokens.peek().copied() {
                Some((Token::If, if_line)) => {
                    let depth = deeper(tokens, depth)?;
                    tokens.next();
                    Some(Box::new(parse_if(tokens, *if_line, depth)?))
                },
                _ => Some(Box::new(parse_braced_block(tokens, depth)?)),
            }
        },
        Some((Token::Elif, elif_line)) => {
            let depth = deeper(tokens, depth)?;
            tokens.next();
            Some(Box::new(parse_if(tokens, *elif_line, depth)?))
        },
        _ => None,
    };

    Ok(Node::If { condition: Box::new(condition),
                  then_block: Box::new(then_block),
                  else_branch,
                  line })
}
