use std::iter::Peekable;

use crate::{
    ast::{Node, UnaryOperator},
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::{deeper, expect, parse_comma_separated, unexpected},
        },
    },
};

/// Parses a unary expression.
///
/// Supports prefix operators:
/// - `+`  (numeric identity)
/// - `-`  (numeric negation)
/// - `!`  (logical not)
///
/// Unary operators are right-associative, so an input like `!-x` is parsed as
/// `!( -x )`.
///
/// Grammar:
/// ```text
///     unary := ("+" | "-" | "!") unary
///            | primary
/// ```
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let op = match tokens.peek().copied() {
        Some((Token::Plus, line)) => Some((UnaryOperator::Plus, *line)),
        Some((Token::Minus, line)) => Some((UnaryOperator::Negate, *line)),
        Some((Token::Bang, line)) => Some((UnaryOperator::Not, *line)),
        _ => None,
    };

    if let Some((op, line)) = op {
        let depth = deeper(tokens, depth)?;
        tokens.next();
        let operand = parse_unary(tokens, depth)?;
        Ok(Node::UnaryOp { op,
                           operand: Box::new(operand),
                           line })
    } else {
        parse_primary(tokens, depth)
    }
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar and include:
/// - number, boolean and string literals
/// - parenthesized expressions
/// - `input("prompt")`
/// - identifiers and function calls
///
/// Grammar (simplified):
/// ```text
///     primary := literal
///              | "(" expression ")"
///              | "input" "(" string? ")"
///              | identifier ("(" arguments ")")?
/// ```
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` when the current token cannot start
/// an expression.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.peek().copied() {
        Some((Token::Number(value), line)) => {
            tokens.next();
            Ok(Node::NumberLiteral { value: *value,
                                     line:  *line, })
        },
        Some((Token::Bool(value), line)) => {
            tokens.next();
            Ok(Node::BoolLiteral { value: *value,
                                   line:  *line, })
        },
        Some((Token::Str(value), line)) => {
            tokens.next();
            Ok(Node::StringLiteral { value: value.clone(),
                                     line:  *line, })
        },
        Some((Token::LParen, _)) => parse_grouping(tokens, depth),
        Some((Token::Input, _)) => parse_input(tokens),
        Some((Token::Identifier(_), _)) => parse_identifier_or_call(tokens, depth),
        _ => Err(unexpected(tokens, "an expression")),
    }
}

/// Parses a parenthesized expression.
///
/// Expected form `( expression )`. The inner expression is returned as-is,
/// without a wrapper node.
///
/// Grammar `grouping := "(" expression ")"`
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let depth = deeper(tokens, depth)?;
    expect(tokens, &Token::LParen)?;
    let expr = parse_expression(tokens, depth)?;
    expect(tokens, &Token::RParen)?;
    Ok(expr)
}

/// Parses an `input` expression.
///
/// The prompt must be a string literal; leaving it out is the same as an
/// empty prompt.
///
/// Grammar: `input := "input" "(" string? ")"`
fn parse_input<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = expect(tokens, &Token::Input)?;
    expect(tokens, &Token::LParen)?;

    let prompt = match tokens.peek().copied() {
        Some((Token::Str(prompt), _)) => {
            tokens.next();
            prompt.clone()
        },
        Some((Token::RParen, _)) => String::new(),
        _ => return Err(unexpected(tokens, "a string prompt")),
    };

    expect(tokens, &Token::RParen)?;
    Ok(Node::Input { prompt, line })
}

/// Parses an identifier or function call.
///
/// Supported forms:
///
/// - identifier
/// - identifier(arg1, arg2, ...)
///
/// The function first consumes the identifier token. If the next token is `(`,
/// a call is parsed; otherwise the identifier is a variable reference.
///
/// # Errors
/// Returns a `ParseError` if argument parsing fails or the closing `)` is
/// missing.
fn parse_identifier_or_call<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (name, line) = match tokens.peek().copied() {
        Some((Token::Identifier(name), line)) => (name.clone(), *line),
        _ => return Err(unexpected(tokens, "an identifier")),
    };
    tokens.next();

    if let Some((Token::LParen, _)) = tokens.peek() {
        let depth = deeper(tokens, depth)?;
        tokens.next();
        let arguments =
            parse_comma_separated(tokens, |tokens| parse_expression(tokens, depth), &Token::RParen)?;
        Ok(Node::Call { name,
                        arguments,
                        line })
    } else {
        Ok(Node::Variable { name, line })
    }
}
