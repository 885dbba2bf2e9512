use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{MAX_NESTING_DEPTH, ParseResult},
    },
};

/// Enters one more level of nesting.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the token that opens the level.
/// - `depth`: The current nesting depth.
///
/// # Returns
/// The depth of the new level.
///
/// # Errors
/// Returns `ParseError::NestingTooDeep` at the line of the opening token once
/// `depth` has reached [`MAX_NESTING_DEPTH`].
pub(in crate::interpreter::parser) fn deeper<'a, I>(tokens: &mut Peekable<I>,
                                                    depth: usize)
                                                    -> ParseResult<usize>
    where I: Iterator<Item = &'a (Token, usize)>
{
    if depth < MAX_NESTING_DEPTH {
        return Ok(depth + 1);
    }

    let line = tokens.peek().map_or(0, |(_, line)| *line);
    Err(ParseError::NestingTooDeep { limit: MAX_NESTING_DEPTH,
                                     line })
}

/// Builds the error for a token that does not fit the grammar.
///
/// The offending token is the one currently at the front of the stream; it is
/// not consumed. An exhausted stream is reported as end of input.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the offending token.
/// - `expected`: Human readable description of what the grammar required.
pub(in crate::interpreter::parser) fn unexpected<'a, I>(tokens: &mut Peekable<I>,
                                                        expected: &str)
                                                        -> ParseError
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.peek().copied() {
        Some((tok, line)) => ParseError::UnexpectedToken { expected: expected.to_string(),
                                                           found:    tok.to_string(),
                                                           line:     *line, },
        None => ParseError::UnexpectedToken { expected: expected.to_string(),
                                              found:    Token::Eof.to_string(),
                                              line:     0, },
    }
}

/// Consumes the next token if it equals `expected`.
///
/// # Returns
/// The line of the consumed token.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` without consuming anything if the
/// next token is different.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    expected: &Token)
                                                    -> ParseResult<usize>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.peek().copied() {
        Some((tok, line)) if tok == expected => {
            tokens.next();
            Ok(*line)
        },
        _ => Err(unexpected(tokens, &expected.to_string())),
    }
}

/// Parses a comma-separated list of items until a closing token.
///
/// This utility is shared by parameter lists and call argument lists. It
/// repeatedly calls `parse_item` to parse one element, expecting either:
///
/// - a comma, to continue the list, or
/// - the specified closing token, to end it.
///
/// An immediately encountered closing token produces an empty list. The
/// closing token is consumed.
///
/// Grammar (simplified): `list := (item ("," item)*)? closing`
///
/// # Parameters
/// - `tokens`: Token iterator positioned after the opening token.
/// - `parse_item`: Function used to parse each list element.
/// - `closing`: The token that terminates the list.
///
/// # Errors
/// Returns a `ParseError` if an item fails to parse or a token other than a
/// comma or the closing token follows an item.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: &Token)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut items = Vec::new();
    if let Some((tok, _)) = tokens.peek()
       && tok == closing
    {
        tokens.next();

        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);
        match tokens.peek().copied() {
            Some((Token::Comma, _)) => {
                tokens.next();
            },
            Some((tok, _)) if tok == closing => {
                tokens.next();
                break;
            },
            _ => return Err(unexpected(tokens, &format!("',' or {closing}"))),
        }
    }
    Ok(items)
}

/// Parses a plain identifier and returns its name.
///
/// # Errors
/// Returns a `ParseError` if the next token is not an identifier.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<String>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.peek().copied() {
        Some((Token::Identifier(name), _)) => {
            tokens.next();
            Ok(name.clone())
        },
        _ => Err(unexpected(tokens, "an identifier")),
    }
}
