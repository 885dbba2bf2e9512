use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, FunctionDef, Node},
    interpreter::{
        lexer::Token,
        parser::{
            block::parse_braced_block,
            core::{ParseResult, parse_expression, parse_if},
            utils::{expect, parse_comma_separated, parse_identifier, unexpected},
        },
    },
};

/// Parses a single statement.
///
/// The statement kind is chosen from the current token:
/// - `print` starts a print statement.
/// - `if` starts a conditional.
/// - `while` starts a loop.
/// - `def` starts a function declaration.
/// - `return` starts a return statement.
/// - an identifier followed by `=` is an assignment.
///
/// Anything else, including calls such as `f(1)`, is parsed as an expression
/// statement.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, line)` pairs.
/// - `depth`: Nesting depth of the enclosing block, 0 at the top level.
///
/// # Returns
/// The parsed statement [`Node`].
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let Some((token, line)) = tokens.peek().copied() else {
        return Err(unexpected(tokens, "a statement"));
    };

    match token {
        Token::Print => parse_print(tokens, *line, depth),
        Token::If => {
            tokens.next();
            parse_if(tokens, *line, depth)
        },
        Token::While => parse_while(tokens, *line, depth),
        Token::Def => parse_function_definition(tokens, *line, depth),
        Token::Return => parse_return(tokens, *line, depth),
        _ => {
            if let Some(statement) = parse_assignment(tokens, depth)? {
                return Ok(statement);
            }
            parse_expression(tokens, depth)
        },
    }
}

/// Parses `print <expression>`.
fn parse_print<'a, I>(tokens: &mut Peekable<I>,
                      line: usize,
                      depth: usize)
                      -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    expect(tokens, &Token::Print)?;
    let expr = parse_expression(tokens, depth)?;

    Ok(Node::Print { expr: Box::new(expr),
                     line })
}

/// Parses a pretest loop of the form `while (<condition>) { <statements> }`.
///
/// # Errors
/// Returns a `ParseError` if the parentheses or braces are missing, or if the
/// condition or body fails to parse.
fn parse_while<'a, I>(tokens: &mut Peekable<I>,
                      line: usize,
                      depth: usize)
                      -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    expect(tokens, &Token::While)?;
    expect(tokens, &Token::LParen)?;
    let condition = parse_expression(tokens, depth)?;
    expect(tokens, &Token::RParen)?;

    let body = parse_braced_block(tokens, depth)?;

    Ok(Node::While { condition: Box::new(condition),
                     body: Box::new(body),
                     line })
}

/// Parses a function declaration of the form
/// `def <name>(param1, param2, ...) { <statements> }`.
///
/// The declaration is only recorded here; its body runs when the function is
/// called.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the name or a parameter is not an identifier,
/// - the parameter list is not closed,
/// - the body is not a braced block.
fn parse_function_definition<'a, I>(tokens: &mut Peekable<I>,
                                    line: usize,
                                    depth: usize)
                                    -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    expect(tokens, &Token::Def)?;
    let name = parse_identifier(tokens)?;

    expect(tokens, &Token::LParen)?;
    let params = parse_comma_separated(tokens, parse_identifier, &Token::RParen)?;

    let body = parse_braced_block(tokens, depth)?;

    Ok(Node::Function(FunctionDef { name,
                                    params,
                                    body: Box::new(body),
                                    line }))
}

/// Parses `return <expression>`.
fn parse_return<'a, I>(tokens: &mut Peekable<I>,
                       line: usize,
                       depth: usize)
                       -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    expect(tokens, &Token::Return)?;
    let value = parse_expression(tokens, depth)?;

    Ok(Node::Return { value: Box::new(value),
                      line })
}

/// Parses an assignment statement of the form `<identifier> = <expression>`.
///
/// The function performs a limited lookahead: only if the next token is an
/// identifier and the one after it is `=` is anything consumed. The result is
/// a [`Node::BinaryOp`] with [`BinaryOperator::Assign`] whose left side is
/// the target [`Node::Variable`].
///
/// # Returns
/// - `Ok(Some(Node::BinaryOp))` if an assignment is parsed,
/// - `Ok(None)` if no assignment is present.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Option<Node>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let Some((Token::Identifier(name), name_line)) = tokens.peek().copied() else {
        return Ok(None);
    };

    let mut lookahead = tokens.clone();
    lookahead.next();

    let Some((Token::Equals, line)) = lookahead.peek().copied() else {
        return Ok(None);
    };

    tokens.next();
    tokens.next();

    let value = parse_expression(tokens, depth)?;
    let target = Node::Variable { name: name.clone(),
                                  line: *name_line, };

    Ok(Some(Node::BinaryOp { left:  Box::new(target),
                             op:    BinaryOperator::Assign,
                             right: Box::new(value),
                             line:  *line, }))
}
