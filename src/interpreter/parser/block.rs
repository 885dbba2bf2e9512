use std::iter::Peekable;

use crate::{
    ast::Node,
    interpreter::{
        lexer::Token,
        parser::{
            core::ParseResult,
            statement::parse_statement,
            utils::{deeper, expect, unexpected},
        },
    },
};

/// Parses a run of statements up to, not including, a closing brace or the
/// end of input.
///
/// Statements are separated by `;`. The separator may be left out before a
/// closing brace or the end of input, and after statements that end in a
/// block of their own (`if`, `while`, `def`). Stray semicolons are skipped.
///
/// Grammar: `statements := (statement (";" | <before "}" or EOF>))*`
///
/// # Errors
/// Returns a `ParseError` if a statement fails to parse or two statements
/// follow each other without a separator.
pub fn parse_statements<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Vec<Node>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut statements = Vec::new();

    loop {
        while let Some((Token::Semicolon, _)) = tokens.peek() {
            tokens.next();
        }

        if matches!(tokens.peek(), None | Some((Token::RBrace | Token::Eof, _))) {
            break;
        }

        let statement = parse_statement(tokens, depth)?;
        let ends_with_block =
            matches!(statement, Node::If { .. } | Node::While { .. } | Node::Function(_));
        statements.push(statement);

        match tokens.peek().copied() {
            Some((Token::Semicolon, _)) => {
                tokens.next();
            },
            None | Some((Token::RBrace | Token::Eof, _)) => {},
            _ if ends_with_block => {},
            _ => return Err(unexpected(tokens, "';'")),
        }
    }

    Ok(statements)
}

/// Parses a block delimited by braces.
///
/// The resulting node is `Node::Block { statements, line }`, where `line` is
/// the line of the first statement, or `None` if the block is empty.
///
/// Grammar: `block := "{" statements "}"`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the opening brace.
/// - `depth`: Nesting depth outside the block; its statements sit one level
///   deeper.
pub fn parse_braced_block<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let depth = deeper(tokens, depth)?;
    expect(tokens, &Token::LBrace)?;
    let statements = parse_statements(tokens, depth)?;
    expect(tokens, &Token::RBrace)?;

    let line = statements.first().and_then(Node::line_number);

    Ok(Node::Block { statements, line })
}
