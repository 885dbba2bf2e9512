use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, CompareOperator, LogicOperator, Node},
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, unary::parse_unary, utils::deeper},
    },
};

/// Parses logical `&&` and `||` expressions.
///
/// Both operators share one precedence level and associate to the left, so
/// `a || b && c` parses as `(a || b) && c`. Short-circuiting is a property of
/// evaluation, not of the tree built here.
///
/// Every operator folded onto the left operand nests the tree one level
/// deeper, so a long chain counts against the nesting limit like
/// parentheses do.
///
/// The rule is: `logical := comparison (("&&" | "||") comparison)*`
pub fn parse_logical<'a, I>(tokens: &mut Peekable<I>, mut depth: usize) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_comparison(tokens, depth)?;

    while let Some((token, line)) = tokens.peek().copied()
          && let Some(op) = token_to_logic_operator(token)
    {
        depth = deeper(tokens, depth)?;
        tokens.next();
        let right = parse_comparison(tokens, depth)?;
        left = Node::LogicOp { left: Box::new(left),
                               op,
                               right: Box::new(right),
                               line: *line };
    }

    Ok(left)
}

/// Parses relational and equality operators.
///
/// This parser handles all comparison operators:
/// `<`, `>`, `<=`, `>=`, `==`, `!=`. Chains such as `a < b < c` are accepted
/// and group to the left; the evaluator then rejects comparing a boolean with
/// a number.
///
/// The rule is: `comparison := additive (compare_op additive)*`
pub fn parse_comparison<'a, I>(tokens: &mut Peekable<I>, mut depth: usize) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_additive(tokens, depth)?;

    while let Some((token, line)) = tokens.peek().copied()
          && let Some(op) = token_to_compare_operator(token)
    {
        depth = deeper(tokens, depth)?;
        tokens.next(); // consume operator
        let right = parse_additive(tokens, depth)?;
        left = Node::CompareOp { left: Box::new(left),
                                 op,
                                 right: Box::new(right),
                                 line: *line };
    }

    Ok(left)
}

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>, mut depth: usize) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_multiplicative(tokens, depth)?;
    loop {
        if let Some((token, line)) = tokens.peek().copied()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            depth = deeper(tokens, depth)?;
            tokens.next();
            let right = parse_multiplicative(tokens, depth)?;
            left = Node::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    line: *line };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators `*` and `/`.
///
/// The rule is: `multiplicative := unary (("*" | "/") unary)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>, mut depth: usize) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_unary(tokens, depth)?;
    loop {
        if let Some((token, line)) = tokens.peek().copied()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
        {
            depth = deeper(tokens, depth)?;
            tokens.next();
            let right = parse_unary(tokens, depth)?;
            left = Node::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    line: *line };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Maps a token to its corresponding arithmetic operator.
///
/// Returns `None` for every token that is not `+`, `-`, `*` or `/`,
/// including `=`: assignment is only recognized at statement position.
///
/// # Example
/// ```
/// use quill::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Star), Some(BinaryOperator::Mul));
/// assert_eq!(token_to_binary_operator(&Token::Equals), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        _ => None,
    }
}

/// Maps a token to its corresponding comparison operator.
#[must_use]
pub const fn token_to_compare_operator(token: &Token) -> Option<CompareOperator> {
    match token {
        Token::EqualEqual => Some(CompareOperator::Equal),
        Token::BangEqual => Some(CompareOperator::NotEqual),
        Token::Less => Some(CompareOperator::Less),
        Token::LessEqual => Some(CompareOperator::LessEqual),
        Token::Greater => Some(CompareOperator::Greater),
        Token::GreaterEqual => Some(CompareOperator::GreaterEqual),
        _ => None,
    }
}

/// Maps a token to its corresponding logical operator.
#[must_use]
pub const fn token_to_logic_operator(token: &Token) -> Option<LogicOperator> {
    match token {
        Token::AndAnd => Some(LogicOperator::And),
        Token::PipePipe => Some(LogicOperator::Or),
        _ => None,
    }
}
