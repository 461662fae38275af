use std::iter::Peekable;

use crate::{
    ast::{Node, NodeKind},
    error::ParseError,
    interpreter::{lexer::Token, parser::utils::parse_delimited},
    util::stack::ensure_sufficient_stack,
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses every top-level expression into a root node.
///
/// The root's children are a start anchor, the expressions in source order,
/// and an end anchor, matching the shape the reader expects from a
/// tag based grammar.
///
/// Grammar: `lispty := ^ expression* $`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// A `NodeKind::Root` node.
pub fn parse_program<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut children = vec![Node::leaf(NodeKind::Anchor, "", 1)];
    let mut line = 1;

    while let Some((_, next_line)) = tokens.peek() {
        line = *next_line;
        children.push(parse_expression(tokens, line)?);
    }

    children.push(Node::leaf(NodeKind::Anchor, "", line));

    Ok(Node::branch(NodeKind::Root, children, 1))
}

/// Parses a single expression.
///
/// Grammar: `expression := number | symbol | sexpr | qexpr`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the expression.
/// - `line`: Line reported if the stream is already exhausted.
///
/// # Errors
/// - `UnexpectedToken` for a closing delimiter with no matching opener.
/// - `UnexpectedEndOfInput` if the stream is exhausted.
/// - Propagates errors from nested lists.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Number(text), line)) => Ok(Node::leaf(NodeKind::Number, text.as_str(), *line)),
        Some((Token::Symbol(name), line)) => Ok(Node::leaf(NodeKind::Symbol, name.as_str(), *line)),
        Some((Token::LParen, line)) => {
            ensure_sufficient_stack(|| parse_delimited(tokens, NodeKind::SExpr, &Token::RParen, *line))
        },
        Some((Token::LBrace, line)) => {
            ensure_sufficient_stack(|| parse_delimited(tokens, NodeKind::QExpr, &Token::RBrace, *line))
        },
        Some((token, line)) => Err(ParseError::UnexpectedToken { token: token.to_string(),
                                                                 line:  *line, }),
        None => Err(ParseError::UnexpectedEndOfInput { line }),
    }
}
