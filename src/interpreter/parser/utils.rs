use std::iter::Peekable;

use crate::{
    ast::{Node, NodeKind},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, parse_expression},
    },
};

/// Parses expressions until the closing delimiter of a list.
///
/// Called with the opening `(` or `{` already consumed. The returned node
/// holds the opening delimiter, every parsed expression and the closing
/// delimiter, in that order.
///
/// Grammar: `sexpr := "(" expression* ")"`, `qexpr := "{" expression* "}"`
///
/// # Parameters
/// - `tokens`: Token iterator positioned after the opening delimiter.
/// - `kind`: `NodeKind::SExpr` or `NodeKind::QExpr`.
/// - `closing`: The token that terminates the list.
/// - `line`: Line of the opening delimiter.
///
/// # Errors
/// Returns a `ParseError` if:
/// - a different closing delimiter is encountered,
/// - an item fails to parse,
/// - the stream ends before the closing token.
pub(in crate::interpreter::parser) fn parse_delimited<'a, I>(tokens: &mut Peekable<I>,
                                                             kind: NodeKind,
                                                             closing: &Token,
                                                             line: usize)
                                                             -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let opening = if *closing == Token::RBrace { '{' } else { '(' };
    let mut children = vec![Node::leaf(NodeKind::Delimiter, opening.to_string(), line)];

    loop {
        match tokens.peek() {
            Some((tok, close_line)) if tok == closing => {
                children.push(Node::leaf(NodeKind::Delimiter, tok.to_string(), *close_line));
                tokens.next();

                return Ok(Node::branch(kind, children, line));
            },
            Some((tok @ (Token::RParen | Token::RBrace), close_line)) => {
                return Err(ParseError::UnexpectedToken { token: tok.to_string(),
                                                         line:  *close_line, });
            },
            Some((_, next_line)) => {
                let next_line = *next_line;
                children.push(parse_expression(tokens, next_line)?);
            },
            None => {
                return Err(ParseError::UnclosedDelimiter { delimiter: opening,
                                                           line });
            },
        }
    }
}
