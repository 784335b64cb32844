use std::iter::Peekable;

use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::{Lexeme, Token},
        parser::core::{ParseResult, parse_expression},
    },
};

/// Parses a unary expression.
///
/// A leading `-` negates its operand and a leading `+` is dropped. Both bind
/// tighter than every binary operator, so `-2 ^ 2` is `4`.
///
/// Grammar:
/// ```text
///     unary := ("-" | "+") unary
///            | primary
/// ```
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Lexeme> + Clone
{
    match tokens.peek() {
        Some(Lexeme { token: Token::Minus,
                      line,
                      .. }) => {
            let line = *line;
            tokens.next();
            let expr = parse_unary(tokens)?;
            Ok(Expr::UnaryOp { op: UnaryOperator::Negate,
                               expr: Box::new(expr),
                               line })
        },
        Some(Lexeme { token: Token::Plus, .. }) => {
            tokens.next();
            parse_unary(tokens)
        },
        _ => parse_primary(tokens),
    }
}

/// Parses a primary expression: a number, a variable or a parenthesized
/// group. Keywords in operand position name variables.
///
/// # Errors
/// - `UnexpectedEndOfInput` if there are no tokens left.
/// - `UnexpectedToken` for anything that cannot start an operand.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Lexeme> + Clone
{
    let Some(lexeme) = tokens.next() else {
        return Err(ParseError::UnexpectedEndOfInput { line: 0 });
    };
    let line = lexeme.line;

    match &lexeme.token {
        Token::Number(text) => {
            let value = text.parse()
                            .map_err(|_| ParseError::UnexpectedToken { token: text.clone(),
                                                                       line })?;
            Ok(Expr::Number { value,
                              text: text.clone(),
                              line })
        },
        Token::LParen => parse_grouping(tokens, line),
        other => match other.name() {
            Some(name) => Ok(Expr::Variable { name, line }),
            None => Err(ParseError::UnexpectedToken { token: other.to_string(),
                                                      line }),
        },
    }
}

/// Parses the rest of a parenthesized expression.
///
/// # Parameters
/// - `tokens`: Lexeme iterator positioned just after `(`.
/// - `line`: Line of the opening parenthesis.
///
/// # Returns
/// The inner expression as-is (no wrapper node).
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Lexeme> + Clone
{
    let expr = parse_expression(tokens)?;
    match tokens.next() {
        Some(Lexeme { token: Token::RParen, .. }) => Ok(expr),
        _ => Err(ParseError::ExpectedClosingParen { line }),
    }
}
