use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{lexer::Lexeme, parser::binary::parse_additive},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full arithmetic expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, addition, and recursively
/// descends through the precedence hierarchy.
///
/// Grammar: `expression := additive`
///
/// # Parameters
/// - `tokens`: Lexeme iterator with lookahead.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Lexeme> + Clone
{
    parse_additive(tokens)
}

/// Parses a slice of lexemes that must form exactly one expression.
///
/// # Errors
/// - `UnexpectedEndOfInput` if the slice is empty.
/// - `UnexpectedTrailingTokens` if anything follows the expression.
/// - Any error from [`parse_expression`].
///
/// # Example
/// ```
/// use iorn::interpreter::{lexer::tokenize, parser::core::parse_complete_expression};
///
/// let lexemes = tokenize("2 + 3 * 4");
/// assert!(parse_complete_expression(&lexemes).is_ok());
///
/// let lexemes = tokenize("2 + 3 )");
/// assert!(parse_complete_expression(&lexemes).is_err());
/// ```
pub fn parse_complete_expression(lexemes: &[Lexeme]) -> ParseResult<Expr> {
    let Some(first) = lexemes.first() else {
        return Err(ParseError::UnexpectedEndOfInput { line: 0 });
    };

    let mut tokens = lexemes.iter().peekable();
    let expr = parse_expression(&mut tokens)?;

    if let Some(extra) = tokens.next() {
        return Err(ParseError::UnexpectedTrailingTokens { token: extra.token.to_string(),
                                                          line:  first.line, });
    }
    Ok(expr)
}
