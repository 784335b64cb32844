use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Lexeme,
        parser::{core::ParseResult, unary::parse_unary},
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Lexeme> + Clone
{
    let mut left = parse_multiplicative(tokens)?;
    loop {
        if let Some(Lexeme { token, line, .. }) = tokens.peek()
           && let Some(op) = BinaryOperator::from_token(token)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            let line = *line;
            tokens.next();
            let right = parse_multiplicative(tokens)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    line };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators: `*`, `/` and `%`.
///
/// The rule is: `multiplicative := exponent (("*" | "/" | "%") exponent)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Lexeme> + Clone
{
    let mut left = parse_exponent(tokens)?;
    loop {
        if let Some(Lexeme { token, line, .. }) = tokens.peek()
           && let Some(op) = BinaryOperator::from_token(token)
           && matches!(op, BinaryOperator::Mul | BinaryOperator::Div | BinaryOperator::Mod)
        {
            let line = *line;
            tokens.next();
            let right = parse_exponent(tokens)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    line };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses exponentiation expressions.
///
/// Chained exponentiation groups left to right: `a ^ b ^ c` parses as
/// `(a ^ b) ^ c`, so `2 ^ 3 ^ 2` is `64`. `**` is accepted as a spelling of
/// `^`.
///
/// The rule is: `exponent := unary (("^" | "**") unary)*`
pub fn parse_exponent<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Lexeme> + Clone
{
    let mut left = parse_unary(tokens)?;
    while let Some(Lexeme { token, line, .. }) = tokens.peek() {
        if let Some(op) = BinaryOperator::from_token(token)
           && op == BinaryOperator::Pow
        {
            let line = *line;
            tokens.next();
            let right = parse_unary(tokens)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    line };
            continue;
        }
        break;
    }
    Ok(left)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::{lexer::tokenize, parser::core::parse_complete_expression};

    fn parse(source: &str) -> Expr {
        parse_complete_expression(&tokenize(source)).unwrap()
    }

    #[test]
    fn multiplication_binds_tighter_than_addition() {
        let Expr::BinaryOp { op, right, .. } = parse("2 + 3 * 4") else {
            panic!("expected a binary operation");
        };
        assert_eq!(op, BinaryOperator::Add);
        assert!(matches!(*right, Expr::BinaryOp { op: BinaryOperator::Mul, .. }));
    }

    #[test]
    fn exponent_chains_group_left_to_right() {
        let Expr::BinaryOp { op, left, right, .. } = parse("2 ^ 3 ** 2") else {
            panic!("expected a binary operation");
        };
        assert_eq!(op, BinaryOperator::Pow);
        assert!(matches!(*left, Expr::BinaryOp { op: BinaryOperator::Pow, .. }));
        assert!(matches!(*right, Expr::Number { .. }));
    }
}
