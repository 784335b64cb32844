use crate::{
    ast::{ComparisonOperator, Condition, Operand},
    error::ParseError,
    interpreter::{
        lexer::{Lexeme, Token, compact_text},
        parser::core::{ParseResult, parse_complete_expression},
    },
};

/// Parses the text between the parentheses of an `if (...)`.
///
/// The operators are looked for in the order `==`, `!=`, `>=`, `<=`, `>`,
/// `<`; the first one present splits the condition into two sides. A
/// condition without any operator names a boolean variable.
///
/// # Parameters
/// - `tokens`: The condition's lexemes.
/// - `line`: Line of the `if` the condition belongs to.
///
/// # Errors
/// Returns `ParseError::InvalidCondition` if the condition is empty or one
/// side of the operator is empty.
///
/// # Example
/// ```
/// use iorn::{
///     ast::{ComparisonOperator, Condition, Operand},
///     interpreter::{lexer::tokenize, parser::condition::parse_condition},
/// };
///
/// let condition = parse_condition(&tokenize("name == \"Ann\""), 1).unwrap();
/// let Condition::Comparison { op, right, .. } = condition else { panic!() };
/// assert_eq!(op, ComparisonOperator::Equal);
/// assert_eq!(right, Operand::Text("Ann".to_string()));
///
/// assert!(parse_condition(&tokenize("== 1"), 1).is_err());
/// ```
pub fn parse_condition(tokens: &[Lexeme], line: usize) -> ParseResult<Condition> {
    if tokens.is_empty() {
        return Err(ParseError::InvalidCondition { line });
    }

    for op in ComparisonOperator::SEARCH_ORDER {
        let Some(split) = tokens.iter()
                                .position(|lexeme| ComparisonOperator::from_token(&lexeme.token) == Some(op))
        else {
            continue;
        };
        let (left, right) = (&tokens[..split], &tokens[split + 1..]);
        if left.is_empty() || right.is_empty() {
            return Err(ParseError::InvalidCondition { line });
        }
        return Ok(Condition::Comparison { left: parse_operand(left),
                                          op,
                                          right: parse_operand(right),
                                          line });
    }

    Ok(Condition::Flag { name: compact_text(tokens),
                         line })
}

/// Classifies one side of a comparison.
///
/// Whitespace is dropped everywhere, including inside string literals, so
/// `"John Doe"` is the text `JohnDoe`.
fn parse_operand(tokens: &[Lexeme]) -> Operand {
    if let [Lexeme { token: Token::Str(text),
                     .. }] = tokens
    {
        return Operand::Text(text.chars().filter(|c| !c.is_whitespace()).collect());
    }
    let text = compact_text(tokens);
    match parse_complete_expression(tokens) {
        Ok(expr) => Operand::Expr { expr, text },
        Err(_) => Operand::Raw(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ast::Expr, interpreter::lexer::tokenize};

    fn parse(source: &str) -> ParseResult<Condition> {
        parse_condition(&tokenize(source), 3)
    }

    #[test]
    fn two_character_operators_win() {
        let Ok(Condition::Comparison { op, .. }) = parse("a >= 2") else {
            panic!("expected a comparison");
        };
        assert_eq!(op, ComparisonOperator::GreaterEqual);
    }

    #[test]
    fn classifies_operands() {
        let Ok(Condition::Comparison { left, right, .. }) = parse("x * 2 != TRUE") else {
            panic!("expected a comparison");
        };
        assert!(matches!(left, Operand::Expr { expr: Expr::BinaryOp { .. }, ref text } if text == "x*2"));
        assert_eq!(right, Operand::Raw("TRUE".to_string()));
    }

    #[test]
    fn literal_whitespace_is_dropped() {
        let Ok(Condition::Comparison { left, .. }) = parse("\" John Doe \" == name") else {
            panic!("expected a comparison");
        };
        assert_eq!(left, Operand::Text("JohnDoe".to_string()));
    }

    #[test]
    fn unknown_characters_make_raw_sides() {
        let Ok(Condition::Comparison { right, .. }) = parse("a == 1 && a == 2") else {
            panic!("expected a comparison");
        };
        assert_eq!(right, Operand::Raw("1&&a==2".to_string()));
    }

    #[test]
    fn bare_names_are_flags() {
        assert_eq!(parse("ready"),
                   Ok(Condition::Flag { name: "ready".to_string(),
                                        line: 3, }));
    }

    #[test]
    fn empty_sides_are_rejected() {
        assert_eq!(parse("x <"), Err(ParseError::InvalidCondition { line: 3 }));
        assert_eq!(parse_condition(&[], 3), Err(ParseError::InvalidCondition { line: 3 }));
    }
}
