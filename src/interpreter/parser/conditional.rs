use crate::{
    ast::{Arm, Block, Conditional},
    error::ParseError,
    interpreter::{
        lexer::{Lexeme, Token},
        parser::{
            core::ParseResult,
            statement::collect_prints,
            utils::{contains_pattern, find_pattern, matching_paren},
        },
    },
};

const IF: [Token; 2] = [Token::If, Token::LParen];
const THEN: [Token; 2] = [Token::Then, Token::Colon];
const ELSE_IF: [Token; 4] = [Token::Else, Token::To, Token::If, Token::LParen];
const RESUME: [Token; 2] = [Token::Resume, Token::Colon];
const ELSE: [Token; 3] = [Token::Else, Token::Perform, Token::Colon];
const ENDIF: [Token; 2] = [Token::Endif, Token::Semicolon];

/// Returns `true` if the lexemes contain the `endif;` that closes a
/// conditional.
#[must_use]
pub fn closes_conditional(lexemes: &[Lexeme]) -> bool {
    contains_pattern(lexemes, &ENDIF)
}

/// Returns `true` if the lexemes contain an `if (` that opens a conditional.
#[must_use]
pub fn opens_conditional(lexemes: &[Lexeme]) -> bool {
    contains_pattern(lexemes, &IF)
}

/// Parses a whole conditional construct.
///
/// Syntax:
/// ```text
///     if (<condition>) then: <block>
///     else to if (<condition>) resume: <block>
///     else perform: <block>
///     endif;
/// ```
/// Any number of `else to if` arms may follow the primary arm, and the
/// `else perform` block is optional. Conditions are not parsed here; see
/// [`Arm`].
///
/// # Parameters
/// - `tokens`: The lexemes of every line from the `if` through `endif;`.
/// - `line`: Line where the construct starts.
///
/// # Errors
/// Returns `ParseError::InvalidIfStructure` if `if (`, its closing `)`,
/// `then:` or `endif;` is missing, if an `else to if` arm is not closed by
/// `) resume:`, or if an arm follows `else perform:`.
///
/// # Example
/// ```
/// use iorn::interpreter::{lexer::tokenize, parser::conditional::parse_conditional};
///
/// let source = "if (x == 1) then:\n  Print(\"one\");\nelse to if (x == 2) resume:\n  \
///               Print(\"two\");\nelse perform:\n  ignore;\nendif;";
/// let conditional = parse_conditional(&tokenize(source), 1).unwrap();
/// assert_eq!(conditional.primary.block.prints.len(), 1);
/// assert_eq!(conditional.arms.len(), 1);
/// assert_eq!(conditional.arms[0].line, 3);
/// assert!(conditional.default.is_some_and(|block| block.prints.is_empty()));
/// ```
pub fn parse_conditional(tokens: &[Lexeme], line: usize) -> ParseResult<Conditional> {
    let invalid = ParseError::InvalidIfStructure { line };

    let start = find_pattern(tokens, &IF).ok_or_else(|| invalid.clone())?;
    let close = matching_paren(tokens, start + 1).ok_or_else(|| invalid.clone())?;
    let then = close + find_pattern(&tokens[close..], &THEN).ok_or_else(|| invalid.clone())?;
    let body_start = then + THEN.len();
    let body_end = body_start
                   + find_pattern(&tokens[body_start..], &ENDIF).ok_or_else(|| invalid.clone())?;
    let body = &tokens[body_start..body_end];

    let (block_end, mut next) = next_delimiter(body, 0);
    let primary = Arm { condition: tokens[start + 2..close].to_vec(),
                        block:     parse_block(&body[..block_end]),
                        line:      tokens[start].line, };

    let mut arms = Vec::new();
    let mut default = None;

    while let Some(delimiter) = next {
        match delimiter {
            Delimiter::ElseIf(at) => {
                let open = at + ELSE_IF.len() - 1;
                let close = matching_paren(body, open).ok_or_else(|| invalid.clone())?;
                if find_pattern(&body[close + 1..], &RESUME) != Some(0) {
                    return Err(invalid);
                }
                let block_start = close + 1 + RESUME.len();
                let (block_end, following) = next_delimiter(body, block_start);
                arms.push(Arm { condition: body[open + 1..close].to_vec(),
                                block:     parse_block(&body[block_start..block_end]),
                                line:      body[at].line, });
                next = following;
            },
            Delimiter::Else(at) => {
                let block_start = at + ELSE.len();
                if contains_pattern(&body[block_start..], &ELSE_IF) {
                    return Err(invalid);
                }
                default = Some(parse_block(&body[block_start..]));
                next = None;
            },
        }
    }

    Ok(Conditional { primary,
                     arms,
                     default,
                     line })
}

/// Where a block ends.
enum Delimiter {
    /// `else to if (` at this index.
    ElseIf(usize),
    /// `else perform:` at this index.
    Else(usize),
}

/// Finds the end of the block starting at `from` and the delimiter that
/// ends it, if any.
fn next_delimiter(body: &[Lexeme], from: usize) -> (usize, Option<Delimiter>) {
    let rest = &body[from..];
    let else_if = find_pattern(rest, &ELSE_IF).map(|at| at + from);
    let default = find_pattern(rest, &ELSE).map(|at| at + from);

    match (else_if, default) {
        (Some(at), Some(other)) if at < other => (at, Some(Delimiter::ElseIf(at))),
        (Some(at), None) => (at, Some(Delimiter::ElseIf(at))),
        (_, Some(at)) => (at, Some(Delimiter::Else(at))),
        (None, None) => (body.len(), None),
    }
}

/// Collects the runnable contents of one block.
fn parse_block(tokens: &[Lexeme]) -> Block {
    let ignored = matches!(tokens,
                           [Lexeme { token: Token::Ignore,
                                     .. }]
                           | [Lexeme { token: Token::Ignore,
                                       .. },
                              Lexeme { token: Token::Semicolon,
                                       .. }]);
    if ignored {
        return Block::default();
    }
    Block { prints: collect_prints(tokens) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::lexer::tokenize;

    fn parse(source: &str) -> ParseResult<Conditional> {
        parse_conditional(&tokenize(source), 1)
    }

    #[test]
    fn parses_a_single_line_construct() {
        let conditional = parse("if (a) then: Print(\"yes\"); endif;").unwrap();
        assert_eq!(conditional.primary.condition.len(), 1);
        assert_eq!(conditional.primary.block.prints[0].text, "yes");
        assert!(conditional.arms.is_empty());
        assert!(conditional.default.is_none());
    }

    #[test]
    fn keeps_arms_in_order() {
        let conditional = parse("if (a) then: ignore;\nelse to if (b) resume: Print(\"b\");\nelse to if \
                                 ((c)) resume: Print(\"c\");\nendif;")
                          .unwrap();
        assert_eq!(conditional.arms.len(), 2);
        assert_eq!(conditional.arms[1].condition.len(), 3);
        assert_eq!(conditional.arms[1].block.prints[0].text, "c");
    }

    #[test]
    fn missing_delimiters_are_structural_errors() {
        let invalid = Err(ParseError::InvalidIfStructure { line: 1 });
        assert_eq!(parse("if (a) Print(\"x\"); endif;"), invalid);
        assert_eq!(parse("if (a) then: Print(\"x\");"), invalid);
        assert_eq!(parse("if (a then: endif;"), invalid);
        assert_eq!(parse("if (a) then: else to if (b) Print(\"x\"); endif;"), invalid);
        assert_eq!(parse("if (a) then: else perform: else to if (b) resume: endif;"), invalid);
    }
}
