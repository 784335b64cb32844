use crate::interpreter::lexer::{Lexeme, Token};

/// Finds the first position where `pattern` occurs as consecutive tokens.
///
/// # Parameters
/// - `lexemes`: The tokens to search.
/// - `pattern`: The token sequence to look for.
///
/// # Returns
/// The index of the first token of the match, or `None`.
pub(crate) fn find_pattern(lexemes: &[Lexeme], pattern: &[Token]) -> Option<usize> {
    if pattern.is_empty() || lexemes.len() < pattern.len() {
        return None;
    }
    lexemes.windows(pattern.len()).position(|window| {
                                      window.iter()
                                            .zip(pattern)
                                            .all(|(lexeme, token)| lexeme.token == *token)
                                  })
}

/// Returns `true` if `pattern` occurs as consecutive tokens.
pub(crate) fn contains_pattern(lexemes: &[Lexeme], pattern: &[Token]) -> bool {
    find_pattern(lexemes, pattern).is_some()
}

/// Finds the `)` matching the `(` at `open`.
///
/// Returns `None` if `open` is not a `(` or the parenthesis is never closed.
pub(crate) fn matching_paren(lexemes: &[Lexeme], open: usize) -> Option<usize> {
    if lexemes.get(open)?.token != Token::LParen {
        return None;
    }
    let mut depth = 0usize;
    for (index, lexeme) in lexemes.iter().enumerate().skip(open) {
        match lexeme.token {
            Token::LParen => depth += 1,
            Token::RParen => {
                depth -= 1;
                if depth == 0 {
                    return Some(index);
                }
            },
            _ => {},
        }
    }
    None
}

/// Finds the first call of `name`, i.e. the identifier followed by `(`.
///
/// Returns the index of the identifier.
pub(crate) fn find_call(lexemes: &[Lexeme], name: &str) -> Option<usize> {
    lexemes.windows(2).position(|pair| {
                          matches!(&pair[0].token, Token::Identifier(id) if id == name)
                          && pair[1].token == Token::LParen
                      })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::lexer::tokenize;

    #[test]
    fn finds_patterns_and_parens() {
        let lexemes = tokenize("if ((a) == b) then: Print(\"x\");");
        assert_eq!(find_pattern(&lexemes, &[Token::Then, Token::Colon]), Some(8));
        assert_eq!(matching_paren(&lexemes, 1), Some(7));
        assert_eq!(matching_paren(&lexemes, 0), None);
        assert_eq!(find_call(&lexemes, "Print"), Some(10));
        assert!(!contains_pattern(&lexemes, &[Token::Endif, Token::Semicolon]));
    }
}
