use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Lexeme, Token, split_lines},
        parser::core::ParseResult,
    },
};

/// Checks that every statement-like line ends with a terminator.
///
/// A line is statement-like when it contains a call (`name(`), an `import`,
/// `new variable` or `rename variable`. Null declarations, lines belonging to
/// a conditional (`if`, `else`, `endif`) and lines containing `ignore` are
/// exempt. Statement-like lines must end in `;` or `:`.
///
/// `source` is the comment-free text the lexemes were produced from; it is
/// only used to measure the offending line for the diagnostic.
///
/// # Errors
/// Returns `ParseError::MissingTerminator` for the first offending line.
///
/// # Example
/// ```
/// use iorn::{
///     error::ParseError,
///     interpreter::{lexer::tokenize, syntax::check_syntax},
/// };
///
/// let source = "new variable x numeric = 5;\nPrint(\"x\")  ";
/// let lexemes = tokenize(source);
/// assert_eq!(check_syntax(source, &lexemes),
///            Err(ParseError::MissingTerminator { line: 2, length: 10 }));
/// ```
pub fn check_syntax(source: &str, lexemes: &[Lexeme]) -> ParseResult<()> {
    for line in split_lines(lexemes) {
        if !is_statement_like(line) || is_exempt(line) {
            continue;
        }
        if let Some(last) = line.last()
           && !matches!(last.token, Token::Semicolon | Token::Colon)
        {
            let length = source.lines()
                               .nth(last.line - 1)
                               .map_or(0, |text| text.trim_end().chars().count());
            return Err(ParseError::MissingTerminator { line: last.line,
                                                       length });
        }
    }
    Ok(())
}

fn is_statement_like(line: &[Lexeme]) -> bool {
    line.windows(2).any(|pair| match (&pair[0].token, &pair[1].token) {
                       (Token::Identifier(_), Token::LParen)
                       | (Token::New | Token::Rename, Token::Variable) => true,
                       _ => false,
                   })
    || line.iter().any(|lexeme| lexeme.token == Token::Import)
}

fn is_exempt(line: &[Lexeme]) -> bool {
    let tokens: Vec<&Token> = line.iter().map(|lexeme| &lexeme.token).collect();
    let null_declaration = matches!(tokens.as_slice(),
                                    [Token::New,
                                     Token::Variable,
                                     Token::Identifier(_),
                                     Token::Null,
                                     Token::Semicolon]);

    null_declaration
    || tokens.iter()
             .any(|token| matches!(token, Token::If | Token::Else | Token::Endif | Token::Ignore))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::lexer::tokenize;

    fn check(source: &str) -> ParseResult<()> {
        check_syntax(source, &tokenize(source))
    }

    #[test]
    fn accepts_both_terminators() {
        assert!(check("import terminal.*;\nPrint(\"a\");\nif (1 == 1) then:\nendif;").is_ok());
    }

    #[test]
    fn conditional_lines_are_exempt() {
        assert!(check("if (x == 1) then: Print(\"a\")\nendif").is_ok());
        assert!(check("Print(\"a\") ignore").is_ok());
    }

    #[test]
    fn plain_lines_are_not_statements() {
        assert!(check("x + 1\n\n").is_ok());
    }

    #[test]
    fn reports_first_unterminated_line() {
        let err = check("rename variable x string = \"a\"\nimport terminal.Print").unwrap_err();
        assert_eq!(err, ParseError::MissingTerminator { line: 1, length: 30 });
    }
}
