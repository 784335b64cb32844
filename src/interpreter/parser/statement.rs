use crate::{
    ast::{Initializer, PrintLiteral, Statement},
    error::ParseError,
    interpreter::{
        lexer::{Lexeme, Token, source_text},
        parser::{
            core::ParseResult,
            utils::{find_call, find_pattern, matching_paren},
        },
        value::types::DeclaredType,
    },
};

/// Parses the statement on one source line.
///
/// Recognised statements, tried in this order:
/// - `new variable <name> NULL;`
/// - `new variable <name> <type> = <value>;`
/// - `rename variable <name> <type> = <value>;`
/// - `Print("...");` / `Print(f"...");`
///
/// # Parameters
/// - `line`: The lexemes of a single source line.
///
/// # Returns
/// - `Ok(Some(statement))` for a recognised statement.
/// - `Ok(None)` for lines that hold no executable statement.
///
/// # Errors
/// - `MalformedDeclaration` for a declaration or rename that does not follow
///   the grammar.
/// - `MalformedPrint` if `Print` is not given a single string literal.
/// - `UnknownFunction` for a call to anything but `Print` or `input`.
///
/// # Example
/// ```
/// use iorn::{
///     ast::{PrintLiteral, Statement},
///     interpreter::{lexer::tokenize, parser::statement::parse_statement},
/// };
///
/// let line = tokenize("Print(f\"x is $[x]\");");
/// let statement = parse_statement(&line).unwrap();
/// assert_eq!(statement,
///            Some(Statement::Print(PrintLiteral { text:         "x is $[x]".to_string(),
///                                                 interpolated: true,
///                                                 line:         1, })));
/// ```
pub fn parse_statement(line: &[Lexeme]) -> ParseResult<Option<Statement>> {
    if let Some(start) = find_pattern(line, &[Token::New, Token::Variable]) {
        return parse_declaration(&line[start + 2..], line[start].line).map(Some);
    }
    if let Some(start) = find_pattern(line, &[Token::Rename, Token::Variable]) {
        return parse_rename(&line[start + 2..], line[start].line).map(Some);
    }
    if let Some(start) = find_call(line, "Print") {
        return parse_print(&line[start..]).map(|print| Some(Statement::Print(print)));
    }

    match unknown_call(line) {
        Some(e) => Err(e),
        None => Ok(None),
    }
}

/// Finds the first call to a function other than `Print` or `input`.
///
/// # Returns
/// The `UnknownFunction` error naming the call, or `None`.
pub(crate) fn unknown_call(line: &[Lexeme]) -> Option<ParseError> {
    line.windows(2).find_map(|pair| match (&pair[0].token, &pair[1].token) {
                       (Token::Identifier(name), Token::LParen) if name != "Print" && name != "input" => {
                           Some(ParseError::UnknownFunction { name: name.clone(),
                                                              line: pair[0].line, })
                       },
                       _ => None,
                   })
}

/// Parses what follows `new variable`.
fn parse_declaration(tokens: &[Lexeme], line: usize) -> ParseResult<Statement> {
    if let [first,
            Lexeme { token: Token::Null, .. },
            Lexeme { token: Token::Semicolon,
                     .. },
            ..] = tokens
       && let Some(name) = first.token.name()
    {
        return Ok(Statement::NullDeclaration { name, line });
    }

    let (name, ty, value) = parse_binding(tokens, line)?;
    Ok(Statement::Declaration { name, ty, value, line })
}

/// Parses what follows `rename variable`.
fn parse_rename(tokens: &[Lexeme], line: usize) -> ParseResult<Statement> {
    let (name, ty, value) = parse_binding(tokens, line)?;
    Ok(Statement::Rename { name, ty, value, line })
}

/// Parses `<name> <type> = <value> ;`.
fn parse_binding(tokens: &[Lexeme], line: usize) -> ParseResult<(String, DeclaredType, Initializer)> {
    let [first,
         Lexeme { token: Token::Type(ty), .. },
         Lexeme { token: Token::Equals, .. },
         rest @ ..] = tokens
    else {
        return Err(ParseError::MalformedDeclaration { line });
    };
    let name = first.token
                    .name()
                    .ok_or(ParseError::MalformedDeclaration { line })?;

    let end = rest.iter()
                  .position(|lexeme| lexeme.token == Token::Semicolon)
                  .ok_or(ParseError::MalformedDeclaration { line })?;
    let value = &rest[..end];
    if value.is_empty() {
        return Err(ParseError::MalformedDeclaration { line });
    }

    Ok((name, *ty, parse_initializer(value)))
}

/// Splits an initializer into an `input(...)` call or a literal.
fn parse_initializer(value: &[Lexeme]) -> Initializer {
    let Some(call) = find_call(value, "input") else {
        return Initializer::Literal(value.to_vec());
    };
    let open = call + 1;
    let close = matching_paren(value, open).unwrap_or(value.len());
    let arguments = &value[open + 1..close];

    let prompt = match arguments {
        [] => String::new(),
        [Lexeme { token: Token::Str(text),
                  .. }] => text.clone(),
        _ => source_text(arguments),
    };
    Initializer::Input { prompt }
}

/// Parses `Print ( "..." )` starting at the `Print` identifier.
fn parse_print(tokens: &[Lexeme]) -> ParseResult<PrintLiteral> {
    match tokens {
        [Lexeme { line, .. },
         Lexeme { token: Token::LParen,
                  .. },
         Lexeme { token, .. },
         Lexeme { token: Token::RParen,
                  .. },
         ..] => match token {
            Token::Str(text) => Ok(PrintLiteral { text:         text.clone(),
                                                  interpolated: false,
                                                  line:         *line, }),
            Token::FStr(text) => Ok(PrintLiteral { text:         text.clone(),
                                                   interpolated: true,
                                                   line:         *line, }),
            _ => Err(ParseError::MalformedPrint { line: *line }),
        },
        [first, ..] => Err(ParseError::MalformedPrint { line: first.line }),
        [] => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Collects every well-formed `Print("...");` call in a run of tokens.
///
/// Used for the bodies of conditional arms, where prints are the only
/// statements that run and anything else is skipped. A call must be followed
/// by `;` to count.
pub(crate) fn collect_prints(tokens: &[Lexeme]) -> Vec<PrintLiteral> {
    tokens.iter()
          .enumerate()
          .filter(|(_, lexeme)| matches!(&lexeme.token, Token::Identifier(name) if name == "Print"))
          .filter(|(index, _)| {
              tokens.get(index + 4)
                    .is_some_and(|lexeme| lexeme.token == Token::Semicolon)
          })
          .filter_map(|(index, _)| parse_print(&tokens[index..]).ok())
          .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::lexer::tokenize;

    fn parse(source: &str) -> ParseResult<Option<Statement>> {
        parse_statement(&tokenize(source))
    }

    #[test]
    fn parses_declarations() {
        let Some(Statement::Declaration { name, ty, value, line }) =
            parse("new variable total numeric = 2 + 3;").unwrap()
        else {
            panic!("expected a declaration");
        };
        assert_eq!((name.as_str(), ty, line), ("total", DeclaredType::Numeric, 1));
        assert!(matches!(value, Initializer::Literal(tokens) if tokens.len() == 3));

        assert_eq!(parse("new variable nothing NULL;").unwrap(),
                   Some(Statement::NullDeclaration { name: "nothing".to_string(),
                                                     line: 1, }));
    }

    #[test]
    fn detects_input_prompts() {
        let Some(Statement::Rename { value, .. }) =
            parse("rename variable x string = input(\"Name: \");").unwrap()
        else {
            panic!("expected a rename");
        };
        assert_eq!(value, Initializer::Input { prompt: "Name: ".to_string() });

        let Some(Statement::Declaration { value, .. }) =
            parse("new variable x numeric = input();").unwrap()
        else {
            panic!("expected a declaration");
        };
        assert_eq!(value, Initializer::Input { prompt: String::new() });
    }

    #[test]
    fn rejects_malformed_statements() {
        assert_eq!(parse("new variable x = 5;"),
                   Err(ParseError::MalformedDeclaration { line: 1 }));
        assert_eq!(parse("new variable x numeric = ;"),
                   Err(ParseError::MalformedDeclaration { line: 1 }));
        assert_eq!(parse("Print(x);"), Err(ParseError::MalformedPrint { line: 1 }));
        assert_eq!(parse("Shout(\"x\");"),
                   Err(ParseError::UnknownFunction { name: "Shout".to_string(),
                                                     line: 1, }));
    }

    #[test]
    fn other_lines_are_not_statements() {
        assert_eq!(parse("ignore;"), Ok(None));
    }

    #[test]
    fn collects_prints_from_a_block() {
        let tokens = tokenize("Print(\"a\"); x + 1; Print(f\"$[b]\");");
        let prints = collect_prints(&tokens);
        assert_eq!(prints.len(), 2);
        assert!(!prints[0].interpolated);
        assert!(prints[1].interpolated);
    }

    #[test]
    fn block_prints_need_their_semicolon() {
        let tokens = tokenize("Print(\"a\") Print(\"b\");\nPrint(\"c\")");
        let prints = collect_prints(&tokens);
        assert_eq!(prints.len(), 1);
        assert_eq!(prints[0].text, "b");
    }

    #[test]
    fn keywords_can_name_variables() {
        let Some(Statement::Declaration { name, .. }) = parse("new variable to numeric = 1;").unwrap()
        else {
            panic!("expected a declaration");
        };
        assert_eq!(name, "to");

        assert_eq!(parse("new variable string NULL;").unwrap(),
                   Some(Statement::NullDeclaration { name: "string".to_string(),
                                                     line: 1, }));
        assert_eq!(parse("rename variable TRUE string = \"a\";"),
                   Err(ParseError::MalformedDeclaration { line: 1 }));
    }

    #[test]
    fn finds_unknown_calls_anywhere_on_a_line() {
        let tokens = tokenize("if (a) then: Print(\"x\"); Foo(\"y\");");
        assert_eq!(unknown_call(&tokens),
                   Some(ParseError::UnknownFunction { name: "Foo".to_string(),
                                                      line: 1, }));
        assert_eq!(unknown_call(&tokenize("new variable x string = input();")), None);
    }
}
