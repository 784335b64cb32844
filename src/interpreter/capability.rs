use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Lexeme, Token, compact_text},
        parser::core::ParseResult,
    },
};

/// Prefix of the import paths that grant capabilities.
const TERMINAL: &str = "terminal.";

/// Primitives a script is allowed to call, derived from its imports.
///
/// Computed once for the whole program before any statement runs.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// `Print(...)` may be called.
    pub print: bool,
    /// `input(...)` may be called.
    pub input: bool,
}

impl Capabilities {
    /// Collects the capabilities granted by every `import` in the script.
    ///
    /// `terminal.Print` grants print, `terminal.input` grants input, and a
    /// wildcard import under `terminal` (`terminal.*`) grants both.
    ///
    /// # Example
    /// ```
    /// use iorn::interpreter::{capability::Capabilities, lexer::tokenize};
    ///
    /// let caps = Capabilities::scan(&tokenize("import terminal.Print;"));
    /// assert!(caps.print && !caps.input);
    ///
    /// let caps = Capabilities::scan(&tokenize("import terminal.*;"));
    /// assert!(caps.print && caps.input);
    /// ```
    #[must_use]
    pub fn scan(lexemes: &[Lexeme]) -> Self {
        let mut capabilities = Self::default();

        for (index, lexeme) in lexemes.iter().enumerate() {
            if lexeme.token != Token::Import {
                continue;
            }
            let path = import_path(&lexemes[index + 1..]);
            match path.as_str() {
                "terminal.Print" => capabilities.print = true,
                "terminal.input" => capabilities.input = true,
                _ if path.starts_with(TERMINAL) && path.ends_with(".*") => {
                    capabilities.print = true;
                    capabilities.input = true;
                },
                _ => {},
            }
        }

        capabilities
    }

    /// Rejects scripts that use a primitive they never imported.
    ///
    /// # Errors
    /// Returns `ParseError::MissingImport` naming `Print` when printing was
    /// never granted, or naming `input` when an `input(` call appears without
    /// the input capability.
    pub fn check(self, lexemes: &[Lexeme]) -> ParseResult<()> {
        if !self.print {
            return Err(ParseError::MissingImport { primitive: "Print" });
        }
        let calls_input = lexemes.windows(2).any(|pair| {
                                                matches!(&pair[0].token, Token::Identifier(name) if name == "input")
                                                && pair[1].token == Token::LParen
                                            });
        if calls_input && !self.input {
            return Err(ParseError::MissingImport { primitive: "input" });
        }
        Ok(())
    }
}

/// Reads the dotted path following an `import` keyword.
fn import_path(lexemes: &[Lexeme]) -> String {
    let end = lexemes.iter()
                     .position(|lexeme| {
                         !matches!(lexeme.token, Token::Identifier(_) | Token::Dot | Token::Star)
                     })
                     .unwrap_or(lexemes.len());
    compact_text(&lexemes[..end])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::lexer::tokenize;

    fn check(source: &str) -> ParseResult<()> {
        let lexemes = tokenize(source);
        Capabilities::scan(&lexemes).check(&lexemes)
    }

    #[test]
    fn print_requires_import() {
        assert_eq!(check("Print(\"a\");"),
                   Err(ParseError::MissingImport { primitive: "Print" }));
        assert!(check("import terminal.Print;\nPrint(\"a\");").is_ok());
    }

    #[test]
    fn input_requires_import_only_when_called() {
        assert!(check("import terminal.Print;").is_ok());
        assert_eq!(check("import terminal.Print;\nnew variable x string = input();"),
                   Err(ParseError::MissingImport { primitive: "input" }));
        assert!(check("import terminal.Print;\nimport terminal.input;\nnew variable x string = input();").is_ok());
    }

    #[test]
    fn foreign_wildcards_grant_nothing() {
        assert_eq!(check("import math.*;"),
                   Err(ParseError::MissingImport { primitive: "Print" }));
    }
}
