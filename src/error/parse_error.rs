#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing, checking or parsing.
pub enum ParseError {
    /// Found a character or token that cannot appear here.
    UnexpectedToken {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reached the end of the tokens unexpectedly.
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Found extra tokens after an expression should have ended.
    UnexpectedTrailingTokens {
        /// The extra/unexpected token.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A statement line does not end in `;` or `:`.
    MissingTerminator {
        /// The source line where the error occurred.
        line:   usize,
        /// Character length of the line after trimming.
        length: usize,
    },
    /// A primitive is used without the import that grants it.
    MissingImport {
        /// The primitive's name, `Print` or `input`.
        primitive: &'static str,
    },
    /// A conditional is missing `if (`, `then:`, `endif;` or a matching `)`.
    InvalidIfStructure {
        /// The source line where the construct starts.
        line: usize,
    },
    /// A condition has an empty side or no content at all.
    InvalidCondition {
        /// The source line where the condition starts.
        line: usize,
    },
    /// A `new variable` or `rename variable` line does not follow the
    /// declaration grammar.
    MalformedDeclaration {
        /// The source line where the error occurred.
        line: usize,
    },
    /// `Print` was called with something other than a string literal.
    MalformedPrint {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A call to a function that is neither `Print` nor `input`.
    UnknownFunction {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
}

impl ParseError {
    /// Returns the source line the error refers to, if any.
    #[must_use]
    pub const fn line(&self) -> Option<usize> {
        match self {
            Self::UnexpectedToken { line, .. }
            | Self::UnexpectedEndOfInput { line }
            | Self::ExpectedClosingParen { line }
            | Self::UnexpectedTrailingTokens { line, .. }
            | Self::MissingTerminator { line, .. }
            | Self::InvalidIfStructure { line }
            | Self::InvalidCondition { line }
            | Self::MalformedDeclaration { line }
            | Self::MalformedPrint { line }
            | Self::UnknownFunction { line, .. } => Some(*line),
            Self::MissingImport { .. } => None,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, line } => {
                write!(f, "Error on line {line}: Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput { line } => {
                write!(f, "Error on line {line}: Unexpected end of input.")
            },

            Self::ExpectedClosingParen { line } => write!(f,
                                                          "Error on line {line}: Expected closing parenthesis ')' but none found."),

            Self::UnexpectedTrailingTokens { token, line } => write!(f,
                                                                     "Error on line {line}: Extra tokens after expression. Check your input: {token}"),

            Self::MissingTerminator { line, length } => write!(f,
                                                               "Error on line {line}: There is no ending after character {length}. Statements end with ';' or ':'."),

            Self::MissingImport { primitive } => {
                write!(f, "I do not know what {primitive} is! Write its import.")
            },

            Self::InvalidIfStructure { line } => write!(f,
                                                        "Error on line {line}: Invalid if statement structure. Expected 'if (...) then:' ... 'endif;'."),

            Self::InvalidCondition { line } => write!(f,
                                                      "Error on line {line}: Invalid condition or expression in if statement."),

            Self::MalformedDeclaration { line } => write!(f,
                                                          "Error on line {line}: Invalid declaration. Example: new variable x numeric = 5;"),

            Self::MalformedPrint { line } => write!(f,
                                                    "Error on line {line}: Print expects a string literal. Example: Print(f\"x is $[x]\");"),

            Self::UnknownFunction { name, line } => write!(f,
                                                           "Error on line {line}: Unknown function '{name}()'. Function is not defined or imported."),
        }
    }
}

impl std::error::Error for ParseError {}
