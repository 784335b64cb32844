use crate::interpreter::value::types::DeclaredType;

#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur while executing a statement.
pub enum RuntimeError {
    /// A variable name does not start with a letter.
    InvalidVariableName {
        /// The rejected name.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Tried to declare a variable that already exists.
    AlreadyDeclared {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A literal does not follow the grammar of its declared type.
    InvalidLiteral {
        /// The declared type the literal was checked against.
        ty:    DeclaredType,
        /// The literal as written.
        value: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Tried to use or rename a variable that was never declared.
    UnknownVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A variable used in arithmetic does not hold a number.
    ExpectedNumber {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The arithmetic initializer of a declaration could not be reduced.
    InvalidExpression {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An arithmetic result does not fit the target representation.
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Console input ended before a conforming value was entered.
    InputClosed {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl RuntimeError {
    /// Returns the source line the error refers to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::InvalidVariableName { line, .. }
            | Self::AlreadyDeclared { line, .. }
            | Self::InvalidLiteral { line, .. }
            | Self::UnknownVariable { line, .. }
            | Self::ExpectedNumber { line, .. }
            | Self::InvalidExpression { line }
            | Self::Overflow { line }
            | Self::InputClosed { line } => *line,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidVariableName { name, line } => write!(f,
                                                               "Error on line {line}: Variable name '{name}' is invalid. Must start with a letter."),
            Self::AlreadyDeclared { name, line } => {
                write!(f, "Error on line {line}: Variable '{name}' is already declared.")
            },
            Self::InvalidLiteral { ty, value, line } => match ty {
                DeclaredType::String => write!(f,
                                               "Error on line {line}: String value must be enclosed in quotes, found {value}."),
                DeclaredType::Numeric => {
                    write!(f, "Error on line {line}: Invalid numeric value '{value}'.")
                },
                DeclaredType::Floating => write!(f,
                                                 "Error on line {line}: Invalid floating value '{value}'. Must contain decimal point."),
                DeclaredType::Boolean => write!(f,
                                                "Error on line {line}: Boolean value must be TRUE or FALSE, found '{value}'."),
                DeclaredType::Null => {
                    write!(f, "Error on line {line}: NULL variables take no value.")
                },
            },
            Self::UnknownVariable { name, line } => {
                write!(f, "Error on line {line}: Variable '{name}' does not exist.")
            },
            Self::ExpectedNumber { name, line } => write!(f,
                                                          "Error on line {line}: Variable '{name}' does not hold a number."),
            Self::InvalidExpression { line } => {
                write!(f, "Error on line {line}: Invalid mathematical expression.")
            },
            Self::Overflow { line } => write!(f,
                                              "Error on line {line}: Result is too large to be stored."),
            Self::InputClosed { line } => write!(f,
                                                 "Error on line {line}: Input ended before a valid value was entered."),
        }
    }
}

impl std::error::Error for RuntimeError {}
