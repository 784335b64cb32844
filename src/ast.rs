use crate::interpreter::{
    lexer::{Lexeme, Token},
    value::types::DeclaredType,
};

/// An abstract syntax tree (AST) node representing an arithmetic expression.
///
/// Arithmetic is only ever over numbers and numeric variables; the result of
/// evaluating an `Expr` is always an `f64`.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Number {
        /// The parsed value.
        value: f64,
        /// The literal as written, used when the literal is compared as text.
        text:  String,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A unary operation (negation).
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// A binary arithmetic operation.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
}

/// Supported unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Negation: `-x`
    Negate,
}

/// Supported binary arithmetic operators, by precedence tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition: `a + b`
    Add,
    /// Subtraction: `a - b`
    Sub,
    /// Multiplication: `a * b`
    Mul,
    /// Division: `a / b`
    Div,
    /// Remainder: `a % b`
    Mod,
    /// Exponentiation: `a ^ b` or `a ** b`
    Pow,
}

impl BinaryOperator {
    /// Maps an operator token to its binary operator.
    #[must_use]
    pub const fn from_token(token: &Token) -> Option<Self> {
        match token {
            Token::Plus => Some(Self::Add),
            Token::Minus => Some(Self::Sub),
            Token::Star => Some(Self::Mul),
            Token::Slash => Some(Self::Div),
            Token::Percent => Some(Self::Mod),
            Token::Caret | Token::StarStar => Some(Self::Pow),
            _ => None,
        }
    }
}

/// Comparison operators accepted in conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOperator {
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `>=`
    GreaterEqual,
    /// `<=`
    LessEqual,
    /// `>`
    Greater,
    /// `<`
    Less,
}

impl ComparisonOperator {
    /// The order in which a condition is searched for its operator.
    pub const SEARCH_ORDER: [Self; 6] = [Self::Equal,
                                         Self::NotEqual,
                                         Self::GreaterEqual,
                                         Self::LessEqual,
                                         Self::Greater,
                                         Self::Less];

    /// Maps a comparison token to its operator.
    #[must_use]
    pub const fn from_token(token: &Token) -> Option<Self> {
        match token {
            Token::EqualEqual => Some(Self::Equal),
            Token::BangEqual => Some(Self::NotEqual),
            Token::GreaterEqual => Some(Self::GreaterEqual),
            Token::LessEqual => Some(Self::LessEqual),
            Token::Greater => Some(Self::Greater),
            Token::Less => Some(Self::Less),
            _ => None,
        }
    }

    /// Applies the operator to two comparable operands.
    ///
    /// # Example
    /// ```
    /// use iorn::ast::ComparisonOperator;
    ///
    /// assert!(ComparisonOperator::Less.compare(&1.0, &2.0));
    /// assert!(ComparisonOperator::Greater.compare("b", "abc"));
    /// assert!(!ComparisonOperator::NotEqual.compare("x", "x"));
    /// ```
    pub fn compare<T: PartialOrd + ?Sized>(self, left: &T, right: &T) -> bool {
        match self {
            Self::Equal => left == right,
            Self::NotEqual => left != right,
            Self::GreaterEqual => left >= right,
            Self::LessEqual => left <= right,
            Self::Greater => left > right,
            Self::Less => left < right,
        }
    }
}

/// One side of a comparison.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// A quoted string literal; holds the unquoted text with whitespace
    /// removed.
    Text(String),
    /// An arithmetic expression, possibly a single number or variable.
    Expr {
        /// The parsed expression.
        expr: Expr,
        /// Its source text with whitespace removed.
        text: String,
    },
    /// Anything else, kept as source text with whitespace removed.
    Raw(String),
}

impl Operand {
    /// The side as written with whitespace removed; string literals without
    /// their quotes.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Text(text) | Self::Expr { text, .. } | Self::Raw(text) => text,
        }
    }
}

/// A parsed condition of a conditional arm.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// `<left> <op> <right>`
    Comparison {
        /// Left-hand side.
        left:  Operand,
        /// The comparison operator.
        op:    ComparisonOperator,
        /// Right-hand side.
        right: Operand,
        /// Line number in the source code.
        line:  usize,
    },
    /// A condition without an operator, naming a boolean variable.
    Flag {
        /// The variable name (or whatever text was written).
        name: String,
        /// Line number in the source code.
        line: usize,
    },
}

/// Where a declared or renamed variable takes its value from.
#[derive(Debug, Clone, PartialEq)]
pub enum Initializer {
    /// `input()` or `input("prompt")`.
    Input {
        /// Text written before reading; empty when none was given.
        prompt: String,
    },
    /// The value tokens between `=` and `;`, still unvalidated.
    Literal(Vec<Lexeme>),
}

/// The argument of a `Print(...)` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintLiteral {
    /// The unquoted literal text.
    pub text:         String,
    /// `true` for `f"..."` literals, whose `$[name]` placeholders are resolved.
    pub interpolated: bool,
    /// Line number in the source code.
    pub line:         usize,
}

/// A top-level statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `new variable <name> <type> = <value>;`
    Declaration {
        /// Name of the new variable.
        name:  String,
        /// Its declared type.
        ty:    DeclaredType,
        /// Its initial value.
        value: Initializer,
        /// Line number in the source code.
        line:  usize,
    },
    /// `new variable <name> NULL;`
    NullDeclaration {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// `rename variable <name> <type> = <value>;`
    Rename {
        /// Name of the existing variable.
        name:  String,
        /// The type written in the statement. Informational only.
        ty:    DeclaredType,
        /// The new value.
        value: Initializer,
        /// Line number in the source code.
        line:  usize,
    },
    /// `Print("...");` or `Print(f"...");`
    Print(PrintLiteral),
}

/// The body of a conditional arm.
///
/// Only prints are executed inside a block; an empty block or one that is just
/// `ignore` does nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Block {
    /// The print calls found in the block, in order.
    pub prints: Vec<PrintLiteral>,
}

/// One (condition, block) pair of a conditional.
///
/// The condition is kept as tokens and only parsed when the arm is reached,
/// so arms after the one that runs are never looked at.
#[derive(Debug, Clone, PartialEq)]
pub struct Arm {
    /// Tokens between the parentheses of `if (...)`.
    pub condition: Vec<Lexeme>,
    /// Statements to run when the condition holds.
    pub block:     Block,
    /// Line of the arm's `if`.
    pub line:      usize,
}

/// `if (...) then: ... [else to if (...) resume: ...]* [else perform: ...]
/// endif;`
#[derive(Debug, Clone, PartialEq)]
pub struct Conditional {
    /// The `if (...) then:` arm.
    pub primary: Arm,
    /// The `else to if (...) resume:` arms, in order.
    pub arms:    Vec<Arm>,
    /// The `else perform:` block, if present.
    pub default: Option<Block>,
    /// Line where the construct starts.
    pub line:    usize,
}
