use std::fmt;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::types::{DeclaredType, is_decimal_literal, is_integer_literal, is_numeric_literal},
    },
    util::num::{i64_to_f64_checked, render_float},
};

/// Represents a runtime value in the interpreter.
///
/// Every value also has a canonical textual form (its `Display`), which is
/// what interpolation prints and what textual comparisons operate on. For
/// every variant but `Null`, parsing that text under the matching declared
/// type yields an equal value again.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Unquoted text.
    String(String),
    /// A 64-bit signed integer.
    Integer(i64),
    /// A double precision floating-point number.
    Float(f64),
    /// `TRUE` or `FALSE`.
    Boolean(bool),
    /// The sentinel stored by `new variable x NULL;`.
    Null,
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl Value {
    /// Parses already-unquoted literal text under a declared type.
    ///
    /// Returns `None` if the text does not follow the type's literal grammar
    /// or does not fit the target representation.
    ///
    /// # Example
    /// ```
    /// use iorn::interpreter::value::{core::Value, types::DeclaredType};
    ///
    /// assert_eq!(Value::parse_as(DeclaredType::Numeric, "-5"), Some(Value::Integer(-5)));
    /// assert_eq!(Value::parse_as(DeclaredType::Floating, "5"), None);
    /// assert_eq!(Value::parse_as(DeclaredType::Boolean, "TRUE"), Some(Value::Boolean(true)));
    /// ```
    #[must_use]
    pub fn parse_as(ty: DeclaredType, text: &str) -> Option<Self> {
        match ty {
            DeclaredType::String => Some(Self::String(text.to_string())),
            DeclaredType::Numeric => {
                if !is_integer_literal(text) {
                    return None;
                }
                text.parse().ok().map(Self::Integer)
            },
            DeclaredType::Floating => {
                if !is_decimal_literal(text) {
                    return None;
                }
                text.parse().ok().map(Self::Float)
            },
            DeclaredType::Boolean => match text {
                "TRUE" => Some(Self::Boolean(true)),
                "FALSE" => Some(Self::Boolean(false)),
                _ => None,
            },
            DeclaredType::Null => None,
        }
    }

    /// Builds a value from text that was never validated.
    ///
    /// Used by `rename variable` and by console input: the text is parsed
    /// under `ty` when it conforms, and kept verbatim as a string otherwise.
    #[must_use]
    pub fn from_text(ty: DeclaredType, text: &str) -> Self {
        Self::parse_as(ty, text).unwrap_or_else(|| Self::String(text.to_string()))
    }

    /// Converts the value to an `f64` for arithmetic.
    ///
    /// Integers and floats convert directly. Strings convert when their text
    /// is a numeric literal, which is what renamed numbers look like.
    ///
    /// # Errors
    /// Returns `RuntimeError::ExpectedNumber` for booleans, `Null`, and
    /// non-numeric strings, and `RuntimeError::Overflow` for integers that are
    /// not exactly representable.
    pub fn as_number(&self, name: &str, line: usize) -> EvalResult<f64> {
        match self {
            Self::Integer(n) => i64_to_f64_checked(*n, RuntimeError::Overflow { line }),
            Self::Float(r) => Ok(*r),
            Self::String(text) if is_numeric_literal(text) => {
                text.parse()
                    .map_err(|_| RuntimeError::ExpectedNumber { name: name.to_string(),
                                                                line })
            },
            _ => Err(RuntimeError::ExpectedNumber { name: name.to_string(),
                                                    line }),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(text) => write!(f, "{text}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(r) => write!(f, "{}", render_float(*r)),
            Self::Boolean(true) => write!(f, "TRUE"),
            Self::Boolean(false) => write!(f, "FALSE"),
            Self::Null => write!(f, "null"),
        }
    }
}
