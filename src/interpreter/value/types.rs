use std::fmt;

/// The type tag assigned to a variable when it is declared.
///
/// A declared type drives literal validation on `new variable` and input
/// validation on `input(...)`. It is fixed at declaration and not checked
/// again when the variable is renamed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclaredType {
    /// Text, written as a quoted literal: `"hello"`.
    String,
    /// A 64-bit signed integer: `42`, `-7`.
    Numeric,
    /// A decimal number with a mandatory fractional part: `3.14`.
    Floating,
    /// `TRUE` or `FALSE`.
    Boolean,
    /// The type of `new variable x NULL;`.
    Null,
}

impl DeclaredType {
    /// Returns the keyword used for this type in scripts.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Numeric => "numeric",
            Self::Floating => "floating",
            Self::Boolean => "boolean",
            Self::Null => "null",
        }
    }

    /// Checks a line of console input against this type and returns the
    /// value to store.
    ///
    /// `string` and `null` accept anything unchanged. `boolean` also accepts
    /// lower-case `true` / `false` and normalises them to upper case.
    ///
    /// # Example
    /// ```
    /// use iorn::interpreter::value::types::DeclaredType;
    ///
    /// assert_eq!(DeclaredType::Numeric.normalize_input("-12"), Some("-12".to_string()));
    /// assert_eq!(DeclaredType::Numeric.normalize_input("1.5"), None);
    /// assert_eq!(DeclaredType::Boolean.normalize_input("true"), Some("TRUE".to_string()));
    /// assert_eq!(DeclaredType::String.normalize_input(""), Some(String::new()));
    /// ```
    #[must_use]
    pub fn normalize_input(self, entry: &str) -> Option<String> {
        match self {
            Self::String | Self::Null => Some(entry.to_string()),
            Self::Numeric => is_integer_literal(entry).then(|| entry.to_string()),
            Self::Floating => is_decimal_literal(entry).then(|| entry.to_string()),
            Self::Boolean => match entry {
                "TRUE" | "true" => Some("TRUE".to_string()),
                "FALSE" | "false" => Some("FALSE".to_string()),
                _ => None,
            },
        }
    }

    /// The hint shown when console input does not conform to this type.
    #[must_use]
    pub const fn input_hint(self) -> &'static str {
        match self {
            Self::Numeric => "Please enter a valid integer number.",
            Self::Floating => "Please enter a valid floating point number (e.g., 1.5).",
            Self::Boolean => "Please enter TRUE/FALSE or true/false.",
            Self::String | Self::Null => "Please enter a value.",
        }
    }
}

impl fmt::Display for DeclaredType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

/// Matches `-?digits`.
///
/// # Example
/// ```
/// use iorn::interpreter::value::types::is_integer_literal;
///
/// assert!(is_integer_literal("-42"));
/// assert!(!is_integer_literal("4.2"));
/// assert!(!is_integer_literal("-"));
/// ```
#[must_use]
pub fn is_integer_literal(text: &str) -> bool {
    is_digits(text.strip_prefix('-').unwrap_or(text))
}

/// Matches `-?digits.digits`; the decimal point is mandatory.
#[must_use]
pub fn is_decimal_literal(text: &str) -> bool {
    let unsigned = text.strip_prefix('-').unwrap_or(text);
    unsigned.split_once('.')
            .is_some_and(|(whole, fraction)| is_digits(whole) && is_digits(fraction))
}

/// Matches `-?digits(.digits)?`, the pattern under which two texts are
/// compared as numbers rather than as strings.
#[must_use]
pub fn is_numeric_literal(text: &str) -> bool {
    is_integer_literal(text) || is_decimal_literal(text)
}
