use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Safely converts an `i64` to `f64` if and only if it is exactly
/// representable.
///
/// ## Errors
/// Returns `Err(error)` if the value exceeds `MAX_SAFE_U64_INT` in absolute
/// value.
///
/// ## Example
/// ```
/// use iorn::util::num::{MAX_SAFE_U64_INT, i64_to_f64_checked};
///
/// let result = i64_to_f64_checked(42, "too big!");
/// assert_eq!(result.unwrap(), 42.0);
///
/// let big = MAX_SAFE_U64_INT as i64 + 1;
/// assert!(i64_to_f64_checked(big, "too big!").is_err());
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn i64_to_f64_checked<E>(value: i64, error: E) -> Result<f64, E> {
    if value.unsigned_abs() > MAX_SAFE_U64_INT {
        return Err(error);
    }
    Ok(value as f64)
}

/// Converts an `f64` to `i64` by truncating toward zero.
///
/// This is how an arithmetic result is stored into a `numeric` variable:
/// `7 / 2` becomes `3` and `-7 / 2` becomes `-3`.
///
/// ## Errors
/// Returns `RuntimeError::Overflow` for non-finite values and for values
/// outside the `i64` range.
///
/// ## Example
/// ```
/// use iorn::{error::RuntimeError, util::num::f64_to_i64_truncated};
///
/// assert_eq!(f64_to_i64_truncated(3.9, 1).unwrap(), 3);
/// assert_eq!(f64_to_i64_truncated(-3.9, 1).unwrap(), -3);
///
/// let err = f64_to_i64_truncated(f64::INFINITY, 4).unwrap_err();
/// assert!(matches!(err, RuntimeError::Overflow { line: 4 }));
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
pub fn f64_to_i64_truncated(value: f64, line: usize) -> EvalResult<i64> {
    let truncated = value.trunc();
    if !truncated.is_finite() || truncated < i64::MIN as f64 || truncated >= i64::MAX as f64 {
        return Err(RuntimeError::Overflow { line });
    }
    Ok(truncated as i64)
}

/// Renders a floating value so that it always reads back as a decimal
/// literal.
///
/// The shortest text that round-trips is used, and `.0` is appended when that
/// text has no fractional part, so `3.0` renders as `"3.0"` rather than `"3"`.
/// Non-finite values render as Rust prints them.
///
/// ## Example
/// ```
/// use iorn::util::num::render_float;
///
/// assert_eq!(render_float(3.0), "3.0");
/// assert_eq!(render_float(-0.25), "-0.25");
/// assert_eq!(render_float(1.5e3), "1500.0");
/// ```
#[must_use]
pub fn render_float(value: f64) -> String {
    let mut text = value.to_string();
    if value.is_finite() && !text.contains('.') {
        text.push_str(".0");
    }
    text
}
