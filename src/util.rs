/// Numeric conversion and rendering helpers.
///
/// This module provides the conversions between `i64` and `f64` used by the
/// evaluator, together with the canonical textual forms of numbers. Every
/// script value is observable as text (through interpolation and textual
/// comparison), so the rendering rules here are part of the language.
///
/// Conversions return a `Result` that is `Ok` only if the conversion is
/// lossless or, for truncation, representable.
pub mod num;
