/// Parsing and whole-program errors.
///
/// Defines the errors raised while tokenizing, checking and parsing a
/// script. Syntax-checker and capability errors abort the whole
/// run before any statement executes; the others reject only the statement or
/// conditional construct they were found in.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the validation and evaluation errors raised while executing a
/// statement: bad literals, duplicate or unknown variables, malformed
/// arithmetic, and closed input. They never abort the run.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
