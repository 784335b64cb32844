/// The evaluator module executes parsed statements.
///
/// The evaluator walks the script line by line, dispatches declarations,
/// renames, prints and conditionals, evaluates arithmetic and conditions,
/// and reports every statement-level failure to the host.
///
/// # Responsibilities
/// - Runs statements in order, never stopping on a rejected statement.
/// - Evaluates arithmetic, conditions and interpolation against the store.
/// - Reads console input for `input(...)` initializers.
pub mod evaluator;
/// The lexer module tokenizes comment-free source code.
///
/// The lexer reads the source text and produces a stream of lexemes, each a
/// token with its line and byte span, covering keywords, type names,
/// identifiers, literals, operators and punctuation.
pub mod lexer;
/// The parser module builds statements, expressions and conditions from
/// lexemes.
///
/// # Responsibilities
/// - Parses arithmetic with precedence and parentheses.
/// - Recognises the statements that can appear on a line.
/// - Splits conditional constructs into arms.
pub mod parser;
/// The value module defines the runtime data types.
///
/// Declares the `Value` enum, the declared types variables carry, and the
/// literal grammars that tie the two together.
pub mod value;
/// Comment stripping.
///
/// Removes every comment form from raw source while keeping line numbers
/// intact.
pub mod preprocessor;
/// Statement terminator checks.
pub mod syntax;
/// Import-derived permissions to call `Print` and `input`.
pub mod capability;
/// The variable store: every variable of a run, by name.
pub mod store;
/// Output, diagnostics and input collaborators.
///
/// Defines the traits a host implements to run scripts, plus console
/// implementations of each.
pub mod io;
