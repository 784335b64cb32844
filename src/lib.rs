//! # iorn
//!
//! iorn is an interpreter for Iorn, a small imperative scripting language
//! with typed variables, string interpolation, arithmetic and an
//! `if` / `else to if` / `else perform` / `endif` construct.
//!
//! A run strips comments, tokenizes the script, checks that statements are
//! terminated and that every primitive used was imported, and then executes
//! the script top to bottom. Output, diagnostics and console input go through
//! the collaborators in [`interpreter::io`].

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::ParseError,
    interpreter::{
        capability::Capabilities,
        evaluator::core::Context,
        io::Host,
        lexer::tokenize,
        parser::core::ParseResult,
        preprocessor::strip_comments,
        syntax::check_syntax,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the expression, condition and statement types built
/// by the parser and executed by the evaluator. Every node carries the source
/// line it came from for diagnostics.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, checking,
/// parsing or executing a script. Every error renders as a single
/// human-readable diagnostic, and carries the source line it refers to when
/// there is one.
pub mod error;
/// Orchestrates the entire process of script execution.
///
/// This module ties together comment stripping, lexing, the whole-program
/// checks, parsing, evaluation, value representations and the host
/// collaborators.
///
/// # Responsibilities
/// - Coordinates the pipeline from raw source to executed statements.
/// - Owns the variable store for the duration of a run.
/// - Defines the traits through which output, diagnostics and input flow.
pub mod interpreter;
/// General utilities for numeric conversion and rendering.
///
/// This module provides the conversions between `i64` and `f64` used by
/// arithmetic, and the canonical textual form of numbers.
pub mod util;

/// Runs a script, returning the error that aborted it if any.
///
/// Comments are stripped, the script is tokenized, statement terminators and
/// imports are checked, and every statement is executed in order. Only a
/// failure in one of the whole-program stages aborts the run, and then
/// before any statement has executed. Failures inside a statement are
/// reported to `host.diagnostics` and execution continues.
///
/// # Errors
/// - `MissingTerminator` for the first unterminated statement.
/// - `MissingImport` if `Print` or `input` is used without its import.
///
/// # Examples
/// ```
/// use iorn::{
///     error::ParseError,
///     get_result,
///     interpreter::io::{Host, LineInput},
/// };
///
/// let mut output: Vec<String> = Vec::new();
/// let mut diagnostics: Vec<String> = Vec::new();
/// let mut input = LineInput::new(std::io::empty(), std::io::sink());
/// let mut host = Host { output:      &mut output,
///                       diagnostics: &mut diagnostics,
///                       input:       &mut input, };
///
/// let source = "import terminal.Print;\nnew variable name string = \"World\";\n\
///               Print(f\"Hello $[name]\");";
/// assert!(get_result(source, &mut host).is_ok());
///
/// // Nothing runs without the import.
/// let res = get_result("Print(\"hi\");", &mut host);
/// assert_eq!(res, Err(ParseError::MissingImport { primitive: "Print" }));
///
/// drop(host);
/// assert_eq!(output, ["Hello World"]);
/// ```
pub fn get_result(source: &str, host: &mut Host<'_>) -> ParseResult<()> {
    let clean = strip_comments(source);
    let lexemes = tokenize(&clean);

    check_syntax(&clean, &lexemes)?;
    Capabilities::scan(&lexemes).check(&lexemes)?;

    Context::new(host).run(&lexemes);
    Ok(())
}

/// Runs a script, reporting an aborted run to the host's diagnostics.
///
/// # Returns
/// `false` if the run was aborted before executing, `true` otherwise, even if
/// individual statements were rejected.
pub fn run_script(source: &str, host: &mut Host<'_>) -> bool {
    match get_result(source, host) {
        Ok(()) => true,
        Err(e) => {
            report_abort(&e, host);
            false
        },
    }
}

fn report_abort(error: &ParseError, host: &mut Host<'_>) {
    host.diagnostics.report(&error.to_string(), error.line());
}
