/// Declared types and their literal grammars.
///
/// Defines the `DeclaredType` tag fixed on every variable at declaration and
/// the text predicates that decide whether a literal (or a line of console
/// input) conforms to a type.
pub mod types;

pub mod core;
