/// Core parsing logic and entry points.
///
/// Defines `ParseResult` and the expression entry points used by every other
/// parser module.
pub mod core;

/// Binary operator parsing.
///
/// Implements the precedence tiers of arithmetic: `+ -`, then `* / %`, then
/// `^` (also written `**`).
pub mod binary;

/// Unary operator and primary expression parsing.
///
/// Handles negation, numbers, variable references and parenthesized
/// groups.
pub mod unary;

/// Statement parsing.
///
/// Recognises declarations, renames, prints and unknown calls on one line.
pub mod statement;

/// Conditional construct parsing.
///
/// Splits an `if ... endif;` construct into its arms and default block.
pub mod conditional;

/// Condition parsing.
pub mod condition;

/// Utility functions for the parser.
///
/// Token pattern searches shared by the statement-level parsers.
pub mod utils;
