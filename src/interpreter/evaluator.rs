/// Core evaluation logic and context management.
///
/// Contains the runtime context, the statement walk and the dispatch of
/// every statement kind.
pub mod core;

/// Arithmetic evaluation.
///
/// Reduces expression trees to numbers, with lenient division and modulo by
/// zero.
pub mod arithmetic;

/// Condition evaluation.
///
/// Compares two sides numerically or textually, and resolves bare boolean
/// flags.
pub mod condition;

/// String interpolation and printing.
pub mod interpolation;

/// Execution of conditional constructs.
///
/// Picks the first arm whose condition holds and runs its block.
pub mod conditional;

/// Declarations and renames.
///
/// Validates literals against declared types, reduces arithmetic
/// initializers and reads console input.
pub mod declaration;
