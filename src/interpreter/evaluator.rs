/// Binary operator evaluation logic.
///
/// Handles the execution of binary operators over evaluated operands:
/// integer arithmetic and comparisons, string concatenation and equality,
/// and the value-inequality fallback.
pub mod binary;

/// Built-in functions.
///
/// Defines the table of host-provided functions consulted by identifier
/// resolution when no environment binding exists.
pub mod builtin;

/// Core evaluation logic.
///
/// Contains the main tree walk: program, block and statement evaluation,
/// expression dispatch, identifier resolution and conditionals.
pub mod core;

/// Function call evaluation.
///
/// Handles user-defined and built-in function calls, argument checking, and
/// return value unwrapping at the call boundary.
pub mod function;

/// Subscript evaluation.
///
/// Implements the index operator over arrays.
pub mod index;

/// Unary operator evaluation logic.
///
/// Implements logical NOT and arithmetic negation.
pub mod unary;
