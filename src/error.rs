/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// code. Parse errors include syntax mistakes, unexpected tokens and illegal
/// input, and are accumulated by the parser rather than aborting the parse.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Runtime
/// errors include unresolved identifiers, type mismatches, unsupported
/// operators, arity mismatches, division by zero and overflow.
pub mod runtime_error;

pub use parse_error::{ParseError, ParseErrorList};
pub use runtime_error::RuntimeError;
