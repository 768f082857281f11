use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Safely converts a `usize` to an `i64` if and only if it is exactly
/// representable.
///
/// ## Errors
/// Returns `Err(RuntimeError::Overflow { line })` if the value does not fit
/// in an `i64`.
///
/// ## Parameters
/// - `value`: The value to convert.
/// - `line`: Source code line number for error reporting.
///
/// ## Example
/// ```
/// use minnow::util::num::usize_to_i64_checked;
///
/// assert_eq!(usize_to_i64_checked(42, 0).unwrap(), 42);
/// ```
pub fn usize_to_i64_checked(value: usize, line: usize) -> EvalResult<i64> {
    i64::try_from(value).map_err(|_| RuntimeError::Overflow { line })
}
