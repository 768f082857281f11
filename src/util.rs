/// Numeric conversion helpers.
///
/// This module provides safe functions for converting between host integer
/// widths for values that cross into the language, reporting an error
/// instead of silently truncating.
pub mod num;
