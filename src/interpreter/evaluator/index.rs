use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Evaluates a subscript over already-evaluated operands.
///
/// Indexing is defined for an array with an integer index. An index outside
/// the array's bounds (negative included) yields `null` rather than an
/// error; missing data is a value in this language, not a fault. Any other
/// operand pairing is an error naming the indexed value's type.
pub(crate) fn eval_index(array: &Value, index: &Value, line: usize) -> EvalResult<Value> {
    match (array, index) {
        (Value::Array(elements), Value::Integer(index)) => {
            let element = usize::try_from(*index).ok()
                                                 .and_then(|i| elements.get(i))
                                                 .cloned();

            Ok(element.unwrap_or(Value::NULL))
        },
        _ => Err(RuntimeError::IndexNotSupported { found: array.type_name(),
                                                   line }),
    }
}
