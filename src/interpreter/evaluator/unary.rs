use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Evaluates a unary operator applied to an already-evaluated operand.
///
/// - `!` negates truthiness: `!true` is `false`, `!null` is `true`, and
///   everything else (including zero) negates to `false`.
/// - `-` requires an integer operand and negates it; `i64::MIN` cannot be
///   negated and reports an overflow.
pub(crate) fn eval_unary(op: UnaryOperator, operand: &Value, line: usize) -> EvalResult<Value> {
    match op {
        UnaryOperator::Not => Ok(Value::from_native_bool(!operand.is_truthy())),
        UnaryOperator::Negate => match operand {
            Value::Integer(n) => {
                n.checked_neg()
                 .map(Value::Integer)
                 .ok_or(RuntimeError::Overflow { line })
            },
            other => Err(RuntimeError::UnknownUnaryOperator { op:      op.as_str(),
                                                              operand: other.type_name(),
                                                              line }),
        },
    }
}
