use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Evaluates a binary operator over two already-evaluated operands.
///
/// Dispatch order matters and is part of the language:
/// 1. two integers get full arithmetic and comparisons;
/// 2. two strings get concatenation and equality;
/// 3. `!=` on anything else falls back to value inequality (this is what
///    makes `true != false` and `null != 1` work);
/// 4. remaining mixed-type pairs are a type mismatch;
/// 5. remaining same-type pairs are an unknown operator.
pub(crate) fn eval_binary(op: BinaryOperator,
                          left: &Value,
                          right: &Value,
                          line: usize)
                          -> EvalResult<Value> {
    match (left, right) {
        (Value::Integer(l), Value::Integer(r)) => eval_integer_binary(op, *l, *r, line),
        (Value::Str(l), Value::Str(r)) => eval_string_binary(op, l, r, line),
        _ if op == BinaryOperator::NotEqual => Ok(Value::from_native_bool(left != right)),
        _ if left.type_name() != right.type_name() => {
            Err(RuntimeError::TypeMismatch { left: left.type_name(),
                                             op: op.as_str(),
                                             right: right.type_name(),
                                             line })
        },
        _ => Err(RuntimeError::UnknownBinaryOperator { left: left.type_name(),
                                                       op: op.as_str(),
                                                       right: right.type_name(),
                                                       line }),
    }
}

/// Integer arithmetic and comparisons.
///
/// Arithmetic is checked: overflow and division by zero are reported as
/// runtime errors rather than wrapping or aborting the host. Division
/// truncates toward zero.
fn eval_integer_binary(op: BinaryOperator, left: i64, right: i64, line: usize) -> EvalResult<Value> {
    match op {
        BinaryOperator::Add => {
            left.checked_add(right)
                .map(Value::Integer)
                .ok_or(RuntimeError::Overflow { line })
        },
        BinaryOperator::Sub => {
            left.checked_sub(right)
                .map(Value::Integer)
                .ok_or(RuntimeError::Overflow { line })
        },
        BinaryOperator::Mul => {
            left.checked_mul(right)
                .map(Value::Integer)
                .ok_or(RuntimeError::Overflow { line })
        },
        BinaryOperator::Div => {
            if right == 0 {
                return Err(RuntimeError::DivisionByZero { line });
            }

            left.checked_div(right)
                .map(Value::Integer)
                .ok_or(RuntimeError::Overflow { line })
        },
        BinaryOperator::Less => Ok(Value::from_native_bool(left < right)),
        BinaryOperator::Greater => Ok(Value::from_native_bool(left > right)),
        BinaryOperator::Equal => Ok(Value::from_native_bool(left == right)),
        BinaryOperator::NotEqual => Ok(Value::from_native_bool(left != right)),
    }
}

/// String concatenation and equality.
fn eval_string_binary(op: BinaryOperator, left: &str, right: &str, line: usize)
                      -> EvalResult<Value> {
    match op {
        BinaryOperator::Add => Ok(Value::Str(format!("{left}{right}"))),
        BinaryOperator::Equal => Ok(Value::from_native_bool(left == right)),
        BinaryOperator::NotEqual => Ok(Value::from_native_bool(left != right)),
        _ => Err(RuntimeError::UnknownBinaryOperator { left: "STRING",
                                                       op: op.as_str(),
                                                       right: "STRING",
                                                       line }),
    }
}
