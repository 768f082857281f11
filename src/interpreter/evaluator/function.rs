use std::{cell::RefCell, rc::Rc};

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{self, EvalResult},
        value::{
            core::{FunctionValue, Value},
            environment::{Environment, SharedEnv},
        },
    },
};

/// Evaluates a call expression.
///
/// The callee is evaluated first, then the arguments left to right; the
/// first error aborts the rest. A function value is applied in a fresh
/// frame; a builtin is invoked with the evaluated argument list directly.
/// Calling any other kind of value is an error.
pub(crate) fn eval_call(function: &Expr,
                        arguments: &[Expr],
                        line: usize,
                        env: &SharedEnv)
                        -> EvalResult<Option<Value>> {
    let callee = core::eval_operand(function, env)?;
    let arguments = core::eval_expressions(arguments, env)?;

    match callee {
        Value::Function(function) => apply_function(&function, arguments, line),
        Value::Builtin(builtin) => (builtin.func)(&arguments, line).map(Some),
        other => Err(RuntimeError::NotAFunction { found: other.type_name(),
                                                  line }),
    }
}

/// Applies a user-defined function to its evaluated arguments.
///
/// The body runs in a fresh environment enclosed by the function's
/// *captured* environment, not the caller's; binding the parameters there is
/// what makes scoping lexical rather than dynamic. A `Return` escaping the
/// body is unwrapped here, at the call boundary, so it never leaks past it.
fn apply_function(function: &FunctionValue,
                  arguments: Vec<Value>,
                  line: usize)
                  -> EvalResult<Option<Value>> {
    if arguments.len() != function.parameters.len() {
        return Err(RuntimeError::ArgumentCountMismatch { expected: function.parameters.len(),
                                                         got: arguments.len(),
                                                         line });
    }

    let mut frame = Environment::new_enclosed(Rc::clone(&function.env));

    for (parameter, argument) in function.parameters.iter().zip(arguments) {
        frame.set(parameter.clone(), argument);
    }

    let frame = Rc::new(RefCell::new(frame));

    match core::eval_block(&function.body, &frame)? {
        Some(Value::Return(value)) => Ok(Some(*value)),
        other => Ok(other),
    }
}
