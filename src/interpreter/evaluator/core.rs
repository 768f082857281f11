use std::rc::Rc;

use crate::{
    ast::{Block, Expr, Program, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::{binary, builtin, function, index, unary},
        value::{
            core::{FunctionValue, Value},
            environment::SharedEnv,
        },
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure. The error side is the language's
/// error channel: `?` gives exactly the required short-circuiting through
/// blocks, programs, argument lists and calls, with no implicit recovery
/// anywhere.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates a whole program against the given environment.
///
/// This is the evaluator's entry point. Statements run in order; the first
/// error aborts the rest. A `return` at the top level ends the program with
/// the unwrapped value. The result is the value of the last evaluated
/// statement, or `None` when it produced none (a `let`, for instance).
///
/// The caller owns the environment: an interactive loop threads the same
/// one across inputs to preserve bindings, a one-shot run uses a fresh one.
pub fn eval_program(program: &Program, env: &SharedEnv) -> EvalResult<Option<Value>> {
    let mut result = None;

    for statement in &program.statements {
        match eval_statement(statement, env)? {
            Some(Value::Return(value)) => return Ok(Some(*value)),
            other => result = other,
        }
    }

    Ok(result)
}

/// Evaluates the statements of a block in order.
///
/// A `Return` produced by any statement stops the block immediately and is
/// propagated *without* unwrapping; only the function-call boundary (or the
/// program) unwraps it, which is what carries an inner `return` out through
/// nested blocks. The block's value is the value of its last evaluated
/// statement.
pub(crate) fn eval_block(block: &Block, env: &SharedEnv) -> EvalResult<Option<Value>> {
    let mut result = None;

    for statement in &block.statements {
        match eval_statement(statement, env)? {
            Some(Value::Return(value)) => return Ok(Some(Value::Return(value))),
            other => result = other,
        }
    }

    Ok(result)
}

/// Evaluates a single statement.
///
/// `let` binds into the *current* environment and yields no value; `return`
/// wraps its operand in the internal carrier; an expression statement
/// yields whatever the expression does.
fn eval_statement(statement: &Statement, env: &SharedEnv) -> EvalResult<Option<Value>> {
    match statement {
        Statement::Let { name, value, .. } => {
            let value = eval_operand(value, env)?;
            env.borrow_mut().set(name.clone(), value);
            Ok(None)
        },
        Statement::Return { value, .. } => {
            let value = eval_operand(value, env)?;
            Ok(Some(Value::Return(Box::new(value))))
        },
        Statement::Expression { expr, .. } => eval_expression(expr, env),
    }
}

/// Evaluates an expression, dispatching on the AST variant.
///
/// Returns `Ok(None)` for the two constructs that can legitimately produce
/// nothing: an `if` whose taken branch ends without a value, and a call
/// whose body does. Every other variant always produces a value.
pub(crate) fn eval_expression(expr: &Expr, env: &SharedEnv) -> EvalResult<Option<Value>> {
    match expr {
        Expr::Literal { value, .. } => Ok(Some(value.into())),
        Expr::Variable { name, line } => eval_variable(name, *line, env).map(Some),
        Expr::UnaryOp { op, expr, line } => {
            let operand = eval_operand(expr, env)?;
            unary::eval_unary(*op, &operand, *line).map(Some)
        },
        Expr::BinaryOp { left, op, right, line } => {
            let left = eval_operand(left, env)?;
            let right = eval_operand(right, env)?;
            binary::eval_binary(*op, &left, &right, *line).map(Some)
        },
        Expr::IfExpr { condition,
                       consequence,
                       alternative,
                       .. } => eval_if_expression(condition, consequence, alternative.as_ref(), env),
        Expr::FunctionLiteral { parameters, body, .. } => {
            // Capturing the environment by reference is the closure; the
            // body is not evaluated here.
            Ok(Some(Value::Function(Rc::new(FunctionValue { parameters: parameters.clone(),
                                                            body:       body.clone(),
                                                            env:        Rc::clone(env), }))))
        },
        Expr::Call { function,
                     arguments,
                     line, } => function::eval_call(function, arguments, *line, env),
        Expr::ArrayLiteral { elements, .. } => {
            let values = eval_expressions(elements, env)?;
            Ok(Some(values.into()))
        },
        Expr::ArrayIndex { array, index: idx, line } => {
            let array = eval_operand(array, env)?;
            let idx = eval_operand(idx, env)?;
            index::eval_index(&array, &idx, *line).map(Some)
        },
    }
}

/// Evaluates a subexpression and ensures that it produces a value.
///
/// Operands, initializers and arguments all require an actual value; an
/// expression that yields nothing there is reported as `MissingValue` at
/// its own source line.
pub(crate) fn eval_operand(expr: &Expr, env: &SharedEnv) -> EvalResult<Value> {
    eval_expression(expr, env)?.ok_or(RuntimeError::MissingValue { line: expr.line_number() })
}

/// Evaluates an expression list left to right.
///
/// The first error aborts the remaining elements. Shared by array literals
/// and call argument lists.
pub(crate) fn eval_expressions(expressions: &[Expr], env: &SharedEnv) -> EvalResult<Vec<Value>> {
    expressions.iter().map(|expr| eval_operand(expr, env)).collect()
}

/// Resolves a name: the environment chain first, then the builtin table.
fn eval_variable(name: &str, line: usize, env: &SharedEnv) -> EvalResult<Value> {
    if let Some(value) = env.borrow().get(name) {
        return Ok(value);
    }

    if let Some(value) = builtin::lookup(name) {
        return Ok(value);
    }

    Err(RuntimeError::IdentifierNotFound { name: name.to_string(),
                                           line })
}

/// Evaluates a conditional expression.
///
/// Truthiness follows [`Value::is_truthy`]: only `false` and `null` are
/// falsy, so the integer zero takes the consequence branch. A falsy
/// condition with no alternative yields the canonical null.
fn eval_if_expression(condition: &Expr,
                      consequence: &Block,
                      alternative: Option<&Block>,
                      env: &SharedEnv)
                      -> EvalResult<Option<Value>> {
    let condition = eval_operand(condition, env)?;

    if condition.is_truthy() {
        eval_block(consequence, env)
    } else if let Some(alternative) = alternative {
        eval_block(alternative, env)
    } else {
        Ok(Some(Value::NULL))
    }
}
