use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::core::{Builtin, Value},
    },
    util::num::usize_to_i64_checked,
};

/// The table of host-provided functions.
///
/// Identifier resolution consults this table only after the environment
/// chain comes up empty, so a user binding shadows a builtin of the same
/// name. Adding a builtin is adding an entry here.
static BUILTIN_TABLE: &[Builtin] = &[Builtin { name: "len",
                                               func: len, }];

/// Resolves a name against the builtin table.
pub(crate) fn lookup(name: &str) -> Option<Value> {
    BUILTIN_TABLE.iter()
                 .find(|builtin| builtin.name == name)
                 .map(|builtin| Value::Builtin(*builtin))
}

/// Returns the length of its single string argument, in bytes.
fn len(arguments: &[Value], line: usize) -> EvalResult<Value> {
    if arguments.len() != 1 {
        return Err(RuntimeError::ArgumentCountMismatch { expected: 1,
                                                         got: arguments.len(),
                                                         line });
    }

    match &arguments[0] {
        Value::Str(s) => usize_to_i64_checked(s.len(), line).map(Value::Integer),
        other => Err(RuntimeError::UnsupportedArgument { function: "len",
                                                         found: other.type_name(),
                                                         line }),
    }
}
