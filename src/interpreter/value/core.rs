use std::rc::Rc;

use crate::{
    ast::{Block, LiteralValue},
    interpreter::{evaluator::core::EvalResult, value::environment::SharedEnv},
};

/// Represents a runtime value in the interpreter.
///
/// This enum models all the possible types that can appear in expressions,
/// bindings, function returns and conditional evaluations, plus the internal
/// [`Value::Return`] carrier used to unwind a function body. Failed
/// evaluation is not a value: it travels through the error side of
/// [`EvalResult`].
#[derive(Debug, Clone)]
pub enum Value {
    /// A 64-bit signed integer value.
    Integer(i64),
    /// A boolean value (`true` or `false`).
    /// Produced by comparison operators (`<`, `==`, `!=`, etc.) or logical
    /// negation (`!`), and consumed as the condition of `if` expressions.
    Bool(bool),
    /// A string value.
    Str(String),
    /// An array of `Value` elements.
    Array(Rc<Vec<Self>>),
    /// A function value: parameters, body and the environment captured at
    /// the definition site (the closure).
    Function(Rc<FunctionValue>),
    /// A built-in function provided by the host.
    Builtin(Builtin),
    /// A value being carried out of a function body by `return`.
    ///
    /// Blocks propagate this variant unchanged; only the function-call
    /// boundary (and the top level of a program) unwrap it, so it is never
    /// observable from the language.
    Return(Box<Self>),
    /// The null value.
    Null,
}

/// A user-defined function together with its captured environment.
///
/// The environment reference is what makes the function a closure: the body
/// is later evaluated in a fresh scope whose outer link is this environment,
/// not the caller's.
pub struct FunctionValue {
    /// The parameter names, in declaration order.
    pub parameters: Vec<String>,
    /// The function body.
    pub body:       Block,
    /// The environment in effect at the definition site.
    pub env:        SharedEnv,
}

impl std::fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The captured environment may transitively contain this function;
        // printing it would recurse forever.
        f.debug_struct("FunctionValue")
         .field("parameters", &self.parameters)
         .field("body", &self.body)
         .field("env", &"..")
         .finish()
    }
}

/// Type alias for builtin function handlers.
///
/// A builtin receives the slice of evaluated argument values and the call's
/// line number, and returns the computed value or a runtime error.
pub type BuiltinFn = fn(&[Value], usize) -> EvalResult<Value>;

/// A named built-in function entry.
#[derive(Debug, Clone, Copy)]
pub struct Builtin {
    /// The name the builtin is reachable under.
    pub name: &'static str,
    /// The host function implementing it.
    pub func: BuiltinFn,
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::Array(Rc::new(v))
    }
}

impl From<&LiteralValue> for Value {
    fn from(lit: &LiteralValue) -> Self {
        match lit {
            LiteralValue::Integer(n) => (*n).into(),
            LiteralValue::Str(s) => s.clone().into(),
            LiteralValue::Bool(b) => Self::from_native_bool(*b),
        }
    }
}

impl Value {
    /// The canonical `true` value.
    pub const TRUE: Self = Self::Bool(true);
    /// The canonical `false` value.
    pub const FALSE: Self = Self::Bool(false);
    /// The canonical null value.
    pub const NULL: Self = Self::Null;

    /// Resolves a host boolean to the corresponding canonical value.
    #[must_use]
    pub const fn from_native_bool(value: bool) -> Self {
        if value {
            Self::TRUE
        } else {
            Self::FALSE
        }
    }

    /// Reports the value's type name as used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "INTEGER",
            Self::Bool(_) => "BOOLEAN",
            Self::Str(_) => "STRING",
            Self::Array(_) => "ARRAY",
            Self::Function(_) => "FUNCTION",
            Self::Builtin(_) => "BUILTIN",
            Self::Return(_) => "RETURN_VALUE",
            Self::Null => "NULL",
        }
    }

    /// Reports whether the value counts as true in a condition.
    ///
    /// Only `false` and `null` are falsy; every other value, including the
    /// integer zero and the empty string, is truthy.
    ///
    /// ## Example
    /// ```
    /// use minnow::interpreter::value::core::Value;
    ///
    /// assert!(Value::Integer(0).is_truthy());
    /// assert!(!Value::FALSE.is_truthy());
    /// assert!(!Value::NULL.is_truthy());
    /// ```
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Self::Bool(false) | Self::Null)
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Array(a), Self::Array(b)) => a == b,
            // Functions compare by identity; structural comparison would
            // chase the captured environment, which may contain the function
            // itself.
            (Self::Function(a), Self::Function(b)) => Rc::ptr_eq(a, b),
            (Self::Builtin(a), Self::Builtin(b)) => a.name == b.name,
            (Self::Return(a), Self::Return(b)) => a == b,
            (Self::Null, Self::Null) => true,
            _ => false,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::Array(a) => {
                write!(f, "[")?;

                for (index, value) in a.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{value}")?;
                }

                write!(f, "]")
            },
            Self::Function(function) => {
                write!(f, "fn({}) {{\n{}\n}}", function.parameters.join(", "), function.body)
            },
            Self::Builtin(builtin) => write!(f, "builtin function {}", builtin.name),
            Self::Return(value) => write!(f, "{value}"),
            Self::Null => write!(f, "null"),
        }
    }
}
