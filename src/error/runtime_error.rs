#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur during evaluation and runtime.
///
/// A runtime error propagates through every evaluation context exactly like
/// a value: it short-circuits the remaining statements of the block and the
/// program, argument lists, and function calls, and is never implicitly
/// recovered. The interactive loop displays it and moves on to the next
/// input.
pub enum RuntimeError {
    /// Tried to use an identifier with no binding in any enclosing scope and
    /// no builtin of that name.
    IdentifierNotFound {
        /// The name that failed to resolve.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A binary operator was applied to operands of two different types.
    TypeMismatch {
        /// Type name of the left operand.
        left:  &'static str,
        /// The operator's source spelling.
        op:    &'static str,
        /// Type name of the right operand.
        right: &'static str,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A binary operator is not supported for the given operand types.
    UnknownBinaryOperator {
        /// Type name of the left operand.
        left:  &'static str,
        /// The operator's source spelling.
        op:    &'static str,
        /// Type name of the right operand.
        right: &'static str,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A unary operator is not supported for its operand type.
    UnknownUnaryOperator {
        /// The operator's source spelling.
        op:      &'static str,
        /// Type name of the operand.
        operand: &'static str,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Tried to call a value that is neither a function nor a builtin.
    NotAFunction {
        /// Type name of the value that was called.
        found: &'static str,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The wrong number of arguments was supplied to a function or builtin.
    ArgumentCountMismatch {
        /// The number of arguments the callee accepts.
        expected: usize,
        /// The number of arguments actually supplied.
        got:      usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A builtin was handed an argument type it does not support.
    UnsupportedArgument {
        /// The builtin's name.
        function: &'static str,
        /// Type name of the rejected argument.
        found:    &'static str,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// The index operator was applied to something it does not support.
    IndexNotSupported {
        /// Type name of the value being indexed.
        found: &'static str,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Arithmetic operation overflowed.
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An expression was used where a value is required, but produced none
    /// (e.g. a function body or `if` branch ending in a `let`).
    MissingValue {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IdentifierNotFound { name, line } => {
                write!(f, "Error on line {line}: Identifier not found: {name}.")
            },

            Self::TypeMismatch { left, op, right, line } => {
                write!(f, "Error on line {line}: Type mismatch: {left} {op} {right}.")
            },

            Self::UnknownBinaryOperator { left, op, right, line } => {
                write!(f, "Error on line {line}: Unknown operator: {left} {op} {right}.")
            },

            Self::UnknownUnaryOperator { op, operand, line } => {
                write!(f, "Error on line {line}: Unknown operator: {op}{operand}.")
            },

            Self::NotAFunction { found, line } => {
                write!(f, "Error on line {line}: Not a function: {found}.")
            },

            Self::ArgumentCountMismatch { expected, got, line } => write!(f,
                                                                          "Error on line {line}: Wrong number of arguments: expected {expected}, got {got}."),

            Self::UnsupportedArgument { function, found, line } => write!(f,
                                                                          "Error on line {line}: Argument to '{function}' not supported, got {found}."),

            Self::IndexNotSupported { found, line } => {
                write!(f, "Error on line {line}: Index operator not supported: {found}.")
            },

            Self::DivisionByZero { line } => write!(f, "Error on line {line}: Division by zero."),

            Self::Overflow { line } => write!(f,
                                              "Error on line {line}: Integer overflow while trying to compute result."),

            Self::MissingValue { line } => write!(f, "Error on line {line}: Value missing."),
        }
    }
}

impl std::error::Error for RuntimeError {}
