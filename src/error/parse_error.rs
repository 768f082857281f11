#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur while parsing tokens into an AST.
///
/// Parse errors are non-fatal: the parser records them in order and keeps
/// going where the grammar allows, so a single pass reports every problem it
/// can find. Callers must check the accumulated list before trusting the
/// parsed program.
pub enum ParseError {
    /// No prefix parse rule exists for the token opening an expression.
    NoPrefixRule {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A specific token was required next, but something else was found.
    ExpectedToken {
        /// The token kind that was expected.
        expected: String,
        /// The token actually found.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// The lexer produced an illegal token (unrecognized input bytes or an
    /// integer literal too large to represent).
    IllegalToken {
        /// The offending source text.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoPrefixRule { token, line } => {
                write!(f, "Error on line {line}: No prefix parse rule for {token}.")
            },

            Self::ExpectedToken { expected, found, line } => write!(f,
                                                                    "Error on line {line}: Expected next token to be {expected}, found {found} instead."),

            Self::IllegalToken { literal, line } => {
                write!(f, "Error on line {line}: Illegal token '{literal}'.")
            },
        }
    }
}

impl std::error::Error for ParseError {}

/// The ordered list of errors a parse accumulated, as one error value.
///
/// The parser itself exposes the plain slice (so an interactive caller can
/// print each entry on its own line); this wrapper exists for entry points
/// that must hand back a single `std::error::Error`.
#[derive(Debug)]
pub struct ParseErrorList(pub Vec<ParseError>);

impl std::fmt::Display for ParseErrorList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, error) in self.0.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseErrorList {}
