//! # minnow
//!
//! minnow is a tree-walking interpreter for a small, dynamically typed,
//! C-like scripting language. Source text is tokenized, parsed into an
//! abstract syntax tree with a Pratt parser, and evaluated directly against
//! a chain of lexical environments; there is no bytecode and no compilation
//! stage. The language has integers, booleans, strings, arrays, first-class
//! functions with closures, conditionals and `let` bindings.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::{cell::RefCell, rc::Rc};

use crate::{
    error::ParseErrorList,
    interpreter::{
        evaluator::core::eval_program,
        lexer::Lexer,
        parser::core::Parser,
        value::{core::Value, environment::Environment},
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums and related types
/// that represent the syntactic structure of source code as a tree. The AST
/// is built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source line numbers to AST nodes for error reporting.
/// - Renders the canonical, fully parenthesized textual reconstruction of
///   every node.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing
/// or evaluating code. It standardizes error reporting and carries detailed
/// information about failures, including source locations for debugging and
/// user feedback.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations and all supporting infrastructure to provide a complete
/// runtime for source code evaluation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for parsing and evaluating user code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// The interactive read-evaluate-print loop.
///
/// Reads one line of input at a time, runs it through the interpreter with
/// an environment that persists across lines, and prints either the parse
/// errors or the evaluated value.
///
/// # Responsibilities
/// - Drives the lexer, parser and evaluator over line-based input.
/// - Preserves bindings across inputs within one session.
/// - Displays parse and runtime errors without ending the session.
pub mod repl;
/// General utilities for safe numeric conversion.
///
/// This module provides reusable helpers used throughout the interpreter,
/// such as checked conversions between host integer widths.
///
/// # Responsibilities
/// - Safely convert between `usize` and `i64` without silent data loss.
pub mod util;

/// Parses and evaluates a source string, returning its final value.
///
/// This function runs the whole pipeline over `source` with a fresh global
/// environment: the program is parsed in full, refused if any syntax error
/// accumulated, and evaluated statement by statement otherwise. The returned
/// value is the value of the last evaluated statement, or `None` when it
/// produced none (a trailing `let`, for instance). With `auto_print` set,
/// a final value is also written to standard output.
///
/// # Errors
/// Returns the accumulated [`ParseErrorList`] when the source does not
/// parse, or the first runtime error when evaluation fails.
///
/// # Examples
/// ```
/// use minnow::{get_result, interpreter::value::core::Value};
///
/// // The final statement's value is the result.
/// let result = get_result("let x = 2 + 2; x;", false);
/// assert_eq!(result.unwrap(), Some(Value::Integer(4)));
///
/// // Example with an intentional error (unknown variable).
/// let result = get_result("let y = x + 1;", false); // 'x' is not defined
/// assert!(result.is_err());
/// ```
pub fn get_result(source: &str,
                  auto_print: bool)
                  -> Result<Option<Value>, Box<dyn std::error::Error>> {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();

    let errors = parser.into_errors();
    if !errors.is_empty() {
        return Err(Box::new(ParseErrorList(errors)));
    }

    let env = Rc::new(RefCell::new(Environment::new()));
    let result = eval_program(&program, &env)?;

    if auto_print {
        if let Some(value) = &result {
            println!("{value}");
        }
    }

    Ok(result)
}
