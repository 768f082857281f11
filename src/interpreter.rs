/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the AST recursively, threading a lexical environment
/// through every call, and produces runtime values. It is the core execution
/// engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Manages environments, closures and function calls.
/// - Reports runtime errors such as unresolved identifiers or type
///   mismatches.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as
/// integers, strings, identifiers, operators, delimiters, and keywords. This
/// is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with type and source
///   location.
/// - Handles numeric and string literals, identifiers, and operators.
/// - Carries invalid input through the token stream as illegal tokens.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and
/// constructs an AST that represents the syntactic structure of expressions
/// and statements, using precedence climbing for the expression grammar.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Validates correct grammar and syntax, accumulating errors with location
///   info instead of stopping at the first one.
/// - Supports operators, conditionals, function literals, calls and arrays.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares all the value types used during interpretation and
/// execution, such as integers, booleans, strings, arrays and functions,
/// together with the environment type that gives names their meaning.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported value variants.
/// - Implements truthiness, equality and display forms.
/// - Provides the lexical environment chain used for scoping and closures.
pub mod value;
