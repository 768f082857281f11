use std::{
    cell::RefCell,
    io::{BufRead, Write},
    rc::Rc,
};

use crate::interpreter::{
    evaluator::core::eval_program,
    lexer::Lexer,
    parser::core::Parser,
    value::environment::Environment,
};

/// The prompt printed before each line of input.
pub const PROMPT: &str = ">> ";

/// Runs the interactive loop until the input ends.
///
/// Each line is lexed, parsed and evaluated on its own, against an
/// environment that persists across lines, so bindings made in one input
/// are visible in the next. A line with parse errors prints each of them
/// and is not evaluated; a runtime error is printed where the value would
/// have been. Either way the loop moves on to the next line.
///
/// # Errors
/// Returns an error when reading the input or writing the output fails.
///
/// ## Example
/// ```
/// let input = b"let x = 10;\nx + 5;\n";
/// let mut output = Vec::new();
///
/// minnow::repl::start(&mut &input[..], &mut output).unwrap();
///
/// let output = String::from_utf8(output).unwrap();
/// assert!(output.contains("15"));
/// ```
pub fn start(input: &mut impl BufRead, output: &mut impl Write) -> std::io::Result<()> {
    let env = Rc::new(RefCell::new(Environment::new()));

    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }

        let mut parser = Parser::new(Lexer::new(&line));
        let program = parser.parse_program();

        if !parser.errors().is_empty() {
            writeln!(output, "Woops! Parser errors:")?;
            for error in parser.errors() {
                writeln!(output, "\t{error}")?;
            }
            continue;
        }

        match eval_program(&program, &env) {
            Ok(Some(value)) => writeln!(output, "{value}")?,
            Ok(None) => {},
            Err(error) => writeln!(output, "{error}")?,
        }
    }
}
