use std::fs;

use minnow::{
    get_result,
    interpreter::{lexer::Lexer, parser::core::Parser, value::core::Value},
};

fn eval(src: &str) -> Option<Value> {
    match get_result(src, false) {
        Ok(value) => value,
        Err(e) => panic!("Script failed: {src}\n{e}"),
    }
}

fn eval_value(src: &str) -> Value {
    eval(src).unwrap_or_else(|| panic!("Script produced no value: {src}"))
}

fn assert_integer(src: &str, expected: i64) {
    assert_eq!(eval_value(src), Value::Integer(expected), "source: {src}");
}

fn assert_bool(src: &str, expected: bool) {
    assert_eq!(eval_value(src), Value::Bool(expected), "source: {src}");
}

fn assert_str(src: &str, expected: &str) {
    assert_eq!(eval_value(src), Value::Str(expected.to_string()), "source: {src}");
}

fn assert_null(src: &str) {
    assert_eq!(eval_value(src), Value::Null, "source: {src}");
}

fn assert_failure_with(src: &str, message: &str) {
    match get_result(src, false) {
        Ok(_) => panic!("Script succeeded but was expected to fail: {src}"),
        Err(e) => {
            let text = e.to_string();
            assert!(text.contains(message),
                    "error '{text}' does not mention '{message}' for: {src}");
        },
    }
}

fn assert_rendering(src: &str, expected: &str) {
    let mut parser = Parser::new(Lexer::new(src));
    let program = parser.parse_program();

    assert!(parser.errors().is_empty(),
            "parse errors for {src}: {:?}",
            parser.errors());
    assert_eq!(program.to_string(), expected);
}

#[test]
fn integer_arithmetic() {
    assert_integer("5;", 5);
    assert_integer("1 + 2;", 3);
    assert_integer("7 * 9;", 63);
    assert_integer("8 - 5;", 3);
    assert_integer("10 / 2;", 5);
    assert_integer("5 * 2 + 10;", 20);
    assert_integer("5 + 2 * 10;", 25);
    assert_integer("(5 + 5) * 2;", 20);
    assert_integer("-50 + 100 + -50;", 0);
}

#[test]
fn division_truncates_toward_zero() {
    assert_integer("7 / 2;", 3);
    assert_integer("-7 / 2;", -3);
    assert_integer("7 / -2;", -3);
}

#[test]
fn integer_comparisons() {
    assert_bool("2 < 3;", true);
    assert_bool("3 > 2;", true);
    assert_bool("2 > 3;", false);
    assert_bool("2 == 2;", true);
    assert_bool("2 != 3;", true);
    assert_bool("2 != 2;", false);
}

#[test]
fn unary_operators() {
    assert_integer("-5;", -5);
    assert_integer("--5;", 5);
    assert_bool("!true;", false);
    assert_bool("!false;", true);
    assert_bool("!!true;", true);
    assert_bool("!0;", false);
    assert_bool("!5;", false);
}

#[test]
fn operator_precedence_rendering() {
    assert_rendering("1 + 2 + 3;", "((1+2)+3)");
    assert_rendering("1 + 2 * 3;", "(1+(2*3))");
    assert_rendering("-a * b;", "((-a)*b)");
    assert_rendering("!-a;", "(!(-a))");
    assert_rendering("a + b / c;", "(a+(b/c))");
    assert_rendering("3 + 4 * 5 == 3 * 1 + 4 * 5;", "((3+(4*5))==((3*1)+(4*5)))");
    assert_rendering("1 < 2 == true;", "((1<2)==true)");
    assert_rendering("(5 + 5) * 2;", "((5+5)*2)");
    assert_rendering("a + add(b * c) + c;", "((a+add((b*c)))+c)");
    assert_rendering("a * [1, 2, 3, 4][b * c] * d;", "((a*([1, 2, 3, 4][(b*c)]))*d)");
}

#[test]
fn statement_rendering() {
    assert_rendering("let x = 5;", "let x = 5;");
    assert_rendering("return x;", "return x;");
    assert_rendering("let y = add(1, 2);", "let y = add(1, 2);");
}

#[test]
fn let_bindings_and_shadowing() {
    assert_integer("let x = 5; x;", 5);
    assert_integer("let x = 5; let y = x; y;", 5);
    assert_integer("let a = 5; let a = a + 1; a;", 6);
}

#[test]
fn conditionals_and_truthiness() {
    assert_integer("if (true) { 10 };", 10);
    assert_integer("if (1 < 2) { 10 } else { 20 };", 10);
    assert_integer("if (1 > 2) { 10 } else { 20 };", 20);
    // Only false and null are falsy, so zero takes the consequence branch.
    assert_integer("if (0) { 10 };", 10);
    assert_null("if (false) { 10 };");
    assert_null("if (1 > 2) { 10 };");
}

#[test]
fn return_statements() {
    assert_integer("return 10;", 10);
    assert_integer("9; return 2 * 5; 9;", 10);
    assert_integer("if (10 > 1) { if (10 > 1) { return 10; } return 1; };", 10);
}

#[test]
fn functions_and_calls() {
    assert_integer("let identity = fn(x) { x; }; identity(5);", 5);
    assert_integer("let identity = fn(x) { return x; }; identity(5);", 5);
    assert_integer("let double = fn(x) { x * 2; }; double(5);", 10);
    assert_integer("let add = fn(a, b) { a + b; }; add(5, add(5, 5));", 15);
    assert_integer("fn(x) { x; }(5);", 5);
}

#[test]
fn closures_capture_the_defining_scope() {
    assert_integer("let newAdder = fn(x) { fn(y) { x + y }; }; let addTwo = newAdder(2); addTwo(3);",
                   5);
}

#[test]
fn closures_observe_later_bindings_in_the_captured_scope() {
    assert_integer("let a = 1; let f = fn() { a }; let a = 2; f();", 2);
}

#[test]
fn higher_order_functions() {
    assert_integer("let add = fn(a, b) { a + b }; let apply = fn(f, x, y) { f(x, y) }; apply(add, 2, 3);",
                   5);
}

#[test]
fn recursion() {
    assert_integer("let fact = fn(n) { if (n < 2) { 1 } else { n * fact(n - 1) } }; fact(5);",
                   120);
}

#[test]
fn strings() {
    assert_str(r#""hello";"#, "hello");
    assert_str(r#""Hello" + " " + "World!";"#, "Hello World!");
    assert_bool(r#""a" == "a";"#, true);
    assert_bool(r#""a" == "b";"#, false);
    assert_bool(r#""a" != "b";"#, true);
}

#[test]
fn unterminated_string_runs_to_end_of_input() {
    assert_str("\"hello", "hello");
}

#[test]
fn arrays_and_indexing() {
    assert_eq!(eval_value("[1, 2 * 2, 3 + 3];"),
               Value::from(vec![Value::Integer(1), Value::Integer(4), Value::Integer(6)]));
    assert_integer("let a = [1, 2, 3]; a[0];", 1);
    assert_integer("let a = [1, 2, 3]; a[1 + 1];", 3);
    assert_integer("[1, 2, 3][0] + [4, 5][1];", 6);
}

#[test]
fn index_out_of_range_is_null() {
    assert_null("[1, 2, 3][3];");
    assert_null("[1, 2, 3][-1];");
    assert_null("[][0];");
}

#[test]
fn builtin_len() {
    assert_integer(r#"len("");"#, 0);
    assert_integer(r#"len("four");"#, 4);
    assert_integer(r#"len("hello world");"#, 11);
    assert_failure_with("len(1);", "Argument to 'len' not supported, got INTEGER");
    assert_failure_with(r#"len("one", "two");"#, "Wrong number of arguments: expected 1, got 2");
}

#[test]
fn user_bindings_shadow_builtins() {
    assert_integer(r#"let len = fn(x) { 42 }; len("four");"#, 42);
}

#[test]
fn type_errors() {
    assert_failure_with("5 + true;", "Type mismatch: INTEGER + BOOLEAN");
    assert_failure_with("5 + true; 5;", "Type mismatch: INTEGER + BOOLEAN");
    assert_failure_with("-true;", "Unknown operator: -BOOLEAN");
    assert_failure_with("true + false;", "Unknown operator: BOOLEAN + BOOLEAN");
    assert_failure_with("true == true;", "Unknown operator: BOOLEAN == BOOLEAN");
    assert_failure_with(r#""a" - "b";"#, "Unknown operator: STRING - STRING");
}

#[test]
fn inequality_falls_back_to_value_comparison() {
    assert_bool("true != false;", true);
    assert_bool("true != true;", false);
    assert_bool("1 != true;", true);
}

#[test]
fn unknown_identifier_is_error() {
    assert_failure_with("foobar;", "Identifier not found: foobar");
    assert_failure_with("len(foobar);", "Identifier not found: foobar");
}

#[test]
fn calling_a_non_function_is_error() {
    assert_failure_with("5(1);", "Not a function: INTEGER");
    assert_failure_with(r#"let x = "a"; x();"#, "Not a function: STRING");
}

#[test]
fn wrong_function_arity_is_error() {
    assert_failure_with("let f = fn(x, y) { x + y }; f(1);",
                        "Wrong number of arguments: expected 2, got 1");
    assert_failure_with("let f = fn() { 1 }; f(1);",
                        "Wrong number of arguments: expected 0, got 1");
}

#[test]
fn division_by_zero_is_error() {
    assert_failure_with("1 / 0;", "Division by zero");
}

#[test]
fn arithmetic_overflow_is_error() {
    assert_failure_with("9223372036854775807 + 1;", "overflow");
    assert_failure_with("-9223372036854775807 - 2;", "overflow");
}

#[test]
fn indexing_a_non_array_is_error() {
    assert_failure_with("5[0];", "Index operator not supported: INTEGER");
    assert_failure_with(r#""abc"[0];"#, "Index operator not supported: STRING");
}

#[test]
fn missing_value_in_value_position_is_error() {
    assert_failure_with("let f = fn() { let x = 1; }; f() + 1;", "Value missing");
}

#[test]
fn let_without_trailing_value_produces_none() {
    assert_eq!(eval("let x = 5;"), None);
}

#[test]
fn parse_errors_accumulate() {
    let mut parser = Parser::new(Lexer::new("let x 5; let = 10; let 838383;"));
    parser.parse_program();

    assert!(parser.errors().len() >= 3, "errors: {:?}", parser.errors());
}

#[test]
fn oversized_integer_literal_is_error() {
    assert_failure_with("9223372036854775808;", "Illegal token");
}

#[test]
fn unrecognized_input_is_error() {
    assert_failure_with("let x = @;", "Illegal token '@'");
}

#[test]
fn example_script_file() {
    let script = fs::read_to_string("tests/example.mnw").expect("missing file");
    assert_eq!(eval_value(&script), Value::Integer(39));
}

#[test]
fn repl_keeps_bindings_across_lines() {
    let input = b"let x = 10;\nlet double = fn(n) { n * 2 };\ndouble(x) + 1;\n";
    let mut output = Vec::new();

    minnow::repl::start(&mut &input[..], &mut output).unwrap();

    let output = String::from_utf8(output).unwrap();
    assert!(output.contains(">> "));
    assert!(output.contains("21"));
}

#[test]
fn repl_reports_parse_errors_and_continues() {
    let input = b"let x 5;\n1 + 2;\n";
    let mut output = Vec::new();

    minnow::repl::start(&mut &input[..], &mut output).unwrap();

    let output = String::from_utf8(output).unwrap();
    assert!(output.contains("Woops! Parser errors:"));
    assert!(output.contains("3"));
}

#[test]
fn repl_reports_runtime_errors_and_continues() {
    let input = b"foobar;\nlet x = 3; x;\n";
    let mut output = Vec::new();

    minnow::repl::start(&mut &input[..], &mut output).unwrap();

    let output = String::from_utf8(output).unwrap();
    assert!(output.contains("Identifier not found: foobar"));
    assert!(output.contains("3"));
}
