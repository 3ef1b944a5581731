use std::fs;

use alphadelta::{
    Context, Error,
    error::{LexError, RuntimeError, SyntaxError},
    get_output, parse, run,
    interpreter::value::core::Value,
};
use walkdir::WalkDir;

#[test]
fn script_fixtures_match_expected_output() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "adl"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected_path = path.with_extension("out");
        let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                                                             panic!("Failed to read {expected_path:?}: {e}")
                                                         });

        count += 1;
        match get_output(&source) {
            Ok(output) => assert_eq!(output, expected, "output of {path:?} differs"),
            Err(e) => panic!("Script {path:?} failed:\n{source}\nError: {e}"),
        }
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}

fn assert_output(src: &str, expected: &str) {
    match get_output(src) {
        Ok(output) => assert_eq!(output, expected, "script: {src}"),
        Err(e) => panic!("Script failed: {e}"),
    }
}

fn run_error(src: &str) -> Error {
    get_output(src).expect_err("Script succeeded but was expected to fail")
}

#[test]
fn array_indexing() {
    assert_output("arr = [1, 2, 3]; print(arr[1]);", "2\n");
}

#[test]
fn precedence_and_grouping() {
    assert_output("print(2 + 3 * 4);", "14\n");
    assert_output("print((2 + 3) * 4);", "20\n");
    assert_output("print(8 / 4 * 2);", "4\n");
    assert_output("print(1 - 2 + 3);", "2\n");
}

#[test]
fn strings_contribute_zero_to_arithmetic() {
    assert_output("s = \"x\"; print(s + 1);", "1\n");
    assert_output("s = \"5\"; print(s * 3);", "0\n");
    assert_output("a = [4]; print(a + 2);", "2\n");
}

#[test]
fn division_by_zero_is_not_an_error() {
    assert_output("print(1 / 0);", "inf\n");
    assert_output("print((0 - 2) / 0);", "-inf\n");

    let output = get_output("print(0 / 0);").unwrap();
    assert!(output == "nan\n" || output == "-nan\n", "unexpected NaN rendering {output:?}");
}

#[test]
fn escaped_quote_is_kept_verbatim() {
    assert_output(r#"print("a\"b");"#, "a\\\"b\n");
    assert_output(r#"print("tab\tstays");"#, "tab\\tstays\n");
}

#[test]
fn print_renders_arrays() {
    assert_output("print([1, \"two\", 3.5]);", "[1, \"two\", 3.5]\n");
    assert_output("print([]);", "[]\n");
}

#[test]
fn assignment_is_idempotent() {
    let once = {
        let mut context = Context::with_output(Vec::new());
        context.eval_program(&parse("x = 5;").unwrap()).unwrap();
        context.variables().clone()
    };
    let twice = {
        let mut context = Context::with_output(Vec::new());
        context.eval_program(&parse("x = 5; x = 5;").unwrap()).unwrap();
        context.variables().clone()
    };

    assert_eq!(once, twice);
    assert_eq!(once.get("x"), Some(&Value::Number(5.0)));
}

#[test]
fn reassignment_replaces_any_type() {
    assert_output("x = [1]; x = \"s\"; x = 3; print(x);", "3\n");
}

#[test]
fn arrays_are_shared_between_variables() {
    let mut context = Context::with_output(Vec::new());
    context.eval_program(&parse("a = [1, 2]; b = a;").unwrap()).unwrap();

    let (Some(Value::Array(a)), Some(Value::Array(b))) =
        (context.variables().get("a"), context.variables().get("b"))
    else {
        panic!("both variables should hold arrays");
    };
    assert!(std::rc::Rc::ptr_eq(a, b));
}

#[test]
fn undefined_variable_is_error() {
    let err = run_error("print(y);");
    assert!(matches!(err, Error::Runtime(RuntimeError::UndefinedVariable { ref name, line: 1 }) if name == "y"));
}

#[test]
fn out_of_bounds_aborts_before_printing() {
    let mut output = Vec::new();
    let err = run("arr = [1]; print(arr[0]); print(arr[5]); print(7);", &mut output).unwrap_err();

    assert!(matches!(err, Error::Runtime(RuntimeError::IndexOutOfBounds { index: 5, len: 1, .. })));
    assert_eq!(output, b"1\n");
}

#[test]
fn negative_index_is_out_of_bounds() {
    let err = run_error("arr = [1, 2]; print(arr[0 - 1]);");
    assert!(matches!(err, Error::Runtime(RuntimeError::IndexOutOfBounds { index: -1, .. })));
}

#[test]
fn indexing_non_array_is_error() {
    let err = run_error("n = 3; print(n[0]);");
    assert!(matches!(err, Error::Runtime(RuntimeError::NotAnArray { ref name, .. }) if name == "n"));

    let err = run_error("print(never[0]);");
    assert!(matches!(err, Error::Runtime(RuntimeError::NotAnArray { ref name, .. }) if name == "never"));
}

#[test]
fn syntax_error_prevents_any_output() {
    let mut output = Vec::new();
    let err = run("print(1);\nprint(2)", &mut output).unwrap_err();

    assert!(matches!(err, Error::Syntax(SyntaxError::UnexpectedToken { line: 2, .. })));
    assert!(output.is_empty());
}

#[test]
fn comparisons_are_not_expressible() {
    for src in ["print(1 < 2);", "print(1 == 1);", "x = 2 >= 1;", "print(> 1);"] {
        let err = run_error(src);
        assert!(matches!(err, Error::Syntax(SyntaxError::UnexpectedToken { .. })),
                "{src} gave {err:?}");
    }
}

#[test]
fn bare_identifier_statement_is_error() {
    let err = run_error("x = 1; x;");
    assert!(matches!(err, Error::Syntax(SyntaxError::InvalidAfterIdentifier { ref name, .. }) if name == "x"));

    let err = run_error("x + 1;");
    assert!(matches!(err, Error::Syntax(SyntaxError::InvalidAfterIdentifier { .. })));
}

#[test]
fn print_is_only_a_statement() {
    let err = run_error("print = 3;");
    assert!(matches!(err, Error::Syntax(SyntaxError::UnexpectedToken { .. })));

    let err = run_error("x = print;");
    assert!(matches!(err, Error::Runtime(RuntimeError::UndefinedVariable { ref name, .. }) if name == "print"));
}

#[test]
fn lexical_errors_are_reported() {
    assert!(matches!(run_error("print(\"open);"),
                     Error::Lex(LexError::UnterminatedString { line: 1 })));
    assert!(matches!(run_error("x = !1;"), Error::Lex(LexError::InvalidCharacter { .. })));
    assert!(matches!(run_error("x = 1 @ 2;"),
                     Error::Lex(LexError::UnknownCharacter { character: '@', .. })));
}

#[test]
fn errors_report_their_line() {
    let err = run_error("a = 1;\nb = 2;\nprint(c);");
    assert_eq!(err.line(), 3);
    assert_eq!(err.category(), "runtime");
    assert_eq!(err.to_string(), "Error on line 3: Undefined variable 'c'.");
}

#[test]
fn empty_program_does_nothing() {
    assert_output("", "");
    assert_output("  \n\t ", "");
}

#[test]
fn nested_arrays_print_recursively() {
    assert_output("print([[1, \"a\"], 2]);", "[[1, \"a\"], 2]\n");
    assert_output("m = [[1, 2], [3]]; row = m[1]; print(row[0]);", "3\n");
}

#[test]
fn non_expression_token_is_reported_before_later_lex_errors() {
    let err = run_error("print(> @);");

    assert!(matches!(err, Error::Syntax(SyntaxError::UnexpectedToken { .. })), "{err:?}");
    assert_eq!(err.to_string(), "Error on line 1: Expected an expression, found '>'.");
}

#[test]
fn missing_equals_names_the_identifier() {
    let err = run_error("\ncount 3;");

    assert_eq!(err.to_string(),
               "Error on line 2: Invalid syntax after identifier 'count', expected '=' but found number 3.");
}
