use std::{fs, io::Write, str};

use pretty_assertions::assert_eq;
use quill::{
    get_result,
    interpreter::{
        evaluator::core::{Config, Context, Scoping},
        value::Value,
    },
    parse,
    run,
    run_lines,
};
use walkdir::WalkDir;

const OUT_COMMENT: &str = "// out: ";
const IN_COMMENT: &str = "// in: ";

#[test]
fn script_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "ql"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        let expected = collect_comments(&source, OUT_COMMENT);
        let input = collect_comments(&source, IN_COMMENT);

        let mut got = Vec::new();
        if let Err(e) = run(&source, Config::default(), &mut input.as_bytes(), &mut got, false) {
            writeln!(&mut got, "{e}").expect("could not write to output");
        }
        let got = str::from_utf8(&got).expect("invalid UTF-8 in output");

        assert_eq!(expected, got, "unexpected output for {path:?}");
        count += 1;
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}

fn collect_comments(source: &str, marker: &str) -> String {
    let mut collected = String::new();

    for line in source.lines() {
        if let Some(idx) = line.find(marker) {
            collected += &line[idx + marker.len()..];
            collected += "\n";
        }
    }

    collected
}

fn output_of(src: &str, config: Config) -> Result<String, String> {
    let mut output = Vec::new();
    run(src, config, &mut std::io::empty(), &mut output, true).map_err(|e| e.to_string())?;
    Ok(String::from_utf8(output).expect("invalid UTF-8 in output"))
}

fn assert_success(src: &str) {
    if let Err(e) = get_result(src, false) {
        panic!("Script failed: {e}");
    }
}

fn assert_failure(src: &str) {
    if get_result(src, false).is_ok() {
        panic!("Script succeeded but was expected to fail")
    }
}

#[test]
fn assignment_and_basic_arithmetic() {
    assert_eq!(output_of("x = 5; x + 1;", Config::default()), Ok("6\n".to_string()));
    assert_eq!(output_of("2 + 3 * 4", Config::default()), Ok("14\n".to_string()));
    assert_eq!(output_of("(2 + 3) * 4", Config::default()), Ok("20\n".to_string()));
    assert_eq!(output_of("x = 9; y = x / 2; y", Config::default()), Ok("4.5\n".to_string()));
}

#[test]
fn final_value_is_returned() {
    let mut output = Vec::new();
    let value = run("\"ab\" + \"cd\";", Config::default(), &mut std::io::empty(), &mut output, false)
        .unwrap();

    assert_eq!(value, Value::from("abcd"));
    assert!(output.is_empty());
}

#[test]
fn statements_without_value_print_nothing() {
    assert_eq!(output_of("x = 1;", Config::default()), Ok(String::new()));
    assert_eq!(output_of("def f() { return 1; }", Config::default()), Ok(String::new()));
    assert_eq!(output_of("", Config::default()), Ok(String::new()));
}

#[test]
fn semicolons_and_comments() {
    assert_success("x = 1;; ; y = 2;");
    assert_success("if (true) { x = 1 } print 1; // trailing comment");
    assert_success("while (false) { } def f() { } print f();");
    assert_failure("x = 1 y = 2");
    assert_failure("print 1 print 2");
}

#[test]
fn comparisons_and_logic() {
    let cases = [("1 < 2", "true"),
                 ("2 <= 2", "true"),
                 ("3 > 4", "false"),
                 ("3 >= 4", "false"),
                 ("1 == 1", "true"),
                 ("1 != 1", "false"),
                 ("\"a\" < \"b\"", "true"),
                 ("true == true", "true"),
                 ("!false && true", "true"),
                 ("false || false", "false"),
                 ("0 / 0 == 0 / 0", "false"),
                 ("0 / 0 != 0 / 0", "true")];

    for (src, expected) in cases {
        assert_eq!(output_of(src, Config::default()), Ok(format!("{expected}\n")), "{src}");
    }
}

#[test]
fn type_errors() {
    assert_failure("1 + \"one\"");
    assert_failure("\"a\" - \"b\"");
    assert_failure("1 < \"2\"");
    assert_failure("1 == true");
    assert_failure("true < false");
    assert_failure("-\"a\"");
    assert_failure("!1");
    assert_failure("1 && true");
    assert_failure("while (0) { }");
}

#[test]
fn short_circuit_skips_right_side() {
    let src = "def loud() { print \"evaluated\"; return true; } false && loud(); true || loud();";

    assert_eq!(output_of(src, Config::default()), Ok("true\n".to_string()));
}

#[test]
fn early_return_skips_rest_of_body() {
    let src = "def f(a) { return a * 2; print \"unreachable\"; } f(5);";

    assert_eq!(output_of(src, Config::default()), Ok("10\n".to_string()));
}

#[test]
fn call_errors_do_not_run_the_body() {
    let arity = "def f(a) { print \"ran\"; } f(1, 2);";
    let unknown = "print \"before\"; g(1);";

    assert_eq!(output_of(arity, Config::default()),
               Err("Error on line 1: Function 'f' takes 1 argument(s) but 2 were given.".to_string()));
    assert_eq!(output_of(unknown, Config::default()),
               Err("Error on line 1: Unknown function 'g'.".to_string()));
}

#[test]
fn return_outside_function_is_error() {
    assert_failure("return 1;");
    assert_failure("if (true) { return 1; }");
}

#[test]
fn lexical_scoping_hides_caller_locals() {
    let src = "def outer() { hidden = 42; return inner(); }\ndef inner() { return hidden; }\nouter();";

    assert_eq!(output_of(src, Config::default()),
               Err("Error on line 2: Unknown variable 'hidden'.".to_string()));
}

#[test]
fn dynamic_scoping_exposes_caller_locals() {
    let src = "def outer() { hidden = 42; return inner(); }\ndef inner() { return hidden; }\nouter();";
    let config = Config { scoping: Scoping::Dynamic,
                          ..Config::default() };

    assert_eq!(output_of(src, config), Ok("42\n".to_string()));
}

#[test]
fn assignment_in_function_is_local() {
    let src = "x = 1; def f() { x = 2; return x; } print f(); x;";

    assert_eq!(output_of(src, Config::default()), Ok("2\n1\n".to_string()));
}

#[test]
fn recursion_within_depth_limit() {
    let src = "def fact(n) { if (n <= 1) { return 1; } return n * fact(n - 1); } fact(10);";

    assert_eq!(output_of(src, Config::default()), Ok("3628800\n".to_string()));
}

#[test]
fn runaway_recursion_hits_depth_limit() {
    let config = Config { max_call_depth: 16,
                          ..Config::default() };
    let src = "def down(n) { return down(n + 1); } down(0);";

    assert_eq!(output_of(src, config),
               Err("Error on line 1: Maximum call depth of 16 exceeded.".to_string()));
}

#[test]
fn scope_is_popped_after_failed_call() {
    let mut input = std::io::empty();
    let mut output = Vec::new();
    let mut context = Context::new(&mut input, &mut output);

    let definition = parse("def f(a) { b = a; return a + \"x\"; }").unwrap();
    context.evaluate(&definition).unwrap();

    let call = parse("f(1);").unwrap();
    assert!(context.evaluate(&call).is_err());

    assert_eq!(context.scope_stack.len(), 1);
    assert_eq!(context.get_variable("a"), None);
    assert_eq!(context.get_variable("b"), None);
}

#[test]
fn input_reads_numbers_and_strings() {
    let src = "n = input(\"n? \"); s = input(\"s? \"); print n * 2; print s + \"!\";";
    let mut input: &[u8] = b"21\nhello\n";
    let mut output = Vec::new();

    run(src, Config::default(), &mut input, &mut output, false).unwrap();

    assert_eq!(str::from_utf8(&output).unwrap(), "n? s? 42\nhello!\n");
}

#[test]
fn line_mode_echoes_each_value() {
    let src = "x = 2\nx * 21\n\ndef sq(n) { return n * n; }\nsq(x)\nprint \"done\"\n";
    let mut output = Vec::new();

    run_lines(src, Config::default(), &mut std::io::empty(), &mut output).unwrap();

    assert_eq!(str::from_utf8(&output).unwrap(), "42\n4\ndone\n");
}

#[test]
fn line_mode_reports_source_lines() {
    let mut output = Vec::new();

    let err = run_lines("x = 1\n\ny = z", Config::default(), &mut std::io::empty(), &mut output)
        .unwrap_err();

    assert_eq!(err.to_string(), "Error on line 3: Unknown variable 'z'.");
}

#[test]
fn deep_nesting_fails_instead_of_overflowing() {
    let grouped = format!("{}1{}", "(".repeat(400), ")".repeat(400));
    let sum = vec!["1"; 5000].join(" + ");

    for src in [grouped, sum] {
        let err = output_of(&src, Config::default()).unwrap_err();
        assert!(err.starts_with("Error on line 1: Nesting deeper than"), "{err}");
    }
}

#[test]
fn long_sums_within_limit_evaluate() {
    let sum = vec!["1"; 60].join(" + ");

    assert_eq!(output_of(&sum, Config::default()), Ok("60\n".to_string()));
}

#[test]
fn example_works() {
    let contents = fs::read_to_string("tests/example.ql").unwrap();
    assert_success(&contents);
}
