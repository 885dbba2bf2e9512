use pretty_assertions::assert_eq;
use quill::{
    ast::{BinaryOperator, CompareOperator, FunctionDef, LogicOperator, Node, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::{Token, tokenize},
        parser::core::{MAX_NESTING_DEPTH, parse_program},
    },
    parse,
};

fn num(value: f64, line: usize) -> Box<Node> {
    Box::new(Node::NumberLiteral { value, line })
}

fn var(name: &str, line: usize) -> Box<Node> {
    Box::new(Node::Variable { name: name.to_string(),
                              line })
}

fn single(src: &str) -> Node {
    let mut program = parse(src).unwrap_or_else(|e| panic!("{src:?} failed to parse: {e}"));
    assert_eq!(program.len(), 1, "{src:?}");
    program.remove(0)
}

#[test]
fn parsing_is_deterministic() {
    let tokens = tokenize("def f(a) { if (a > 1) { return a; } elif (a == 0) { print \"zero\"; } }\n\
                           x = f(2) + -3 * (4 - 1); while (x < 10) { x = x + 1; }")
        .unwrap();

    assert_eq!(parse_program(&tokens), parse_program(&tokens));
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    let expected = Node::BinaryOp { left:  num(2.0, 1),
                                    op:    BinaryOperator::Add,
                                    right: Box::new(Node::BinaryOp { left:  num(3.0, 1),
                                                                     op:    BinaryOperator::Mul,
                                                                     right: num(4.0, 1),
                                                                     line:  1, }),
                                    line:  1, };

    assert_eq!(single("2 + 3 * 4"), expected);
}

#[test]
fn grouping_overrides_precedence() {
    let expected = Node::BinaryOp { left:  Box::new(Node::BinaryOp { left:  num(2.0, 1),
                                                                     op:    BinaryOperator::Add,
                                                                     right: num(3.0, 1),
                                                                     line:  1, }),
                                    op:    BinaryOperator::Mul,
                                    right: num(4.0, 1),
                                    line:  1, };

    assert_eq!(single("(2 + 3) * 4"), expected);
}

#[test]
fn binary_operators_associate_left() {
    let expected = Node::BinaryOp { left:  Box::new(Node::BinaryOp { left:  num(8.0, 1),
                                                                     op:    BinaryOperator::Sub,
                                                                     right: num(4.0, 1),
                                                                     line:  1, }),
                                    op:    BinaryOperator::Sub,
                                    right: num(2.0, 1),
                                    line:  1, };

    assert_eq!(single("8 - 4 - 2"), expected);
}

#[test]
fn logic_is_lowest_and_comparison_binds_tighter() {
    let expected =
        Node::LogicOp { left:  Box::new(Node::CompareOp { left:  var("a", 1),
                                                          op:    CompareOperator::Less,
                                                          right: num(1.0, 1),
                                                          line:  1, }),
                        op:    LogicOperator::Or,
                        right: Box::new(Node::CompareOp { left:  var("b", 1),
                                                          op:    CompareOperator::Equal,
                                                          right: num(2.0, 1),
                                                          line:  1, }),
                        line:  1, };

    assert_eq!(single("a < 1 || b == 2"), expected);
}

#[test]
fn unary_operators_nest_to_the_right() {
    let expected = Node::UnaryOp { op:      UnaryOperator::Not,
                                   operand: Box::new(Node::UnaryOp { op:      UnaryOperator::Negate,
                                                                     operand: var("x", 1),
                                                                     line:    1, }),
                                   line:    1, };

    assert_eq!(single("!-x"), expected);
}

#[test]
fn assignment_is_a_binary_op_on_a_variable() {
    let expected = Node::BinaryOp { left:  var("x", 1),
                                    op:    BinaryOperator::Assign,
                                    right: num(5.0, 1),
                                    line:  1, };

    assert_eq!(single("x = 5;"), expected);
}

#[test]
fn assignment_is_not_an_expression() {
    assert!(parse("x = y = 1;").is_err());
    assert!(parse("print x = 1;").is_err());
    assert!(parse("(x) = 1;").is_err());
}

#[test]
fn elif_chains_nest_in_else_branch() {
    let Node::If { else_branch: Some(branch),
                   .. } = single("if (a) { print 1; } elif (b) { print 2; } else { print 3; }")
    else {
        panic!("expected an if with an else branch");
    };

    let Node::If { else_branch: Some(last),
                   .. } = *branch
    else {
        panic!("expected elif to produce a nested if");
    };

    assert!(matches!(*last, Node::Block { .. }));
}

#[test]
fn else_if_and_elif_are_equivalent() {
    let elif = single("if (a) { x = 1; } elif (b) { x = 2; }");
    let else_if = single("if (a) { x = 1; } else if (b) { x = 2; }");

    assert_eq!(elif, else_if);
}

#[test]
fn function_definition_and_call() {
    let program = parse("def add(a, b) {\n    return a + b;\n}\nadd(1, 2);").unwrap();

    let Node::Function(FunctionDef { name, params, body, line }) = &program[0] else {
        panic!("expected a function declaration");
    };
    assert_eq!(name, "add");
    assert_eq!(params, &["a".to_string(), "b".to_string()]);
    assert_eq!(*line, 1);
    assert_eq!(body.line_number(), Some(2));

    assert_eq!(program[1],
               Node::Call { name:      "add".to_string(),
                            arguments: vec![*num(1.0, 4), *num(2.0, 4)],
                            line:      4, });
}

#[test]
fn empty_block_has_no_line() {
    let Node::While { body, .. } = single("while (false) { }") else {
        panic!("expected a while loop");
    };

    assert_eq!(*body,
               Node::Block { statements: vec![],
                             line:       None, });
}

#[test]
fn input_prompt_is_optional() {
    assert_eq!(single("input(\"name? \")"),
               Node::Input { prompt: "name? ".to_string(),
                             line:   1, });
    assert_eq!(single("input()"),
               Node::Input { prompt: String::new(),
                             line:   1, });
    assert!(parse("input(1)").is_err());
}

#[test]
fn syntax_errors_report_line_and_tokens() {
    assert_eq!(parse("x = 1;\ny = ;"),
               Err(ParseError::UnexpectedToken { expected: "an expression".to_string(),
                                                 found:    "';'".to_string(),
                                                 line:     2, }));
    assert_eq!(parse("print 1\nprint 2"),
               Err(ParseError::UnexpectedToken { expected: "';'".to_string(),
                                                 found:    "'print'".to_string(),
                                                 line:     2, }));
    assert_eq!(parse("if (true) { print 1;"),
               Err(ParseError::UnexpectedToken { expected: "'}'".to_string(),
                                                 found:    "end of input".to_string(),
                                                 line:     1, }));
    assert_eq!(parse("}"),
               Err(ParseError::UnexpectedToken { expected: "end of input".to_string(),
                                                 found:    "'}'".to_string(),
                                                 line:     1, }));
}

#[test]
fn lexical_errors() {
    assert_eq!(parse("x = 1;\ny = @;"),
               Err(ParseError::InvalidCharacter { text: "@".to_string(),
                                                  line: 2, }));
    assert_eq!(parse("print \"open"), Err(ParseError::UnterminatedString { line: 1 }));
}

#[test]
fn error_messages_name_the_line() {
    let err = parse("x = 1;\n\nprint (1;").unwrap_err();

    assert_eq!(err.line(), 3);
    assert_eq!(err.to_string(), "Error on line 3: Expected ')', found ';'.");
}

#[test]
fn deep_parentheses_are_rejected() {
    let src = format!("{}1{}", "(".repeat(400), ")".repeat(400));

    assert_eq!(parse(&src),
               Err(ParseError::NestingTooDeep { limit: MAX_NESTING_DEPTH,
                                                line:  1, }));
}

#[test]
fn long_operator_chains_are_rejected() {
    let sum = vec!["1"; 1000].join(" + ");
    let conjunction = vec!["true"; 1000].join(" && ");
    let negations = format!("{}x", "-".repeat(1000));

    for src in [sum, conjunction, negations] {
        assert!(matches!(parse(&src), Err(ParseError::NestingTooDeep { .. })));
    }
}

#[test]
fn deep_calls_and_blocks_are_rejected() {
    let calls = format!("{}1{}", "f(".repeat(400), ")".repeat(400));
    let blocks = format!("{}{}", "if (true) { ".repeat(400), "}".repeat(400));
    let elifs = format!("if (false) {{ }}{}", " elif (false) { }".repeat(400));

    for src in [calls, blocks, elifs] {
        assert!(matches!(parse(&src), Err(ParseError::NestingTooDeep { .. })));
    }
}

#[test]
fn nesting_within_limit_parses() {
    let depth = MAX_NESTING_DEPTH - 1;
    let grouped = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    let sum = vec!["1"; depth].join(" + ");

    assert!(parse(&grouped).is_ok());
    assert!(parse(&sum).is_ok());
}

#[test]
fn nesting_error_names_the_line() {
    let src = format!("x = 1;\ny = {}1{};", "(".repeat(100), ")".repeat(100));

    let err = parse(&src).unwrap_err();

    assert_eq!(err.to_string(),
               format!("Error on line 2: Nesting deeper than {MAX_NESTING_DEPTH} levels."));
}

#[test]
fn multi_line_string_keeps_its_opening_line() {
    let tokens = tokenize("x = \"a\nb\";\ny").unwrap();

    assert_eq!(tokens[2], (Token::Str("a\nb".to_string()), 1));
    assert_eq!(tokens[3], (Token::Semicolon, 2));
    assert_eq!(tokens[4], (Token::Identifier("y".to_string()), 3));
}
