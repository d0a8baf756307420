//! Integration tests for the Krait frontend
//!
//! End-to-end programs through the public `krait_syntax` API, checking
//! whole-tree shapes and the exact diagnostic lines a user would see.

use krait_syntax::ast::{BinaryOp, Node, NodeKind};
use krait_syntax::parser;

fn parse(source: &str) -> Result<Node, Vec<String>> {
    parser::parse(source, "main.kr")
        .map_err(|diagnostics| diagnostics.iter().map(ToString::to_string).collect())
}

fn top_level(source: &str) -> Vec<Node> {
    let root = parse(source).expect("program should parse cleanly");
    match root.kind {
        NodeKind::Compound(children) => children,
        other => panic!("root should be a compound, got {other:?}"),
    }
}

#[test]
fn test_multi_statement_program() {
    let statements = top_level(
        "print \"start\";\n\
         total = 1 + 2 * 3;\n\
         if (total == 7) print total; else print 0;\n\
         { total++; f(total, 1); }\n",
    );
    assert_eq!(statements.len(), 4);
    assert!(matches!(statements[0].kind, NodeKind::Print(_)));
    assert!(matches!(
        statements[1].kind,
        NodeKind::Binary {
            op: BinaryOp::Assign,
            ..
        }
    ));
    assert!(matches!(statements[2].kind, NodeKind::If { .. }));
    let NodeKind::Compound(block) = &statements[3].kind else {
        panic!("expected block");
    };
    assert_eq!(block.len(), 2);
}

#[test]
fn test_expression_kitchen_sink() {
    // Every operator family in one statement; just has to build cleanly.
    let statements =
        top_level("x = a && b || ~c & d | e == f != g < h << i >= j >> k % l - -m / n;");
    assert_eq!(statements.len(), 1);
}

#[test]
fn test_diagnostic_lines_match_wire_format() {
    let errors = parse("good = 1;\nbad = ;\n").unwrap_err();
    assert_eq!(
        errors,
        vec!["ParserError at main.kr:2:7 unexpected ';', expected an expression.".to_owned()]
    );
}

#[test]
fn test_diagnostics_keep_source_order_across_lines() {
    let errors = parse("1 = 2;\nvar x;\n\"oops\n").unwrap_err();
    assert_eq!(
        errors,
        vec![
            "ParserError at main.kr:1:1 lvalue cannot be a constant.".to_owned(),
            "ParserError at main.kr:2:1 'var' declarations are not implemented.".to_owned(),
            "ParserError at main.kr:3:1 non-terminated string".to_owned(),
        ]
    );
}

#[test]
fn test_error_recovery_spans_whole_program() {
    // Errors early on must not hide statements that follow them.
    let errors = parse("@;\nprint 1;\n@;\n").unwrap_err();
    assert_eq!(errors.len(), 2);
    assert!(errors[0].contains("main.kr:1:1"));
    assert!(errors[1].contains("main.kr:3:1"));
}

#[test]
fn test_clean_parse_of_nested_control_flow() {
    let statements = top_level(
        "if (a > 0) {\n\
         \tif (b);\n\
         \tprint a ? \"pos\" : \"neg\";\n\
         } else {\n\
         \tcount--;\n\
         }\n",
    );
    assert_eq!(statements.len(), 1);
    let NodeKind::If {
        condition,
        then,
        otherwise,
    } = &statements[0].kind
    else {
        panic!("expected if");
    };
    assert!(condition.is_some());
    assert!(matches!(
        then.as_deref().map(|n| &n.kind),
        Some(NodeKind::Compound(_))
    ));
    assert!(matches!(
        otherwise.as_deref().map(|n| &n.kind),
        Some(NodeKind::Compound(_))
    ));
}
