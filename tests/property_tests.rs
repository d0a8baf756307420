//! Property-based tests for the Krait frontend
//!
//! These tests use proptest to verify invariants across many randomly
//! generated inputs, catching edge cases that hand-written tests might miss.

use krait_syntax::ast::NodeKind;
use krait_syntax::lexer;
use krait_syntax::parser;
use krait_syntax::token::TokenKind;
use proptest::prelude::*;

// Strategy for generating valid Krait identifiers
fn ident_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]*".prop_filter("Not a keyword", |s| {
        !matches!(
            s.as_str(),
            "if" | "else"
                | "for"
                | "while"
                | "function"
                | "var"
                | "print"
                | "return"
                | "true"
                | "false"
                | "null"
        )
    })
}

// Strategy for decimal number literals with at most one dot
fn number_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[0-9]{1,10}",
        "[0-9]{1,8}\\.[0-9]{1,8}",
    ]
}

proptest! {
    /// Property: the token stream is total — any input lexes to a vector
    /// ending in exactly one Eof, and every span slices the source.
    #[test]
    fn lexing_is_total(source in "\\PC*") {
        let tokens = lexer::tokenize(&source);
        prop_assert!(!tokens.is_empty());
        prop_assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
        prop_assert_eq!(
            tokens.iter().filter(|t| t.kind == TokenKind::Eof).count(),
            1
        );
        for token in &tokens {
            // Must not panic and must lie on char boundaries.
            let _ = token.text(&source);
        }
    }

    /// Property: the parser never panics, whatever the input; it either
    /// yields a tree or a non-empty diagnostic list.
    #[test]
    fn parsing_is_total(source in "\\PC*") {
        match parser::parse(&source, "fuzz.kr") {
            Ok(_) => {}
            Err(diagnostics) => prop_assert!(!diagnostics.is_empty()),
        }
    }

    /// Property: a numeric literal round-trips through the parser with
    /// the exact value `f64::from_str` gives for its lexeme.
    #[test]
    fn number_literals_round_trip(lit in number_strategy()) {
        let source = format!("print {lit};");
        let root = parser::parse(&source, "fuzz.kr").expect("literal should parse");
        let NodeKind::Compound(children) = root.kind else {
            panic!("root should be a compound");
        };
        let NodeKind::Print(expr) = &children[0].kind else {
            panic!("expected print statement");
        };
        let expected: f64 = lit.parse().expect("strategy emits valid floats");
        prop_assert_eq!(&expr.kind, &NodeKind::Number(expected));
    }

    /// Property: generated assignments parse cleanly and keep the
    /// identifier on the left.
    #[test]
    fn assignments_to_identifiers_parse(
        name in ident_strategy(),
        value in number_strategy(),
    ) {
        let source = format!("{name} = {value};");
        let root = parser::parse(&source, "fuzz.kr").expect("assignment should parse");
        let NodeKind::Compound(children) = root.kind else {
            panic!("root should be a compound");
        };
        let NodeKind::Binary { left, .. } = &children[0].kind else {
            panic!("expected assignment");
        };
        prop_assert_eq!(&left.kind, &NodeKind::Ident(name));
    }

    /// Property: identifiers survive lexing as a single Ident token.
    #[test]
    fn identifiers_survive_lexing(ident in ident_strategy()) {
        let tokens = lexer::tokenize(&ident);
        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(tokens[0].kind, TokenKind::Ident);
        prop_assert_eq!(tokens[0].text(&ident), ident.as_str());
    }
}
