//! Property-based tests for the parser.
//!
//! Programs are generated from a small grammar. For every generated
//! program:
//!
//! 1. **Parsing succeeds** and consumes every token up to `EOF`
//! 2. **Parsing is deterministic** over the same token sequence
//! 3. **Rendering never panics**

use std::rc::Rc;

use proptest::prelude::*;

use crate::{
    ast::printer::program_to_sexpr,
    lexer::{lexer::tokenize, tokens::RESERVED_LOOKUP},
};

use super::parser::parse;

const BINARY_OPERATORS: &[&str] = &[
    "+", "-", "*", "/", "<", "<=", ">", ">=", "==", "!=", "and", "or",
];

fn leaf() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z]{1,3}".prop_filter("keywords are not identifiers", |name| {
            !RESERVED_LOOKUP.contains_key(name.as_str())
        }),
        "[0-9]{1,3}(\\.[0-9]{1,2})?",
        Just("true".to_string()),
        Just("nil".to_string()),
        Just("\"text\"".to_string()),
    ]
}

/// Operands are parenthesised so keyword-led forms may appear anywhere.
fn expression() -> impl Strategy<Value = String> {
    leaf().prop_recursive(4, 48, 4, |inner| {
        prop_oneof![
            (
                inner.clone(),
                prop::sample::select(BINARY_OPERATORS),
                inner.clone()
            )
                .prop_map(|(left, op, right)| format!("({}) {} ({})", left, op, right)),
            inner.clone().prop_map(|operand| format!("!({})", operand)),
            (inner.clone(), prop::collection::vec(inner.clone(), 0..3))
                .prop_map(|(callee, args)| format!("({})({})", callee, args.join(", "))),
            prop::collection::vec(inner.clone(), 0..3)
                .prop_map(|body| format!("do {} end", body.join(" "))),
            (inner.clone(), inner.clone(), inner.clone()).prop_map(|(cond, then, other)| {
                format!("if ({}) then ({}) else ({}) end", cond, then, other)
            }),
            inner
                .clone()
                .prop_map(|body| format!("fn |a, b| ({}) end", body)),
            inner.prop_map(|value| format!("let v = ({})", value)),
        ]
    })
}

fn program() -> impl Strategy<Value = String> {
    prop::collection::vec(expression(), 0..4).prop_map(|parts| parts.join("\n"))
}

proptest! {
    #[test]
    fn generated_programs_parse_completely(source in program()) {
        let tokens = tokenize(&source, None).unwrap();
        let (parser, result) = parse(tokens, Rc::new("gen".to_string()));

        prop_assert!(result.is_ok(), "{:?} for {}", result, source);
        prop_assert_eq!(parser.get_cursor(), parser.token_count() - 1);
    }

    #[test]
    fn parsing_is_deterministic(source in program()) {
        let tokens = tokenize(&source, None).unwrap();

        let (_, first) = parse(tokens.clone(), Rc::new("gen".to_string()));
        let (_, second) = parse(tokens, Rc::new("gen".to_string()));

        prop_assert_eq!(&first, &second);

        let program = first.unwrap();
        let _ = program_to_sexpr(&program, &source);
    }
}
