//! Property-based tests over randomly shaped syntax trees.
//!
//! The trees are not valid C; they only need to exercise the rules' traversal and the
//! relationships between overlapping constraints.

use crate::engine::evaluate;
use crate::model::{SyntaxNode, SyntaxTree};
use crate::policy::Constraint;
use crate::rules::{assignment, if_statements, loops, reassignment};
use crate::test_support::{disallow, tree};
use proptest::prelude::*;

const GRAMMAR_NAMES: [&str; 18] = [
    "function_definition",
    "compound_statement",
    "expression_statement",
    "if_statement",
    "else_clause",
    "for_statement",
    "while_statement",
    "do_statement",
    "init_declarator",
    "assignment_expression",
    "update_expression",
    "++",
    "--",
    "array_declarator",
    "goto_statement",
    "labeled_statement",
    "gnu_asm_expression",
    "preproc_function_def",
];

const FIELDS: [Option<&str>; 5] = [
    None,
    Some("body"),
    Some("consequence"),
    Some("alternative"),
    Some("declarator"),
];

fn arb_node() -> impl Strategy<Value = SyntaxNode> {
    let leaf = (
        prop::sample::select(GRAMMAR_NAMES.to_vec()),
        prop::sample::select(FIELDS.to_vec()),
    )
        .prop_map(|(name, field)| node(name, field, Vec::new()));

    leaf.prop_recursive(5, 96, 6, |inner| {
        (
            prop::sample::select(GRAMMAR_NAMES.to_vec()),
            prop::sample::select(FIELDS.to_vec()),
            prop::collection::vec(inner, 0..6),
        )
            .prop_map(|(name, field, children)| node(name, field, children))
    })
}

fn node(name: &str, field: Option<&'static str>, children: Vec<SyntaxNode>) -> SyntaxNode {
    let named = name.chars().all(|c| c.is_ascii_lowercase() || c == '_');
    let mut node = SyntaxNode::new(name, named, 0..0).with_children(children);
    if let Some(field) = field {
        node = node.with_field(field);
    }
    node
}

fn arb_tree() -> impl Strategy<Value = SyntaxTree> {
    prop::collection::vec(arb_node(), 0..8).prop_map(|children| tree(b"", children))
}

proptest! {
    #[test]
    fn evaluation_is_deterministic(tree in arb_tree()) {
        let policy = disallow(&Constraint::ALL);
        prop_assert_eq!(evaluate(&tree, b"", &policy), evaluate(&tree, b"", &policy));
    }

    #[test]
    fn fixed_messages_appear_at_most_once(tree in arb_tree()) {
        let violations = evaluate(&tree, b"", &disallow(&Constraint::ALL));
        prop_assert!(violations.len() <= Constraint::ALL.len());
    }

    #[test]
    fn reassignment_implies_assignment(tree in arb_tree()) {
        let reassigned = evaluate(&tree, b"", &disallow(&[Constraint::Reassignment]));
        let assigned = evaluate(&tree, b"", &disallow(&[Constraint::Assignment]));

        if reassigned.contains(reassignment::MESSAGE) {
            prop_assert!(assigned.contains(assignment::MESSAGE));
        }
    }

    #[test]
    fn loops_imply_if_statements(tree in arb_tree()) {
        let looped = evaluate(&tree, b"", &disallow(&[Constraint::Loops]));
        let branched = evaluate(&tree, b"", &disallow(&[Constraint::IfStatements]));

        if looped.contains(loops::MESSAGE) {
            prop_assert!(branched.contains(if_statements::MESSAGE));
        }
    }

    #[test]
    fn enabling_more_constraints_never_hides_a_message(tree in arb_tree()) {
        let some = evaluate(&tree, b"", &disallow(&[Constraint::Arrays, Constraint::Asm]));
        let all = evaluate(&tree, b"", &disallow(&Constraint::ALL));
        prop_assert!(some.is_subset(&all));
    }
}
