//! Hand-built syntax trees for unit tests.
//!
//! Byte ranges only need to be exact where a rule reads text (identifiers, include paths,
//! macro values); `at` locates those in the test source.

use crate::model::{SyntaxNode, SyntaxTree};
use crate::policy::{Constraint, Policy, RawPolicy};
use std::ops::Range;

/// Range of the first occurrence of `needle` in `src`.
pub fn at(src: &[u8], needle: &str) -> Range<usize> {
    at_nth(src, needle, 0)
}

/// Range of the `n`th (0-based) occurrence of `needle` in `src`.
pub fn at_nth(src: &[u8], needle: &str, n: usize) -> Range<usize> {
    let needle = needle.as_bytes();
    let start = src
        .windows(needle.len())
        .enumerate()
        .filter(|(_, w)| *w == needle)
        .map(|(i, _)| i)
        .nth(n)
        .unwrap_or_else(|| panic!("{:?} not found in test source", String::from_utf8_lossy(needle)));
    start..start + needle.len()
}

pub fn named(grammar_name: &str, range: Range<usize>) -> SyntaxNode {
    SyntaxNode::new(grammar_name, true, range)
}

pub fn token(grammar_name: &str, range: Range<usize>) -> SyntaxNode {
    SyntaxNode::new(grammar_name, false, range)
}

pub fn ident(range: Range<usize>) -> SyntaxNode {
    named("identifier", range)
}

pub fn compound(range: Range<usize>, children: Vec<SyntaxNode>) -> SyntaxNode {
    named("compound_statement", range).with_children(children)
}

pub fn statement(range: Range<usize>) -> SyntaxNode {
    named("expression_statement", range)
}

/// `<type> name() <body>`
pub fn function_definition(range: Range<usize>, name: Range<usize>, body: SyntaxNode) -> SyntaxNode {
    let params = name.end..name.end + 2;
    named("function_definition", range.clone()).with_children(vec![
        named("primitive_type", range.start..name.start).with_field("type"),
        named("function_declarator", name.start..params.end)
            .with_field("declarator")
            .with_children(vec![
                ident(name).with_field("declarator"),
                named("parameter_list", params).with_field("parameters"),
            ]),
        body.with_field("body"),
    ])
}

pub fn call(range: Range<usize>, callee: SyntaxNode) -> SyntaxNode {
    let args = callee.end..range.end;
    named("call_expression", range).with_children(vec![
        callee.with_field("function"),
        named("argument_list", args).with_field("arguments"),
    ])
}

pub fn tree(src: &[u8], children: Vec<SyntaxNode>) -> SyntaxTree {
    SyntaxTree::new(named("translation_unit", 0..src.len()).with_children(children))
}

pub fn disallow(constraints: &[Constraint]) -> Policy {
    Policy::from_raw(RawPolicy {
        disallow: Some(constraints.to_vec()),
        ..RawPolicy::default()
    })
    .expect("disallow-only policies are always valid")
}
