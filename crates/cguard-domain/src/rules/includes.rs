use crate::model::{NodeKind, SyntaxNode, SyntaxTree};
use crate::query::{child_by_field, ident_of, last_named_child, walk};
use std::collections::BTreeSet;

/// Header named by an `#include` directive, delimiters stripped.
///
/// `<stdio.h>` and `"stdio.h"` both yield `stdio.h`. Macro includes (`#include HEADER`) yield
/// nothing.
pub fn include_target<'s>(directive: &SyntaxNode, source: &'s [u8]) -> Option<&'s str> {
    let path = child_by_field(directive, "path").or_else(|| last_named_child(directive))?;
    let text = ident_of(path, source);
    match path.kind {
        NodeKind::SystemLibString => Some(text.trim_start_matches('<').trim_end_matches('>')),
        NodeKind::StringLiteral => Some(text.trim_matches('"')),
        _ => None,
    }
}

fn include_targets<'a, 's>(
    tree: &'a SyntaxTree,
    source: &'s [u8],
) -> impl Iterator<Item = &'s str> {
    walk(tree.root())
        .filter(|node| node.kind == NodeKind::PreprocInclude)
        .filter_map(move |node| include_target(node, source))
}

/// All missing headers are reported in one message.
pub fn run_required(
    tree: &SyntaxTree,
    source: &[u8],
    required: &BTreeSet<String>,
    out: &mut Vec<String>,
) {
    let mut missing: BTreeSet<&str> = required.iter().map(String::as_str).collect();
    for target in include_targets(tree, source) {
        missing.remove(target);
    }

    if !missing.is_empty() {
        out.push(format!(
            "Must include: {}",
            missing.into_iter().collect::<Vec<_>>().join(", ")
        ));
    }
}

/// One message per offending directive. Required headers are always allowed.
pub fn run_allowed(
    tree: &SyntaxTree,
    source: &[u8],
    allowed: &BTreeSet<String>,
    required: &BTreeSet<String>,
    out: &mut Vec<String>,
) {
    for target in include_targets(tree, source) {
        if !allowed.contains(target) && !required.contains(target) {
            out.push(format!("Including {target} is disallowed."));
        }
    }
}
