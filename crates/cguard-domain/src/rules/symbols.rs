use crate::model::{NodeKind, SyntaxTree};
use crate::query::{ident_of, walk};
use std::collections::BTreeSet;

/// Lexical filter over identifier nodes: declarations, uses, macro and parameter names alike.
pub fn run(
    tree: &SyntaxTree,
    source: &[u8],
    forbidden: &BTreeSet<String>,
    out: &mut Vec<String>,
) {
    for node in walk(tree.root()) {
        if node.kind != NodeKind::Identifier {
            continue;
        }
        let symbol = ident_of(node, source);
        if forbidden.contains(symbol) {
            out.push(format!("`{symbol}` is disallowed."));
        }
    }
}
