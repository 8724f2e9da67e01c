use crate::model::{NodeKind, SyntaxTree};
use crate::query::{function_name, walk};
use std::collections::BTreeSet;

/// Reports every missing name in a single message. Only names are compared, never signatures.
pub fn run(
    tree: &SyntaxTree,
    source: &[u8],
    required: &BTreeSet<String>,
    out: &mut Vec<String>,
) {
    let mut missing: BTreeSet<&str> = required.iter().map(String::as_str).collect();

    for node in walk(tree.root()) {
        if node.kind != NodeKind::FunctionDefinition {
            continue;
        }
        if let Some(name) = function_name(node, source) {
            missing.remove(name);
        }
    }

    if !missing.is_empty() {
        out.push(format!(
            "Must define: {}",
            missing.into_iter().collect::<Vec<_>>().join(", ")
        ));
    }
}
