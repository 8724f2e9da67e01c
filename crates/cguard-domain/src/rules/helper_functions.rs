use crate::model::{NodeKind, SyntaxTree};
use crate::query::{function_name, walk};
use std::collections::BTreeSet;

pub const MESSAGE: &str = "Helper functions are disallowed.";

/// Every definition not named in `required` is a helper. With no `required` list at all, every
/// definition is.
pub fn run(
    tree: &SyntaxTree,
    source: &[u8],
    required: Option<&BTreeSet<String>>,
    out: &mut Vec<String>,
) {
    for node in walk(tree.root()) {
        if node.kind != NodeKind::FunctionDefinition {
            continue;
        }

        let name = function_name(node, source);
        let is_required = match (required, name) {
            (Some(required), Some(name)) => required.contains(name),
            _ => false,
        };
        if !is_required {
            out.push(MESSAGE.to_string());
        }
    }
}
