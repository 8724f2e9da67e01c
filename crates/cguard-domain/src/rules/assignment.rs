use crate::model::{NodeKind, SyntaxTree};
use crate::query::walk;

pub const MESSAGE: &str = "Assignment statements, incrementing, and decrementing are disallowed.";

/// Initializers count too: `int a = 1;` is rejected.
pub fn run(tree: &SyntaxTree, out: &mut Vec<String>) {
    for node in walk(tree.root()) {
        if node.kind == NodeKind::InitDeclarator || node.kind.is_mutation() {
            out.push(MESSAGE.to_string());
        }
    }
}
