use crate::model::{NodeKind, SyntaxTree};
use crate::query::walk;

pub const MESSAGE: &str = "Arrays are disallowed.";

/// Only the declarator shape matters: `int *p = {1, 2};` has no array declarator and passes.
pub fn run(tree: &SyntaxTree, out: &mut Vec<String>) {
    for node in walk(tree.root()) {
        if node.kind == NodeKind::ArrayDeclarator {
            out.push(MESSAGE.to_string());
        }
    }
}
