use crate::model::{NodeKind, SyntaxTree};
use crate::query::walk;

pub const MESSAGE: &str = "`if` statements and loops are disallowed.";

/// Loops are conditional control flow, so they are rejected here as well.
pub fn run(tree: &SyntaxTree, out: &mut Vec<String>) {
    for node in walk(tree.root()) {
        if node.kind == NodeKind::IfStatement || node.kind.is_loop() {
            out.push(MESSAGE.to_string());
        }
    }
}
