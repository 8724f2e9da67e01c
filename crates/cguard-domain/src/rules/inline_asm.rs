use crate::model::{NodeKind, SyntaxTree};
use crate::query::walk;

pub const MESSAGE: &str = "Inline assembly is disallowed.";

/// `asm`, `__asm__` and `__asm` all parse to the same expression node.
pub fn run(tree: &SyntaxTree, out: &mut Vec<String>) {
    for node in walk(tree.root()) {
        if node.kind == NodeKind::GnuAsmExpression {
            out.push(MESSAGE.to_string());
        }
    }
}
