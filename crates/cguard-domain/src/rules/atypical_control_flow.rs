use crate::model::{NodeKind, SyntaxTree};
use crate::query::{callee_name, walk};

pub const MESSAGE: &str = "`goto`, labels, and `longjmp` are disallowed.";

/// Matches statement and call shapes only; a variable named `goto` or `longjmp` is not flagged.
pub fn run(tree: &SyntaxTree, source: &[u8], out: &mut Vec<String>) {
    for node in walk(tree.root()) {
        let flagged = match node.kind {
            NodeKind::GotoStatement | NodeKind::LabeledStatement => true,
            NodeKind::CallExpression => callee_name(node, source) == Some("longjmp"),
            _ => false,
        };
        if flagged {
            out.push(MESSAGE.to_string());
        }
    }
}
