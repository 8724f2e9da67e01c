use crate::model::SyntaxTree;
use crate::query::walk;

pub const MESSAGE: &str = "Reassignment, incrementing, and decrementing are disallowed.";

pub fn run(tree: &SyntaxTree, out: &mut Vec<String>) {
    for node in walk(tree.root()) {
        if node.kind.is_mutation() {
            out.push(MESSAGE.to_string());
        }
    }
}
