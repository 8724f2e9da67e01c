use crate::model::SyntaxTree;
use crate::query::walk;

pub const MESSAGE: &str = "Loops are disallowed.";

pub fn run(tree: &SyntaxTree, out: &mut Vec<String>) {
    for node in walk(tree.root()) {
        if node.kind.is_loop() {
            out.push(MESSAGE.to_string());
        }
    }
}
