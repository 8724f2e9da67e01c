use crate::model::{NodeKind, SyntaxTree};
use crate::query::{function_name, walk};

pub const MESSAGE: &str = "Including a `main` function is disallowed.";

pub fn run(tree: &SyntaxTree, source: &[u8], out: &mut Vec<String>) {
    for node in walk(tree.root()) {
        if node.kind == NodeKind::FunctionDefinition && function_name(node, source) == Some("main")
        {
            out.push(MESSAGE.to_string());
        }
    }
}
