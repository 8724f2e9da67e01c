use crate::model::{NodeKind, SyntaxTree};
use crate::query::{callee_name, walk};

pub const MESSAGE: &str = "Printing is disallowed.";

const PRINT_FUNCTIONS: [&str; 6] = ["printf", "vprintf", "fprintf", "vfprintf", "fputc", "putc"];

pub fn run(tree: &SyntaxTree, source: &[u8], out: &mut Vec<String>) {
    for node in walk(tree.root()) {
        if node.kind != NodeKind::CallExpression {
            continue;
        }
        if callee_name(node, source).is_some_and(|name| PRINT_FUNCTIONS.contains(&name)) {
            out.push(MESSAGE.to_string());
        }
    }
}
