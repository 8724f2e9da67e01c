use crate::model::{NodeKind, SyntaxNode, SyntaxTree};
use crate::query::{callee_name, function_name};

pub const MESSAGE: &str = "Direct recursion is not allowed.";

/// Flags calls to the innermost enclosing function. Mutual recursion is not tracked.
pub fn run(tree: &SyntaxTree, source: &[u8], out: &mut Vec<String>) {
    // Each entry carries the name of the function definition it sits in.
    let mut stack: Vec<(&SyntaxNode, Option<&str>)> = vec![(tree.root(), None)];

    while let Some((node, enclosing)) = stack.pop() {
        let enclosing = match node.kind {
            NodeKind::FunctionDefinition => function_name(node, source),
            NodeKind::CallExpression => {
                if enclosing.is_some() && callee_name(node, source) == enclosing {
                    out.push(MESSAGE.to_string());
                }
                enclosing
            }
            _ => enclosing,
        };

        stack.extend(node.children.iter().rev().map(|child| (child, enclosing)));
    }
}
