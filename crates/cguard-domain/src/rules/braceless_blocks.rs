use crate::model::{NodeKind, SyntaxNode, SyntaxTree};
use crate::query::{child_by_field, last_named_child, walk};

pub const MESSAGE: &str = "Control-flow bodies must be enclosed in braces.";

/// Each clause of an `if`/`else if`/`else` chain is checked on its own; `else if` is a chain
/// link, not an unbraced body.
pub fn run(tree: &SyntaxTree, out: &mut Vec<String>) {
    for node in walk(tree.root()) {
        match node.kind {
            NodeKind::IfStatement => {
                check_body(child_by_field(node, "consequence"), out);

                if let Some(alternative) = child_by_field(node, "alternative") {
                    let body = else_body(alternative);
                    if body.is_some_and(|b| b.kind != NodeKind::IfStatement) {
                        check_body(body, out);
                    }
                }
            }
            NodeKind::WhileStatement | NodeKind::ForStatement | NodeKind::DoStatement => {
                check_body(child_by_field(node, "body"), out);
            }
            _ => {}
        }
    }
}

/// Older grammars put the statement straight in the `alternative` field.
fn else_body(alternative: &SyntaxNode) -> Option<&SyntaxNode> {
    if alternative.kind == NodeKind::ElseClause {
        last_named_child(alternative)
    } else {
        Some(alternative)
    }
}

fn check_body(body: Option<&SyntaxNode>, out: &mut Vec<String>) {
    if let Some(body) = body
        && body.kind != NodeKind::CompoundStatement
    {
        out.push(MESSAGE.to_string());
    }
}
