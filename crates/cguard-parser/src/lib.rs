//! C source adapter: tree-sitter parse, then conversion into the domain's owned tree.

#![forbid(unsafe_code)]

use anyhow::Context;
use cguard_domain::{SyntaxNode, SyntaxTree};
use tree_sitter::{Parser, TreeCursor};

/// Parse C source bytes.
///
/// Malformed C is not an error: tree-sitter recovers and the returned tree carries `ERROR`
/// nodes where it could not make sense of the input.
pub fn parse_c(source: &[u8]) -> anyhow::Result<SyntaxTree> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_c::LANGUAGE.into())
        .context("load tree-sitter C grammar")?;

    let tree = parser
        .parse(source, None)
        .context("tree-sitter returned no tree")?;

    Ok(SyntaxTree::new(convert(&mut tree.walk())))
}

fn node_at(cursor: &TreeCursor<'_>) -> SyntaxNode {
    let node = cursor.node();
    let converted = SyntaxNode::new(node.kind(), node.is_named(), node.byte_range());
    match cursor.field_name() {
        Some(field) => converted.with_field(field),
        None => converted,
    }
}

/// Depth-first conversion that keeps the open ancestors on a heap stack, so deeply nested
/// input cannot exhaust the call stack.
fn convert(cursor: &mut TreeCursor<'_>) -> SyntaxNode {
    let mut ancestors: Vec<SyntaxNode> = Vec::new();
    let mut current = node_at(cursor);

    loop {
        if cursor.goto_first_child() {
            ancestors.push(current);
            current = node_at(cursor);
            continue;
        }

        // `current` is complete: close it and every ancestor that has no further siblings.
        loop {
            if cursor.goto_next_sibling() {
                let next = node_at(cursor);
                let done = std::mem::replace(&mut current, next);
                if let Some(parent) = ancestors.last_mut() {
                    parent.children.push(done);
                }
                break;
            }

            cursor.goto_parent();
            match ancestors.pop() {
                Some(mut parent) => {
                    parent.children.push(current);
                    current = parent;
                }
                None => return current,
            }
        }
    }
}

/// One line per node, in pre-order, indented with two dashes per level.
///
/// ```text
/// translation_unit
/// --function_definition
/// ----primitive_type
/// ```
pub fn render_tree(tree: &SyntaxTree) -> String {
    let mut out = String::new();
    let mut stack: Vec<(&SyntaxNode, usize)> = vec![(tree.root(), 0)];

    while let Some((node, depth)) = stack.pop() {
        out.push_str(&"-".repeat(depth * 2));
        out.push_str(&node.grammar_name);
        out.push('\n');

        stack.extend(node.children.iter().rev().map(|child| (child, depth + 1)));
    }

    out
}
