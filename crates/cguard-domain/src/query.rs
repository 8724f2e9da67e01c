//! Traversal and lookup helpers shared by every rule.

use crate::model::{NodeKind, SyntaxNode};

/// Pre-order depth-first iterator: parent before children, siblings in source order.
pub struct Walk<'a> {
    stack: Vec<&'a SyntaxNode>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a SyntaxNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

pub fn walk(node: &SyntaxNode) -> Walk<'_> {
    Walk { stack: vec![node] }
}

/// Raw bytes covered by `node`. Out-of-range nodes yield an empty slice.
pub fn text_of<'s>(node: &SyntaxNode, source: &'s [u8]) -> &'s [u8] {
    source.get(node.start..node.end).unwrap_or_default()
}

/// `text_of` decoded as UTF-8, for identifier comparison.
///
/// tree-sitter only produces identifier nodes over valid text, so a decoding failure means the
/// node did not come from the parser. Such a node compares as empty and matches no name.
pub fn ident_of<'s>(node: &SyntaxNode, source: &'s [u8]) -> &'s str {
    match std::str::from_utf8(text_of(node, source)) {
        Ok(text) => text,
        Err(err) => {
            tracing::debug!(
                start = node.start,
                end = node.end,
                %err,
                "identifier is not valid UTF-8"
            );
            ""
        }
    }
}

pub fn first_child_of_kind(node: &SyntaxNode, kind: NodeKind) -> Option<&SyntaxNode> {
    node.children.iter().find(|c| c.kind == kind)
}

pub fn children_of_kind(node: &SyntaxNode, kind: NodeKind) -> impl Iterator<Item = &SyntaxNode> {
    node.children.iter().filter(move |c| c.kind == kind)
}

pub fn child_by_field<'a>(node: &'a SyntaxNode, field: &str) -> Option<&'a SyntaxNode> {
    node.children.iter().find(|c| c.field == Some(field))
}

/// First named child that is not a comment.
pub fn first_named_child(node: &SyntaxNode) -> Option<&SyntaxNode> {
    node.children
        .iter()
        .find(|c| c.named && c.kind != NodeKind::Comment)
}

/// Last named child that is not a comment.
pub fn last_named_child(node: &SyntaxNode) -> Option<&SyntaxNode> {
    node.children
        .iter()
        .rev()
        .find(|c| c.named && c.kind != NodeKind::Comment)
}

/// Name declared by a function definition.
///
/// Follows the declarator chain through pointer, parenthesized and attributed declarators
/// (`int *f(void)`, `int (f)(void)`) down to the identifier.
pub fn function_name<'s>(definition: &SyntaxNode, source: &'s [u8]) -> Option<&'s str> {
    let mut node = child_by_field(definition, "declarator")?;
    loop {
        node = match node.kind {
            NodeKind::Identifier => return Some(ident_of(node, source)),
            NodeKind::FunctionDeclarator
            | NodeKind::PointerDeclarator
            | NodeKind::AttributedDeclarator => child_by_field(node, "declarator")
                .or_else(|| first_named_child(node))?,
            NodeKind::ParenthesizedDeclarator => first_named_child(node)?,
            _ => return None,
        };
    }
}

/// Callee name of a call expression when the callee is a plain identifier.
///
/// `(*fp)(x)` and `s.f(x)` have no callee name.
pub fn callee_name<'s>(call: &SyntaxNode, source: &'s [u8]) -> Option<&'s str> {
    let callee = child_by_field(call, "function").or_else(|| first_named_child(call))?;
    (callee.kind == NodeKind::Identifier).then(|| ident_of(callee, source))
}
