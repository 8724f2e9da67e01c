use crate::model::{NodeKind, SyntaxTree};
use crate::query::walk;

pub fn run_source_bytes(source: &[u8], limit: u64, out: &mut Vec<String>) {
    if source.len() as u64 > limit {
        out.push(format!("Source code is too long; must be at most {limit} bytes."));
    }
}

pub fn run_defined_functions(tree: &SyntaxTree, limit: u64, out: &mut Vec<String>) {
    let defined = walk(tree.root())
        .filter(|node| node.kind == NodeKind::FunctionDefinition)
        .count() as u64;

    if defined > limit {
        let noun = if limit == 1 { "function" } else { "functions" };
        out.push(format!(
            "Too many defined functions; at most {limit} {noun} can be defined."
        ));
    }
}
