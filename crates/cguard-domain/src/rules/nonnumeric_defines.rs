use crate::model::{NodeKind, SyntaxTree};
use crate::query::{child_by_field, ident_of, walk};
use regex::Regex;
use std::sync::LazyLock;

pub const MESSAGE: &str = "`define` preprocessor directives for nonnumeric values are disallowed.";

static NUMERIC_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?[0-9]+(\.[0-9]*)?$").expect("numeric literal pattern must compile")
});

/// Function-like macros are always rejected. Object-like macros pass only when their whole
/// replacement text is a plain number; a macro without replacement text passes.
pub fn run(tree: &SyntaxTree, source: &[u8], out: &mut Vec<String>) {
    for node in walk(tree.root()) {
        match node.kind {
            NodeKind::PreprocFunctionDef => out.push(MESSAGE.to_string()),
            NodeKind::PreprocDef => {
                let Some(value) = child_by_field(node, "value") else {
                    continue;
                };
                let replacement = strip_line_comment(ident_of(value, source)).trim();
                if !replacement.is_empty() && !is_numeric(replacement) {
                    out.push(MESSAGE.to_string());
                }
            }
            _ => {}
        }
    }
}

/// A trailing `//` comment is not part of the replacement text.
fn strip_line_comment(value: &str) -> &str {
    value.split_once("//").map_or(value, |(before, _)| before)
}

fn is_numeric(replacement: &str) -> bool {
    NUMERIC_LITERAL.is_match(replacement.trim())
}
