//! The `explore` use case: dump the syntax tree of a source file.

use anyhow::Context;

/// Render the parsed tree one node kind per line, for writing policies against real shapes.
pub fn run_explore(source: &[u8]) -> anyhow::Result<String> {
    let tree = cguard_parser::parse_c(source).context("parse C source")?;
    Ok(cguard_parser::render_tree(&tree))
}
