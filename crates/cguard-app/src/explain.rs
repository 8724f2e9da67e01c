//! The `explain` use case: look up documentation for a constraint tag or policy field.

use cguard_types::explain::{self, Explanation};

/// Output from the explain use case.
#[derive(Clone, Debug)]
pub enum ExplainOutput {
    Found(Explanation),
    /// Unknown identifier; includes the tags and fields that do exist.
    NotFound {
        identifier: String,
        available_tags: &'static [&'static str],
        available_fields: &'static [&'static str],
    },
}

pub fn run_explain(identifier: &str) -> ExplainOutput {
    match explain::lookup_explanation(identifier) {
        Some(exp) => ExplainOutput::Found(exp),
        None => ExplainOutput::NotFound {
            identifier: identifier.to_string(),
            available_tags: explain::all_tags(),
            available_fields: explain::all_fields(),
        },
    }
}

/// Format an explanation for terminal display.
pub fn format_explanation(exp: &Explanation) -> String {
    let mut out = String::new();

    out.push_str(exp.title);
    out.push('\n');
    out.push_str(&"=".repeat(exp.title.len()));
    out.push_str("\n\n");
    out.push_str(exp.description);
    out.push_str("\n\n");
    out.push_str("Remediation\n");
    out.push_str("-----------\n");
    out.push_str(exp.remediation);
    out.push_str("\n\n");
    push_example(&mut out, "Rejected", exp.examples.before);
    out.push('\n');
    push_example(&mut out, "Accepted", exp.examples.after);

    out
}

fn push_example(out: &mut String, label: &str, code: &str) {
    out.push_str(label);
    out.push_str(":\n```c\n");
    out.push_str(code);
    out.push_str("\n```\n");
}

pub fn format_not_found(identifier: &str, tags: &[&str], fields: &[&str]) -> String {
    let mut out = format!("Unknown constraint tag or policy field: {identifier}\n\n");

    out.push_str("Available tags (for `disallow`):\n");
    for tag in tags {
        out.push_str(&format!("  - {tag}\n"));
    }
    out.push_str("\nAvailable fields:\n");
    for field in fields {
        out.push_str(&format!("  - {field}\n"));
    }

    out
}
