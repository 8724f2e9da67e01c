//! One evaluator per policy constraint.
//!
//! Every evaluator is a read-only walk that appends violation messages to `out`. None of them
//! depends on another, so the order in which they run does not matter.

use crate::model::SyntaxTree;
use crate::policy::{Constraint, Policy};

pub mod arrays;
pub mod assignment;
pub mod atypical_control_flow;
pub mod braceless_blocks;
pub mod direct_recursion;
pub mod helper_functions;
pub mod if_statements;
pub mod includes;
pub mod inline_asm;
pub mod limits;
pub mod loops;
pub mod main_function;
pub mod nonnumeric_defines;
pub mod printing;
pub mod reassignment;
pub mod require_functions;
pub mod symbols;


pub fn run_all(tree: &SyntaxTree, source: &[u8], policy: &Policy, out: &mut Vec<String>) {
    for &constraint in policy.disallow() {
        run_constraint(constraint, tree, source, policy, out);
    }

    if !policy.disallow_symbols().is_empty() {
        symbols::run(tree, source, policy.disallow_symbols(), out);
    }

    // A limit of zero is still a limit.
    if let Some(limit) = policy.limit_source_bytes() {
        limits::run_source_bytes(source, limit, out);
    }
    if let Some(limit) = policy.limit_defined_functions() {
        limits::run_defined_functions(tree, limit, out);
    }

    if let Some(required) = policy.require_functions()
        && !required.is_empty()
    {
        require_functions::run(tree, source, required, out);
    }

    if !policy.require_includes().is_empty() {
        includes::run_required(tree, source, policy.require_includes(), out);
    }

    // `None` allows every include; an empty set allows only the required ones.
    if let Some(allowed) = policy.allow_includes() {
        includes::run_allowed(tree, source, allowed, policy.require_includes(), out);
    }
}

pub fn run_constraint(
    constraint: Constraint,
    tree: &SyntaxTree,
    source: &[u8],
    policy: &Policy,
    out: &mut Vec<String>,
) {
    match constraint {
        Constraint::Main => main_function::run(tree, source, out),
        Constraint::Assignment => assignment::run(tree, out),
        Constraint::Reassignment => reassignment::run(tree, out),
        Constraint::Loops => loops::run(tree, out),
        Constraint::IfStatements => if_statements::run(tree, out),
        Constraint::HelperFunctions => {
            helper_functions::run(tree, source, policy.require_functions(), out)
        }
        Constraint::Printing => printing::run(tree, source, out),
        Constraint::DirectRecursion => direct_recursion::run(tree, source, out),
        Constraint::Arrays => arrays::run(tree, out),
        Constraint::NonnumericDefines => nonnumeric_defines::run(tree, source, out),
        // Recognized so policies using it load; there is no detection for it yet.
        Constraint::FunctionPointers => {}
        Constraint::AtypicalControlFlow => atypical_control_flow::run(tree, source, out),
        Constraint::BracelessBlocks => braceless_blocks::run(tree, out),
        Constraint::Asm => inline_asm::run(tree, out),
    }
}
