//! Pure policy evaluation (no IO).
//!
//! Input: a syntax tree constructed elsewhere plus the raw source bytes.
//! Output: the deduplicated set of violation messages, and optionally a rejection report.

#![forbid(unsafe_code)]

pub mod model;
pub mod policy;
pub mod query;
pub mod report;
pub mod rules;

mod engine;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use engine::evaluate;
pub use model::{NodeKind, SyntaxNode, SyntaxTree};
pub use policy::{Constraint, Policy, PolicyError, RawPolicy, UnknownConstraint};
pub use report::{Verdict, render_report};
