use crate::model::SyntaxTree;
use crate::policy::Policy;
use crate::rules;
use std::collections::BTreeSet;

/// Run every enabled rule and collapse identical messages.
///
/// The set answers "which problems exist", not "how many times": N occurrences of the same
/// banned construct yield one message.
pub fn evaluate(tree: &SyntaxTree, source: &[u8], policy: &Policy) -> BTreeSet<String> {
    let mut messages: Vec<String> = Vec::new();

    rules::run_all(tree, source, policy, &mut messages);

    messages.into_iter().collect()
}
