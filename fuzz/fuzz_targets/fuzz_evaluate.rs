//! Fuzz target for parsing and evaluating arbitrary C source.
//!
//! Goal: parse + evaluate should **never panic**, whatever the bytes and whatever the policy.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_evaluate
//! ```

#![no_main]

use arbitrary::Arbitrary;
use cguard_domain::{Constraint, Policy, RawPolicy, evaluate, render_report};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    /// One bit per constraint in `Constraint::ALL` order.
    disallow_mask: u16,
    require_functions: Option<Vec<String>>,
    require_includes: Option<Vec<String>>,
    allow_includes: Option<Vec<String>>,
    disallow_symbols: Option<Vec<String>>,
    limit_source_bytes: Option<u64>,
    limit_defined_functions: Option<u64>,
    source: &'a [u8],
}

fuzz_target!(|input: Input<'_>| {
    let disallow = Constraint::ALL
        .into_iter()
        .enumerate()
        .filter(|(i, _)| input.disallow_mask & (1 << i) != 0)
        .map(|(_, c)| c)
        .collect();

    // Inconsistent limits are a configuration error, not something to evaluate.
    let Ok(policy) = Policy::from_raw(RawPolicy {
        require_includes: input.require_includes,
        allow_includes: input.allow_includes,
        require_functions: input.require_functions,
        disallow: Some(disallow),
        disallow_symbols: input.disallow_symbols,
        limit_source_bytes: input.limit_source_bytes,
        limit_defined_functions: input.limit_defined_functions,
    }) else {
        return;
    };

    let Ok(tree) = cguard_parser::parse_c(input.source) else {
        return;
    };

    let violations = evaluate(&tree, input.source, &policy);
    let report = render_report(&violations);
    assert_eq!(violations.is_empty(), report.is_none());
});
