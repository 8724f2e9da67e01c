use crate::model::PolicyConfigV1;
use anyhow::Context;
use cguard_domain::{Constraint, Policy, RawPolicy};

/// Turn a parsed policy file into the validated policy the engine runs.
pub fn resolve_policy(cfg: PolicyConfigV1) -> anyhow::Result<Policy> {
    let disallow = cfg.disallow.map(|tags| parse_constraints(&tags));

    let raw = RawPolicy {
        require_includes: cfg.require_includes,
        allow_includes: cfg.allow_includes,
        require_functions: cfg.require_functions,
        disallow,
        disallow_symbols: cfg.disallow_symbols,
        limit_source_bytes: cfg.limit_source_bytes,
        limit_defined_functions: cfg.limit_defined_functions,
    };

    Policy::from_raw(raw).context("invalid policy")
}

/// Unknown tags are skipped; they never make a policy invalid.
fn parse_constraints(tags: &[String]) -> Vec<Constraint> {
    tags.iter()
        .filter_map(|tag| match tag.parse::<Constraint>() {
            Ok(constraint) => Some(constraint),
            Err(err) => {
                tracing::warn!(%tag, %err, "ignoring unknown disallow tag");
                None
            }
        })
        .collect()
}
