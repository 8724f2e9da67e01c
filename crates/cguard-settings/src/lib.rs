//! Policy file parsing and resolution.
//!
//! This crate is IO-free: it parses and resolves policy text handed to it as strings.

#![forbid(unsafe_code)]

mod model;
mod resolve;

pub use model::PolicyConfigV1;
pub use resolve::resolve_policy;

/// Parse a TOML policy file into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<PolicyConfigV1> {
    let cfg: PolicyConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Parse a JSON policy file into a typed model.
pub fn parse_config_json(input: &str) -> anyhow::Result<PolicyConfigV1> {
    let cfg: PolicyConfigV1 = serde_json::from_str(input)?;
    Ok(cfg)
}

/// JSON Schema describing [`PolicyConfigV1`], for editor and CI tooling.
pub fn policy_schema_json() -> anyhow::Result<String> {
    let schema = schemars::schema_for!(PolicyConfigV1);
    Ok(serde_json::to_string_pretty(&schema)?)
}
