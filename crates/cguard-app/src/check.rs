//! The `check` use case: validate one submission against a policy.

use anyhow::Context;
use cguard_domain::{Verdict, render_report};
use cguard_settings::PolicyConfigV1;
use std::collections::BTreeSet;

/// Syntax of the policy text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConfigFormat {
    #[default]
    Toml,
    Json,
}

impl ConfigFormat {
    /// Guess the format from a file extension; anything but `json` is read as TOML.
    pub fn from_extension(extension: Option<&str>) -> Self {
        match extension {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ConfigFormat::Json,
            _ => ConfigFormat::Toml,
        }
    }
}

/// Input for the check use case.
#[derive(Clone, Debug)]
pub struct CheckInput<'a> {
    /// Submission source, as raw bytes.
    pub source: &'a [u8],
    /// Policy file contents (empty string for an unconstrained policy).
    pub config_text: &'a str,
    pub config_format: ConfigFormat,
}

/// Output from the check use case.
#[derive(Clone, Debug)]
pub struct CheckOutput {
    pub violations: BTreeSet<String>,
    /// Rejection notice; `None` when the submission passes.
    pub report: Option<String>,
    pub verdict: Verdict,
}

/// Run the check use case: parse and resolve the policy, parse the source, evaluate, render.
///
/// Policy problems surface before the source is looked at.
pub fn run_check(input: CheckInput<'_>) -> anyhow::Result<CheckOutput> {
    let cfg = if input.config_text.trim().is_empty() {
        PolicyConfigV1::default()
    } else {
        let parsed = match input.config_format {
            ConfigFormat::Toml => cguard_settings::parse_config_toml(input.config_text),
            ConfigFormat::Json => cguard_settings::parse_config_json(input.config_text),
        };
        parsed.context("parse policy")?
    };

    let policy = cguard_settings::resolve_policy(cfg).context("resolve policy")?;
    tracing::debug!(?policy, "policy resolved");

    let tree = cguard_parser::parse_c(input.source).context("parse C source")?;
    tracing::debug!(source_bytes = input.source.len(), "source parsed");

    let violations = cguard_domain::evaluate(&tree, input.source, &policy);
    let verdict = Verdict::from_violations(&violations);
    let report = render_report(&violations);

    tracing::info!(
        violations = violations.len(),
        verdict = verdict.as_str(),
        "check complete"
    );

    Ok(CheckOutput {
        violations,
        report,
        verdict,
    })
}

/// Map verdict to exit code: 0 = pass, 2 = rejected.
pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Pass => 0,
        Verdict::Reject => 2,
    }
}
