use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Policy file schema v1.
///
/// Every field is optional; an absent field places no constraint. Unknown keys are ignored so
/// policy files can carry grader metadata.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PolicyConfigV1 {
    /// Optional schema string for tooling (`cguard.policy.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Headers the submission must include.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub require_includes: Option<Vec<String>>,

    /// Headers the submission may include besides the required ones. Absent means any header.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_includes: Option<Vec<String>>,

    /// Function names the submission must define.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub require_functions: Option<Vec<String>>,

    /// Constraint tags such as `loops` or `printing`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disallow: Option<Vec<String>>,

    /// Identifiers that must not appear anywhere in the source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disallow_symbols: Option<Vec<String>>,

    /// Maximum source length in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit_source_bytes: Option<u64>,

    /// Maximum number of function definitions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit_defined_functions: Option<u64>,
}
