use cguard_types::ids;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Configuration mistakes made by the policy author.
///
/// These abort policy setup; they are never reported as submission violations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PolicyError {
    #[error(
        "`limit_defined_functions` ({limit}) must be greater than or equal to the number of `require_functions` ({required})"
    )]
    FunctionLimitBelowRequired { limit: u64, required: usize },
}

/// A `disallow` entry that names no known constraint.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown constraint tag: {0}")]
pub struct UnknownConstraint(pub String);

/// A structural ban that can be listed under `disallow`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Constraint {
    Main,
    Assignment,
    Reassignment,
    Loops,
    IfStatements,
    HelperFunctions,
    Printing,
    DirectRecursion,
    Arrays,
    NonnumericDefines,
    /// Accepted but not enforced yet.
    FunctionPointers,
    AtypicalControlFlow,
    BracelessBlocks,
    Asm,
}

impl Constraint {
    pub const ALL: [Constraint; 14] = [
        Constraint::Main,
        Constraint::Assignment,
        Constraint::Reassignment,
        Constraint::Loops,
        Constraint::IfStatements,
        Constraint::HelperFunctions,
        Constraint::Printing,
        Constraint::DirectRecursion,
        Constraint::Arrays,
        Constraint::NonnumericDefines,
        Constraint::FunctionPointers,
        Constraint::AtypicalControlFlow,
        Constraint::BracelessBlocks,
        Constraint::Asm,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Constraint::Main => ids::TAG_MAIN,
            Constraint::Assignment => ids::TAG_ASSIGNMENT,
            Constraint::Reassignment => ids::TAG_REASSIGNMENT,
            Constraint::Loops => ids::TAG_LOOPS,
            Constraint::IfStatements => ids::TAG_IF_STATEMENTS,
            Constraint::HelperFunctions => ids::TAG_HELPER_FUNCTIONS,
            Constraint::Printing => ids::TAG_PRINTING,
            Constraint::DirectRecursion => ids::TAG_DIRECT_RECURSION,
            Constraint::Arrays => ids::TAG_ARRAYS,
            Constraint::NonnumericDefines => ids::TAG_NONNUMERIC_DEFINES,
            Constraint::FunctionPointers => ids::TAG_FUNCTION_POINTERS,
            Constraint::AtypicalControlFlow => ids::TAG_ATYPICAL_CONTROL_FLOW,
            Constraint::BracelessBlocks => ids::TAG_BRACELESS_BLOCKS,
            Constraint::Asm => ids::TAG_ASM,
        }
    }
}

impl FromStr for Constraint {
    type Err = UnknownConstraint;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Constraint::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownConstraint(s.to_string()))
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Loosely-typed policy input. `None` means "no constraint of this kind".
#[derive(Clone, Debug, Default)]
pub struct RawPolicy {
    pub require_includes: Option<Vec<String>>,
    pub allow_includes: Option<Vec<String>>,
    pub require_functions: Option<Vec<String>>,
    pub disallow: Option<Vec<Constraint>>,
    pub disallow_symbols: Option<Vec<String>>,
    pub limit_source_bytes: Option<u64>,
    pub limit_defined_functions: Option<u64>,
}

/// Validated, immutable policy.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Policy {
    require_includes: BTreeSet<String>,
    allow_includes: Option<BTreeSet<String>>,
    require_functions: Option<BTreeSet<String>>,
    disallow: BTreeSet<Constraint>,
    disallow_symbols: BTreeSet<String>,
    limit_source_bytes: Option<u64>,
    limit_defined_functions: Option<u64>,
}

impl Policy {
    /// Build a policy, rejecting a function limit below the number of required functions.
    pub fn from_raw(raw: RawPolicy) -> Result<Self, PolicyError> {
        let require_functions: Option<BTreeSet<String>> =
            raw.require_functions.map(|v| v.into_iter().collect());

        if let (Some(limit), Some(required)) = (raw.limit_defined_functions, &require_functions)
            && limit < required.len() as u64
        {
            return Err(PolicyError::FunctionLimitBelowRequired {
                limit,
                required: required.len(),
            });
        }

        Ok(Self {
            require_includes: raw.require_includes.unwrap_or_default().into_iter().collect(),
            allow_includes: raw.allow_includes.map(|v| v.into_iter().collect()),
            require_functions,
            disallow: raw.disallow.unwrap_or_default().into_iter().collect(),
            disallow_symbols: raw.disallow_symbols.unwrap_or_default().into_iter().collect(),
            limit_source_bytes: raw.limit_source_bytes,
            limit_defined_functions: raw.limit_defined_functions,
        })
    }

    pub fn require_includes(&self) -> &BTreeSet<String> {
        &self.require_includes
    }

    pub fn allow_includes(&self) -> Option<&BTreeSet<String>> {
        self.allow_includes.as_ref()
    }

    /// `None` when the policy never mentioned required functions.
    pub fn require_functions(&self) -> Option<&BTreeSet<String>> {
        self.require_functions.as_ref()
    }

    pub fn disallow(&self) -> &BTreeSet<Constraint> {
        &self.disallow
    }

    pub fn disallows(&self, constraint: Constraint) -> bool {
        self.disallow.contains(&constraint)
    }

    pub fn disallow_symbols(&self) -> &BTreeSet<String> {
        &self.disallow_symbols
    }

    pub fn limit_source_bytes(&self) -> Option<u64> {
        self.limit_source_bytes
    }

    pub fn limit_defined_functions(&self) -> Option<u64> {
        self.limit_defined_functions
    }
}
