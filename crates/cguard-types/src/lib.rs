//! Stable IDs and documentation shared across the cguard workspace.
//!
//! This crate is intentionally boring:
//! - stable constraint tag strings used in policy files
//! - explain registry for remediation guidance

#![forbid(unsafe_code)]

pub mod explain;
pub mod ids;

pub use explain::{ExamplePair, Explanation, lookup_explanation};
