//! Use case orchestration for cguard.
//!
//! This crate coordinates the settings, parser and domain layers. It does no I/O of its own:
//! callers hand it policy text and source bytes.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod check;
mod explain;
mod explore;

pub use check::{CheckInput, CheckOutput, ConfigFormat, run_check, verdict_exit_code};
pub use explain::{ExplainOutput, format_explanation, format_not_found, run_explain};
pub use explore::run_explore;
