//! Readiness reporting.
//!
//! Merges probe results into pass/fail/unknown counts and a
//! [`Decision`]: any failure blocks, any unknown calls for caution.

pub mod preflight;
pub mod readiness;

pub use preflight::PreflightReport;
pub use readiness::{aggregate, Decision, ReadinessSummary};
