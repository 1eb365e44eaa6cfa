//! The [`LintRule`] trait and the identifiers rules report under.

use std::fmt;

use super::diagnostic::LintDiagnostic;
use crate::descriptor::CapabilityDescriptor;

/// Stable kebab-case name of a rule, e.g. `id-format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RuleId(&'static str);

impl RuleId {
    pub const fn new(id: &'static str) -> Self {
        Self(id)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// How much a diagnostic matters. Only errors make a descriptor invalid;
/// warnings fail only under `--strict`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Warning,
    Error,
}

impl Severity {
    /// Prefix used when a diagnostic is printed under its file.
    pub fn label(self) -> &'static str {
        match self {
            Severity::Warning => "WARN",
            Severity::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A structural check over one descriptor.
///
/// Rules are pure. The same descriptor always yields the same diagnostics in
/// the same order, and a rule never touches the filesystem or the network.
pub trait LintRule: Send + Sync {
    fn id(&self) -> RuleId;

    /// One-line description shown by `validate --verbose`.
    fn summary(&self) -> &str;

    fn severity(&self) -> Severity;

    fn check(&self, descriptor: &CapabilityDescriptor) -> Vec<LintDiagnostic>;

    /// A diagnostic attributed to this rule at its severity.
    fn diagnostic(&self, message: impl Into<String>) -> LintDiagnostic
    where
        Self: Sized,
    {
        LintDiagnostic::new(self.id(), self.severity(), message)
    }
}
