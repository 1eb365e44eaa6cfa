//! Descriptor validation entry point.
//!
//! [`validate`] runs every built-in rule over a descriptor in one pass and
//! splits the diagnostics into errors and warnings.

use serde::Serialize;

use crate::descriptor::CapabilityDescriptor;

use super::diagnostic::LintDiagnostic;
use super::registry::RuleRegistry;
use super::rule::Severity;

/// Outcome of validating one descriptor.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationOutcome {
    /// Structural problems, in rule order.
    pub errors: Vec<String>,
    /// Documentation smells, in rule order.
    pub warnings: Vec<String>,
    /// Fix suggestions offered by rules, shown in verbose mode.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub hints: Vec<String>,
}

impl ValidationOutcome {
    /// Build an outcome from raw diagnostics.
    pub fn from_diagnostics(diagnostics: &[LintDiagnostic]) -> Self {
        let mut outcome = Self::default();
        for diag in diagnostics {
            match diag.severity {
                Severity::Error => outcome.errors.push(diag.message.clone()),
                Severity::Warning => outcome.warnings.push(diag.message.clone()),
            }
            outcome.hints.extend(diag.hint());
        }
        outcome
    }

    /// No errors (warnings allowed).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// No errors and no warnings.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }

    /// Whether this outcome fails, with `strict` promoting warnings to errors.
    pub fn fails(&self, strict: bool) -> bool {
        !self.errors.is_empty() || (strict && !self.warnings.is_empty())
    }
}

/// Validate a descriptor against the built-in rules.
pub fn validate(descriptor: &CapabilityDescriptor) -> ValidationOutcome {
    ValidationOutcome::from_diagnostics(&RuleRegistry::with_builtins().check(descriptor))
}
