//! Documentation honesty checks.
//!
//! An empty `known_gaps` or `failure_modes` list is structurally fine, but a
//! capability with no known limitations has usually not been looked at
//! closely. These rules only ever warn.

use crate::descriptor::CapabilityDescriptor;
use crate::lint::{LintDiagnostic, LintRule, RuleId, Severity};

/// Warns when `confidence.known_gaps` is empty.
pub struct KnownGapsRule;

impl LintRule for KnownGapsRule {
    fn id(&self) -> RuleId {
        RuleId::new("known-gaps-documented")
    }

    fn summary(&self) -> &str {
        "Warns when a capability declares no known gaps"
    }

    fn severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, descriptor: &CapabilityDescriptor) -> Vec<LintDiagnostic> {
        if !descriptor.known_gaps().is_empty() {
            return Vec::new();
        }
        vec![self
            .diagnostic("No known_gaps documented - are you being honest about limitations?")
            .with_field("confidence.known_gaps")]
    }
}

/// Warns when `confidence.failure_modes` is empty.
pub struct FailureModesRule;

impl LintRule for FailureModesRule {
    fn id(&self) -> RuleId {
        RuleId::new("failure-modes-documented")
    }

    fn summary(&self) -> &str {
        "Warns when a capability declares no failure modes"
    }

    fn severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, descriptor: &CapabilityDescriptor) -> Vec<LintDiagnostic> {
        if !descriptor.failure_modes().is_empty() {
            return Vec::new();
        }
        vec![self
            .diagnostic("No failure_modes documented - how does this capability fail?")
            .with_field("confidence.failure_modes")]
    }
}
