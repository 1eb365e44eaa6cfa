//! Field shape validation.
//!
//! Reports values the loader set aside because their YAML had the wrong
//! kind, e.g. `action: run it` or `known_gaps: none`.

use crate::descriptor::CapabilityDescriptor;
use crate::lint::{LintDiagnostic, LintRule, RuleId, Severity};

pub struct FieldShapeRule;

impl LintRule for FieldShapeRule {
    fn id(&self) -> RuleId {
        RuleId::new("field-shape")
    }

    fn summary(&self) -> &str {
        "Ensures sections, lists and scalar fields have the right YAML shape"
    }

    fn severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, descriptor: &CapabilityDescriptor) -> Vec<LintDiagnostic> {
        descriptor
            .malformed
            .iter()
            .map(|m| {
                self.diagnostic(format!(
                    "Invalid type for {}: expected {}, found {}",
                    m.field, m.expected, m.found
                ))
                .with_field(m.field.clone())
            })
            .collect()
    }
}
