//! Required fields validation.
//!
//! This rule ensures that every top-level descriptor section is present.
//! A key that was written with the wrong shape counts as present; the
//! field-shape rule reports it instead.

use crate::descriptor::CapabilityDescriptor;
use crate::lint::{LintDiagnostic, LintRule, RuleId, Severity};

/// Top-level fields every descriptor must carry, in report order.
pub const REQUIRED_TOP_LEVEL: &[&str] = &[
    "id",
    "name",
    "domain",
    "version",
    "action",
    "requires",
    "produces",
    "confidence",
    "metadata",
];

/// Validates that required top-level fields are present.
pub struct RequiredFieldsRule;

fn is_present(descriptor: &CapabilityDescriptor, field: &str) -> bool {
    if descriptor.malformed.iter().any(|m| m.is_top_level(field)) {
        return true;
    }
    match field {
        "id" => descriptor.id.is_some(),
        "name" => descriptor.name.is_some(),
        "domain" => descriptor.domain.is_some(),
        "version" => descriptor.version.is_some(),
        "action" => descriptor.action.is_some(),
        "requires" => descriptor.requires.is_some(),
        "produces" => descriptor.produces.is_some(),
        "confidence" => descriptor.confidence.is_some(),
        "metadata" => descriptor.metadata.is_some(),
        _ => true,
    }
}

impl LintRule for RequiredFieldsRule {
    fn id(&self) -> RuleId {
        RuleId::new("required-fields")
    }

    fn summary(&self) -> &str {
        "Ensures all required top-level descriptor fields are present"
    }

    fn severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, descriptor: &CapabilityDescriptor) -> Vec<LintDiagnostic> {
        REQUIRED_TOP_LEVEL
            .iter()
            .filter(|field| !is_present(descriptor, field))
            .map(|field| {
                self.diagnostic(format!("Missing required field: {}", field))
                    .with_field(*field)
            })
            .collect()
    }
}
