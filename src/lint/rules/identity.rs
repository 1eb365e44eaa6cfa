//! Identity field formats.
//!
//! Checks the values of `id`, `domain` and `version`. Absent or empty values
//! are left to [`super::RequiredFieldsRule`].

use std::sync::LazyLock;

use regex::Regex;

use crate::descriptor::{joined_names, CapabilityDescriptor, Domain};
use crate::lint::{LintDiagnostic, LintRule, RuleId, Severity};

static ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9-]+$").expect("id pattern is valid"));

/// Validates that `id` is lowercase alphanumeric with hyphens.
pub struct IdFormatRule;

impl LintRule for IdFormatRule {
    fn id(&self) -> RuleId {
        RuleId::new("id-format")
    }

    fn summary(&self) -> &str {
        "Validates id is lowercase alphanumeric with hyphens"
    }

    fn severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, descriptor: &CapabilityDescriptor) -> Vec<LintDiagnostic> {
        match descriptor.id.as_deref() {
            Some(id) if !id.is_empty() && !ID_PATTERN.is_match(id) => {
                let suggested: String = id
                    .to_lowercase()
                    .chars()
                    .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
                    .collect();
                vec![self.diagnostic(format!(
                    "Invalid id format: {} (must be lowercase alphanumeric with hyphens)",
                    id
                ))
                .with_field("id")
                .with_suggestion(format!("Use \"{}\" instead", suggested))]
            }
            _ => Vec::new(),
        }
    }
}

/// Validates that `domain` is a known domain.
pub struct DomainRule;

impl LintRule for DomainRule {
    fn id(&self) -> RuleId {
        RuleId::new("valid-domain")
    }

    fn summary(&self) -> &str {
        "Validates domain is one of the known capability domains"
    }

    fn severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, descriptor: &CapabilityDescriptor) -> Vec<LintDiagnostic> {
        match descriptor.domain.as_deref() {
            Some(domain) if !domain.is_empty() && domain.parse::<Domain>().is_err() => {
                vec![self.diagnostic(format!(
                    "Invalid domain: {}. Must be one of: {}",
                    domain,
                    joined_names(Domain::ALL, Domain::as_str)
                ))
                .with_field("domain")]
            }
            _ => Vec::new(),
        }
    }
}

/// Validates that `version` is `X.Y.Z` with numeric parts.
pub struct VersionFormatRule;

/// Whether `version` is exactly three dot-separated non-negative integers.
pub fn is_valid_version(version: &str) -> bool {
    let parts: Vec<&str> = version.split('.').collect();
    parts.len() == 3
        && parts
            .iter()
            .all(|p| !p.is_empty() && p.chars().all(|c| c.is_ascii_digit()))
}

impl LintRule for VersionFormatRule {
    fn id(&self) -> RuleId {
        RuleId::new("version-format")
    }

    fn summary(&self) -> &str {
        "Validates version has exactly three numeric components"
    }

    fn severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, descriptor: &CapabilityDescriptor) -> Vec<LintDiagnostic> {
        match descriptor.version.as_deref() {
            Some(version) if !version.is_empty() && !is_valid_version(version) => {
                vec![self
                    .diagnostic(format!("Invalid version format: {} (must be X.Y.Z)", version))
                    .with_field("version")]
            }
            _ => Vec::new(),
        }
    }
}
