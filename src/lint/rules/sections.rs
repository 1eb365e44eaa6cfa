//! Nested section validation.
//!
//! Each rule here only inspects its section when the section is present; a
//! missing section is reported once by [`super::RequiredFieldsRule`].

use crate::descriptor::{joined_names, CapabilityDescriptor, Freshness, Maturity};
use crate::lint::{LintDiagnostic, LintRule, RuleId, Severity};

/// Validates `action.description` and `action.trigger`.
pub struct ActionFieldsRule;

impl LintRule for ActionFieldsRule {
    fn id(&self) -> RuleId {
        RuleId::new("action-fields")
    }

    fn summary(&self) -> &str {
        "Ensures the action section has a description and a trigger"
    }

    fn severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, descriptor: &CapabilityDescriptor) -> Vec<LintDiagnostic> {
        let Some(action) = &descriptor.action else {
            return Vec::new();
        };

        [
            ("description", action.description.is_some()),
            ("trigger", action.trigger.is_some()),
        ]
        .into_iter()
        .filter(|(_, present)| !present)
        .map(|(field, _)| {
            self.diagnostic(format!("Missing action.{}", field))
                .with_field(format!("action.{}", field))
        })
        .collect()
    }
}

/// Validates every `requires.sources_of_truth` entry.
pub struct SourcesOfTruthRule;

impl LintRule for SourcesOfTruthRule {
    fn id(&self) -> RuleId {
        RuleId::new("sources-of-truth")
    }

    fn summary(&self) -> &str {
        "Ensures each source of truth has a name, location and known freshness"
    }

    fn severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, descriptor: &CapabilityDescriptor) -> Vec<LintDiagnostic> {
        let mut diagnostics = Vec::new();

        for (i, source) in descriptor.sources_of_truth().iter().enumerate() {
            let base = format!("requires.sources_of_truth[{}]", i);
            let missing = |field: &str| {
                self.diagnostic(format!("sources_of_truth[{}] missing '{}'", i, field))
                    .with_field(format!("{}.{}", base, field))
            };

            if source.name.is_none() {
                diagnostics.push(missing("name"));
            }
            if source.location.is_none() {
                diagnostics.push(missing("location"));
            }
            match source.freshness.as_deref() {
                None => diagnostics.push(missing("freshness")),
                Some(freshness) if freshness.parse::<Freshness>().is_err() => {
                    diagnostics.push(
                        self.diagnostic(format!(
                            "sources_of_truth[{}] invalid freshness: {}",
                            i, freshness
                        ))
                        .with_field(format!("{}.freshness", base))
                        .with_suggestion(format!(
                            "Use one of: {}",
                            joined_names(Freshness::ALL, Freshness::as_str)
                        )),
                    );
                }
                Some(_) => {}
            }
        }

        diagnostics
    }
}

/// Validates every `produces.outputs` entry.
pub struct OutputFieldsRule;

impl LintRule for OutputFieldsRule {
    fn id(&self) -> RuleId {
        RuleId::new("output-fields")
    }

    fn summary(&self) -> &str {
        "Ensures each output has a format and destination"
    }

    fn severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, descriptor: &CapabilityDescriptor) -> Vec<LintDiagnostic> {
        let Some(produces) = &descriptor.produces else {
            return Vec::new();
        };

        let mut diagnostics = Vec::new();
        for (i, output) in produces.outputs.iter().enumerate() {
            for (field, present) in [
                ("format", output.format.is_some()),
                ("destination", output.destination.is_some()),
            ] {
                if !present {
                    diagnostics.push(
                        self.diagnostic(format!("outputs[{}] missing '{}'", i, field))
                            .with_field(format!("produces.outputs[{}].{}", i, field)),
                    );
                }
            }
        }
        diagnostics
    }
}

/// Validates `confidence.maturity`.
pub struct ConfidenceRule;

impl LintRule for ConfidenceRule {
    fn id(&self) -> RuleId {
        RuleId::new("confidence-maturity")
    }

    fn summary(&self) -> &str {
        "Ensures confidence declares a known maturity level"
    }

    fn severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, descriptor: &CapabilityDescriptor) -> Vec<LintDiagnostic> {
        let Some(confidence) = &descriptor.confidence else {
            return Vec::new();
        };

        match confidence.maturity.as_deref() {
            None => vec![self
                .diagnostic("Missing confidence.maturity")
                .with_field("confidence.maturity")],
            Some(maturity) if !maturity.is_empty() && maturity.parse::<Maturity>().is_err() => {
                vec![self.diagnostic(format!(
                    "Invalid maturity: {}. Must be one of: {}",
                    maturity,
                    joined_names(Maturity::ALL, Maturity::as_str)
                ))
                .with_field("confidence.maturity")]
            }
            Some(_) => Vec::new(),
        }
    }
}

/// Validates `metadata.author` and `metadata.created`.
pub struct MetadataFieldsRule;

impl LintRule for MetadataFieldsRule {
    fn id(&self) -> RuleId {
        RuleId::new("metadata-fields")
    }

    fn summary(&self) -> &str {
        "Ensures metadata records an author and creation date"
    }

    fn severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, descriptor: &CapabilityDescriptor) -> Vec<LintDiagnostic> {
        let Some(metadata) = &descriptor.metadata else {
            return Vec::new();
        };

        [
            ("author", metadata.author.is_some()),
            ("created", metadata.created.is_some()),
        ]
        .into_iter()
        .filter(|(_, present)| !present)
        .map(|(field, _)| {
            self.diagnostic(format!("Missing metadata.{}", field))
                .with_field(format!("metadata.{}", field))
        })
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{Action, Confidence, Metadata, Output, SourceOfTruth};
    use crate::lint::rules::test_support::valid_descriptor;

    fn messages(diagnostics: Vec<LintDiagnostic>) -> Vec<String> {
        diagnostics.into_iter().map(|d| d.message).collect()
    }

    #[test]
    fn valid_descriptor_passes_every_section_rule() {
        let desc = valid_descriptor();
        assert!(ActionFieldsRule.check(&desc).is_empty());
        assert!(SourcesOfTruthRule.check(&desc).is_empty());
        assert!(OutputFieldsRule.check(&desc).is_empty());
        assert!(ConfidenceRule.check(&desc).is_empty());
        assert!(MetadataFieldsRule.check(&desc).is_empty());
    }

    #[test]
    fn action_missing_both_fields() {
        let mut desc = valid_descriptor();
        desc.action = Some(Action::default());
        assert_eq!(
            messages(ActionFieldsRule.check(&desc)),
            vec!["Missing action.description", "Missing action.trigger"]
        );
    }

    #[test]
    fn absent_action_is_not_rechecked() {
        let mut desc = valid_descriptor();
        desc.action = None;
        assert!(ActionFieldsRule.check(&desc).is_empty());
    }

    #[test]
    fn source_missing_freshness() {
        let mut desc = valid_descriptor();
        desc.requires.as_mut().unwrap().sources_of_truth = vec![SourceOfTruth {
            name: Some("Ledger".to_string()),
            location: Some("/srv/ledger".to_string()),
            ..Default::default()
        }];
        assert_eq!(
            messages(SourcesOfTruthRule.check(&desc)),
            vec!["sources_of_truth[0] missing 'freshness'"]
        );
    }

    #[test]
    fn source_with_hourly_freshness_is_invalid() {
        let mut desc = valid_descriptor();
        desc.requires.as_mut().unwrap().sources_of_truth = vec![SourceOfTruth {
            name: Some("Ledger".to_string()),
            location: Some("/srv/ledger".to_string()),
            freshness: Some("hourly".to_string()),
            ..Default::default()
        }];
        let diagnostics = SourcesOfTruthRule.check(&desc);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].message,
            "sources_of_truth[0] invalid freshness: hourly"
        );
        assert_eq!(
            diagnostics[0].field.as_deref(),
            Some("requires.sources_of_truth[0].freshness")
        );
    }

    #[test]
    fn every_bad_source_is_reported_with_its_index() {
        let mut desc = valid_descriptor();
        desc.requires.as_mut().unwrap().sources_of_truth =
            vec![SourceOfTruth::default(), SourceOfTruth::default()];
        let msgs = messages(SourcesOfTruthRule.check(&desc));
        assert_eq!(msgs.len(), 6);
        assert_eq!(msgs[0], "sources_of_truth[0] missing 'name'");
        assert_eq!(msgs[5], "sources_of_truth[1] missing 'freshness'");
    }

    #[test]
    fn output_missing_destination() {
        let mut desc = valid_descriptor();
        desc.produces.as_mut().unwrap().outputs = vec![Output {
            format: Some("markdown".to_string()),
            destination: None,
        }];
        assert_eq!(
            messages(OutputFieldsRule.check(&desc)),
            vec!["outputs[0] missing 'destination'"]
        );
    }

    #[test]
    fn confidence_without_maturity() {
        let mut desc = valid_descriptor();
        desc.confidence = Some(Confidence::default());
        assert_eq!(
            messages(ConfidenceRule.check(&desc)),
            vec!["Missing confidence.maturity"]
        );
    }

    #[test]
    fn confidence_with_unknown_maturity() {
        let mut desc = valid_descriptor();
        desc.confidence.as_mut().unwrap().maturity = Some("production".to_string());
        let msgs = messages(ConfidenceRule.check(&desc));
        assert_eq!(msgs.len(), 1);
        assert!(msgs[0].starts_with("Invalid maturity: production. Must be one of: "));
        assert!(msgs[0].contains("battle-tested"));
    }

    #[test]
    fn metadata_missing_created() {
        let mut desc = valid_descriptor();
        desc.metadata = Some(Metadata {
            author: Some("platform-team".to_string()),
            created: None,
        });
        assert_eq!(
            messages(MetadataFieldsRule.check(&desc)),
            vec!["Missing metadata.created"]
        );
    }
}
