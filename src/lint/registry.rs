//! Ordered rule set.
//!
//! Rules run in registration order, and report output follows that order,
//! so the built-in list below is also the order errors are printed in.

use super::diagnostic::LintDiagnostic;
use super::rule::LintRule;
use super::rules::{
    ActionFieldsRule, ConfidenceRule, DomainRule, FailureModesRule, FieldShapeRule, IdFormatRule,
    KnownGapsRule, MetadataFieldsRule, OutputFieldsRule, RequiredFieldsRule, SourcesOfTruthRule,
    VersionFormatRule,
};
use crate::descriptor::CapabilityDescriptor;

#[derive(Default)]
pub struct RuleRegistry {
    rules: Vec<Box<dyn LintRule>>,
}

impl RuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Presence and shape checks first, then value formats, then nested
    /// sections, then the documentation warnings.
    pub fn with_builtins() -> Self {
        let builtins: [Box<dyn LintRule>; 12] = [
            Box::new(RequiredFieldsRule),
            Box::new(FieldShapeRule),
            Box::new(IdFormatRule),
            Box::new(DomainRule),
            Box::new(VersionFormatRule),
            Box::new(ActionFieldsRule),
            Box::new(SourcesOfTruthRule),
            Box::new(OutputFieldsRule),
            Box::new(ConfidenceRule),
            Box::new(MetadataFieldsRule),
            Box::new(KnownGapsRule),
            Box::new(FailureModesRule),
        ];
        let mut registry = Self::new();
        for rule in builtins {
            registry.register(rule);
        }
        registry
    }

    /// Add a rule. A rule whose id is already registered replaces the old
    /// one without changing its position.
    pub fn register(&mut self, rule: Box<dyn LintRule>) {
        let id = rule.id();
        if let Some(slot) = self.rules.iter_mut().find(|r| r.id() == id) {
            *slot = rule;
        } else {
            self.rules.push(rule);
        }
    }

    pub fn get(&self, id: &str) -> Option<&dyn LintRule> {
        self.iter().find(|r| r.id().as_str() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn LintRule> {
        self.rules.iter().map(|r| r.as_ref())
    }

    /// Run every rule, concatenating diagnostics in rule order.
    pub fn check(&self, descriptor: &CapabilityDescriptor) -> Vec<LintDiagnostic> {
        self.iter().flat_map(|rule| rule.check(descriptor)).collect()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
