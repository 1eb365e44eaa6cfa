//! Descriptor schema validation.
//!
//! This module checks that a capability descriptor is structurally
//! well-formed through a pluggable rule-based system. Validation is pure:
//! no I/O, and the same descriptor always yields the same ordered output.
//!
//! # Overview
//!
//! - **Rules** - Individual validation checks ([`LintRule`] trait)
//! - **Registry** - Ordered collection of rules ([`RuleRegistry`])
//! - **Diagnostics** - Issue reports with severity and suggestions ([`LintDiagnostic`])
//! - **Outcome** - Errors and warnings split out for reporting ([`ValidationOutcome`])
//!
//! # Example
//!
//! ```
//! use capgate::descriptor::CapabilityDescriptor;
//! use capgate::lint::validate;
//!
//! let outcome = validate(&CapabilityDescriptor::default());
//! assert!(outcome.errors.contains(&"Missing required field: id".to_string()));
//! assert!(!outcome.is_valid());
//! ```

pub mod diagnostic;
pub mod registry;
pub mod rule;
pub mod rules;
pub mod validate;

pub use diagnostic::LintDiagnostic;
pub use registry::RuleRegistry;
pub use rule::{LintRule, RuleId, Severity};
pub use rules::{
    ActionFieldsRule, ConfidenceRule, DomainRule, FailureModesRule, FieldShapeRule, IdFormatRule,
    KnownGapsRule, MetadataFieldsRule, OutputFieldsRule, RequiredFieldsRule, SourcesOfTruthRule,
    VersionFormatRule,
};
pub use validate::{validate, ValidationOutcome};
