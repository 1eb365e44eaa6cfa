//! Built-in lint rules.
//!
//! This module contains all the built-in validation rules for capability
//! descriptors.

pub mod documentation;
pub mod field_shape;
pub mod identity;
pub mod required_fields;
pub mod sections;

pub use documentation::{FailureModesRule, KnownGapsRule};
pub use field_shape::FieldShapeRule;
pub use identity::{is_valid_version, DomainRule, IdFormatRule, VersionFormatRule};
pub use required_fields::{RequiredFieldsRule, REQUIRED_TOP_LEVEL};
pub use sections::{
    ActionFieldsRule, ConfidenceRule, MetadataFieldsRule, OutputFieldsRule, SourcesOfTruthRule,
};
