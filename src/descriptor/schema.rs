//! Capability descriptor schema definitions.
//!
//! This module contains the records that map to the descriptor YAML format.
//! Every field is optional at parse time so that presence can be checked by
//! the lint rules instead of failing deserialization. Sequences default to
//! empty and a YAML `null` is treated the same as an absent key.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Root record for a capability descriptor file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CapabilityDescriptor {
    /// Stable identifier (lowercase alphanumeric with hyphens)
    #[serde(deserialize_with = "scalar::optional")]
    pub id: Option<String>,

    /// Human-readable name
    #[serde(deserialize_with = "scalar::optional")]
    pub name: Option<String>,

    /// Domain the capability belongs to, see [`Domain`]
    #[serde(deserialize_with = "scalar::optional")]
    pub domain: Option<String>,

    /// Semantic version, `X.Y.Z`
    #[serde(deserialize_with = "scalar::optional")]
    pub version: Option<String>,

    /// What the capability does and what triggers it
    pub action: Option<Action>,

    /// Runtime preconditions
    pub requires: Option<Requirements>,

    /// Declared outputs
    pub produces: Option<Produces>,

    /// Self-assessed confidence
    pub confidence: Option<Confidence>,

    /// Authorship information
    pub metadata: Option<Metadata>,

    /// Fields dropped at load time because their YAML had the wrong shape
    #[serde(skip)]
    pub malformed: Vec<Malformed>,
}

/// A field whose value had the wrong YAML shape, e.g. `action: run it`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Malformed {
    /// Dotted path, e.g. `requires.sources_of_truth[1]`
    pub field: String,
    pub expected: &'static str,
    pub found: &'static str,
}

impl Malformed {
    /// Whether this entry is the top-level key `name`.
    pub fn is_top_level(&self, name: &str) -> bool {
        self.field == name
    }
}

/// The `action` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Action {
    #[serde(deserialize_with = "scalar::optional")]
    pub description: Option<String>,
    #[serde(deserialize_with = "scalar::optional")]
    pub trigger: Option<String>,
}

/// The `requires` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Requirements {
    /// External data sources the capability reads from
    #[serde(deserialize_with = "scalar::seq")]
    pub sources_of_truth: Vec<SourceOfTruth>,

    /// Free-text access requirements ("VPN connected", "AWS SSO login")
    #[serde(deserialize_with = "scalar::list")]
    pub access: Vec<String>,

    /// Free-text environment requirements ("terraform v1.5+ installed")
    #[serde(deserialize_with = "scalar::list")]
    pub environment: Vec<String>,
}

/// A declared source of truth.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceOfTruth {
    #[serde(deserialize_with = "scalar::optional")]
    pub name: Option<String>,

    /// Filesystem path or opaque identifier
    #[serde(deserialize_with = "scalar::optional")]
    pub location: Option<String>,

    /// Shell command whose exit status proves the source is reachable
    #[serde(deserialize_with = "scalar::optional")]
    pub validation: Option<String>,

    /// Expected data recency, see [`Freshness`]
    #[serde(deserialize_with = "scalar::optional")]
    pub freshness: Option<String>,
}

impl SourceOfTruth {
    /// Display name, `"Unknown"` when the entry has none.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Unknown")
    }

    /// The validation command, if one is declared and non-blank.
    pub fn validation_command(&self) -> Option<&str> {
        self.validation
            .as_deref()
            .map(str::trim)
            .filter(|cmd| !cmd.is_empty())
    }

    /// The location, empty when none is declared.
    pub fn location(&self) -> &str {
        self.location.as_deref().unwrap_or("")
    }
}

/// The `produces` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Produces {
    #[serde(deserialize_with = "scalar::seq")]
    pub outputs: Vec<Output>,
}

/// A declared output. Only checked for field presence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Output {
    #[serde(deserialize_with = "scalar::optional")]
    pub format: Option<String>,
    #[serde(deserialize_with = "scalar::optional")]
    pub destination: Option<String>,
}

/// The `confidence` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Confidence {
    /// Maturity level, see [`Maturity`]
    #[serde(deserialize_with = "scalar::optional")]
    pub maturity: Option<String>,

    #[serde(deserialize_with = "scalar::list")]
    pub known_gaps: Vec<String>,

    #[serde(deserialize_with = "scalar::list")]
    pub failure_modes: Vec<String>,
}

/// The `metadata` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metadata {
    #[serde(deserialize_with = "scalar::optional")]
    pub author: Option<String>,
    #[serde(deserialize_with = "scalar::optional")]
    pub created: Option<String>,
}

impl CapabilityDescriptor {
    /// Display name, `"Unknown Capability"` when the descriptor has none.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Unknown Capability")
    }

    /// Identifier, `"unknown"` when the descriptor has none.
    pub fn display_id(&self) -> &str {
        self.id.as_deref().unwrap_or("unknown")
    }

    /// Maturity as written, `"unknown"` when absent.
    pub fn display_maturity(&self) -> &str {
        self.confidence
            .as_ref()
            .and_then(|c| c.maturity.as_deref())
            .unwrap_or("unknown")
    }

    /// Declared sources of truth (empty when `requires` is absent).
    pub fn sources_of_truth(&self) -> &[SourceOfTruth] {
        self.requires
            .as_ref()
            .map(|r| r.sources_of_truth.as_slice())
            .unwrap_or_default()
    }

    /// Declared access requirements.
    pub fn access(&self) -> &[String] {
        self.requires
            .as_ref()
            .map(|r| r.access.as_slice())
            .unwrap_or_default()
    }

    /// Declared environment requirements.
    pub fn environment(&self) -> &[String] {
        self.requires
            .as_ref()
            .map(|r| r.environment.as_slice())
            .unwrap_or_default()
    }

    /// Declared known gaps.
    pub fn known_gaps(&self) -> &[String] {
        self.confidence
            .as_ref()
            .map(|c| c.known_gaps.as_slice())
            .unwrap_or_default()
    }

    /// Declared failure modes.
    pub fn failure_modes(&self) -> &[String] {
        self.confidence
            .as_ref()
            .map(|c| c.failure_modes.as_slice())
            .unwrap_or_default()
    }
}

/// Capability domains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    ContextManagement,
    PaymentServices,
    DevelopmentTooling,
    Observability,
    CiCd,
    DataEngineering,
}

impl Domain {
    /// Every domain, in documentation order.
    pub const ALL: &'static [Domain] = &[
        Domain::ContextManagement,
        Domain::PaymentServices,
        Domain::DevelopmentTooling,
        Domain::Observability,
        Domain::CiCd,
        Domain::DataEngineering,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Domain::ContextManagement => "context-management",
            Domain::PaymentServices => "payment-services",
            Domain::DevelopmentTooling => "development-tooling",
            Domain::Observability => "observability",
            Domain::CiCd => "ci-cd",
            Domain::DataEngineering => "data-engineering",
        }
    }
}

/// Maturity levels, least to most proven.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Maturity {
    Experimental,
    Developing,
    Stable,
    BattleTested,
}

impl Maturity {
    pub const ALL: &'static [Maturity] = &[
        Maturity::Experimental,
        Maturity::Developing,
        Maturity::Stable,
        Maturity::BattleTested,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Maturity::Experimental => "experimental",
            Maturity::Developing => "developing",
            Maturity::Stable => "stable",
            Maturity::BattleTested => "battle-tested",
        }
    }
}

/// How fresh a source of truth is expected to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Freshness {
    RealTime,
    Minutes,
    Hours,
    Daily,
    Weekly,
    Static,
}

impl Freshness {
    pub const ALL: &'static [Freshness] = &[
        Freshness::RealTime,
        Freshness::Minutes,
        Freshness::Hours,
        Freshness::Daily,
        Freshness::Weekly,
        Freshness::Static,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Freshness::RealTime => "real-time",
            Freshness::Minutes => "minutes",
            Freshness::Hours => "hours",
            Freshness::Daily => "daily",
            Freshness::Weekly => "weekly",
            Freshness::Static => "static",
        }
    }
}

/// Error returned when a string is not a member of a closed enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariant {
    pub value: String,
    pub expected: String,
}

impl fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. Must be one of: {}", self.value, self.expected)
    }
}

impl std::error::Error for UnknownVariant {}

/// Comma-separated list of the wire names in `all`.
pub fn joined_names<T: Copy>(all: &[T], name: fn(T) -> &'static str) -> String {
    all.iter().map(|v| name(*v)).collect::<Vec<_>>().join(", ")
}

fn parse_variant<T: Copy>(s: &str, all: &[T], name: fn(T) -> &'static str) -> Result<T, UnknownVariant> {
    all.iter()
        .copied()
        .find(|v| name(*v) == s)
        .ok_or_else(|| UnknownVariant {
            value: s.to_string(),
            expected: joined_names(all, name),
        })
}

impl FromStr for Domain {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant(s, Domain::ALL, Domain::as_str)
    }
}

impl FromStr for Maturity {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant(s, Maturity::ALL, Maturity::as_str)
    }
}

impl FromStr for Freshness {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant(s, Freshness::ALL, Freshness::as_str)
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Maturity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Freshness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lenient deserializers for hand-written YAML.
///
/// Authors write `version: 1.2` or `created: 2024-01-15` without quotes, so
/// scalar fields accept strings, numbers and booleans and keep their textual
/// form. Nulls become `None` or an empty sequence.
mod scalar {
    use serde::de::{self, Deserialize, Deserializer};
    use serde_yaml::Value;

    fn to_text<E: de::Error>(value: Value) -> Result<Option<String>, E> {
        match value {
            Value::Null => Ok(None),
            Value::String(s) => Ok(Some(s)),
            Value::Number(n) => Ok(Some(n.to_string())),
            Value::Bool(b) => Ok(Some(b.to_string())),
            Value::Tagged(tagged) => to_text(tagged.value),
            Value::Sequence(_) => Err(E::custom("expected a scalar value, found a sequence")),
            Value::Mapping(_) => Err(E::custom("expected a scalar value, found a mapping")),
        }
    }

    pub fn optional<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        to_text(Value::deserialize(deserializer)?)
    }

    pub fn list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let items = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
        let mut out = Vec::with_capacity(items.len());
        for item in items {
            if let Some(text) = to_text(item)? {
                out.push(text);
            }
        }
        Ok(out)
    }

    pub fn seq<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de>,
    {
        Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(yaml: &str) -> CapabilityDescriptor {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn absent_fields_are_none() {
        let desc = parse("id: only-id\n");
        assert_eq!(desc.id.as_deref(), Some("only-id"));
        assert!(desc.name.is_none());
        assert!(desc.requires.is_none());
    }

    #[test]
    fn null_is_treated_as_absent() {
        let desc = parse("id:\nrequires:\n  access: ~\n");
        assert!(desc.id.is_none());
        assert!(desc.access().is_empty());
    }

    #[test]
    fn numeric_version_keeps_textual_form() {
        let desc = parse("version: 1.2\n");
        assert_eq!(desc.version.as_deref(), Some("1.2"));
    }

    #[test]
    fn unquoted_date_is_text() {
        let desc = parse("metadata:\n  author: ops\n  created: 2024-01-15\n");
        let meta = desc.metadata.unwrap();
        assert_eq!(meta.created.as_deref(), Some("2024-01-15"));
    }

    #[test]
    fn nested_sources_parse() {
        let desc = parse(
            r#"
requires:
  sources_of_truth:
    - name: Runbook
      location: ~/runbooks/deploy.md
      freshness: weekly
    - name: Ledger
      location: postgres://ledger
      validation: pg_isready
      freshness: real-time
"#,
        );
        let sources = desc.sources_of_truth();
        assert_eq!(sources.len(), 2);
        assert_eq!(sources[0].display_name(), "Runbook");
        assert!(sources[0].validation_command().is_none());
        assert_eq!(sources[1].validation_command(), Some("pg_isready"));
    }

    #[test]
    fn blank_validation_is_ignored() {
        let source = SourceOfTruth {
            validation: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(source.validation_command().is_none());
    }

    #[test]
    fn mapping_where_scalar_expected_is_rejected() {
        let result: Result<CapabilityDescriptor, _> = serde_yaml::from_str("id:\n  nested: true\n");
        assert!(result.is_err());
    }

    #[test]
    fn malformed_fields_are_not_serialized() {
        let desc = CapabilityDescriptor {
            id: Some("x".to_string()),
            malformed: vec![Malformed {
                field: "action".to_string(),
                expected: "a mapping",
                found: "a string",
            }],
            ..Default::default()
        };
        let json = serde_json::to_value(&desc).unwrap();
        assert!(json.get("malformed").is_none());
        assert!(desc.malformed[0].is_top_level("action"));
    }

    #[test]
    fn display_fallbacks() {
        let desc = CapabilityDescriptor::default();
        assert_eq!(desc.display_name(), "Unknown Capability");
        assert_eq!(desc.display_id(), "unknown");
        assert_eq!(desc.display_maturity(), "unknown");
        assert!(desc.known_gaps().is_empty());
        assert!(desc.failure_modes().is_empty());
    }

    #[test]
    fn domain_round_trips_through_str() {
        for domain in Domain::ALL {
            assert_eq!(domain.as_str().parse::<Domain>().unwrap(), *domain);
        }
    }

    #[test]
    fn unknown_domain_lists_valid_set() {
        let err = "unlisted".parse::<Domain>().unwrap_err();
        let msg = err.to_string();
        assert!(msg.starts_with("unlisted. Must be one of: "));
        assert!(msg.contains("context-management"));
        assert!(msg.contains("data-engineering"));
    }

    #[test]
    fn freshness_rejects_hourly() {
        assert!("hourly".parse::<Freshness>().is_err());
        assert_eq!("hours".parse::<Freshness>().unwrap(), Freshness::Hours);
    }

    #[test]
    fn maturity_is_ordered() {
        assert!(Maturity::Experimental < Maturity::BattleTested);
        assert_eq!(
            "battle-tested".parse::<Maturity>().unwrap(),
            Maturity::BattleTested
        );
    }
}
