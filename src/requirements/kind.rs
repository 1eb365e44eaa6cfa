//! Requirement classification.
//!
//! Access and environment requirements are free text. Each category has an
//! ordered table of (predicate, kind) rules; the first matching rule decides
//! how a requirement is probed and [`RequirementKind::Freeform`] is the
//! fallback. Source-of-truth locations are classified the same way once a
//! declared validation command has been ruled out.

use std::fmt;

/// The requirement lists a descriptor declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    SourcesOfTruth,
    Access,
    Environment,
}

impl Category {
    pub const ALL: [Category; 3] = [
        Category::SourcesOfTruth,
        Category::Access,
        Category::Environment,
    ];

    /// Section title used in reports.
    pub fn title(self) -> &'static str {
        match self {
            Category::SourcesOfTruth => "Sources of Truth",
            Category::Access => "Access Requirements",
            Category::Environment => "Environment",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// How a requirement is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequirementKind {
    /// A tool that must resolve on PATH.
    ToolPresence,
    /// A tunnel interface must be up.
    NetworkInterfaceCheck,
    /// Cloud credentials must be valid.
    CloudIdentityCheck,
    /// A local file or directory must exist.
    FilesystemPathCheck,
    /// Not mechanically checkable.
    Freeform,
}

/// A single entry of a classification table.
pub struct ClassificationRule {
    pub kind: RequirementKind,
    pub matches: fn(&str) -> bool,
}

const SOURCE_RULES: &[ClassificationRule] = &[ClassificationRule {
    kind: RequirementKind::FilesystemPathCheck,
    matches: looks_like_path,
}];

// Cloud identity is listed first so "AWS via VPN" probes credentials.
const ACCESS_RULES: &[ClassificationRule] = &[
    ClassificationRule {
        kind: RequirementKind::CloudIdentityCheck,
        matches: mentions_cloud_identity,
    },
    ClassificationRule {
        kind: RequirementKind::NetworkInterfaceCheck,
        matches: mentions_vpn,
    },
];

const ENVIRONMENT_RULES: &[ClassificationRule] = &[ClassificationRule {
    kind: RequirementKind::ToolPresence,
    matches: declares_installed_tool,
}];

/// The ordered classification table for a category.
pub fn rules_for(category: Category) -> &'static [ClassificationRule] {
    match category {
        Category::SourcesOfTruth => SOURCE_RULES,
        Category::Access => ACCESS_RULES,
        Category::Environment => ENVIRONMENT_RULES,
    }
}

/// Classify a requirement text (or source location) within a category.
pub fn classify(category: Category, text: &str) -> RequirementKind {
    rules_for(category)
        .iter()
        .find(|rule| (rule.matches)(text))
        .map(|rule| rule.kind)
        .unwrap_or(RequirementKind::Freeform)
}

/// Extract the tool name from a requirement like `"Python 3.10+ installed"`.
///
/// The tool is the first whitespace-separated token ending in `+`, with
/// trailing `+` and then trailing `v` removed.
pub fn tool_name(requirement: &str) -> Option<&str> {
    requirement
        .split_whitespace()
        .find(|word| word.ends_with('+'))
        .map(|word| word.trim_end_matches('+').trim_end_matches('v'))
        .filter(|tool| !tool.is_empty())
}

fn looks_like_path(location: &str) -> bool {
    location.starts_with('/') || location.starts_with('~')
}

fn mentions_cloud_identity(requirement: &str) -> bool {
    let lower = requirement.to_lowercase();
    lower.contains("aws") || lower.contains("sso")
}

fn mentions_vpn(requirement: &str) -> bool {
    requirement.to_lowercase().contains("vpn")
}

fn declares_installed_tool(requirement: &str) -> bool {
    requirement.to_lowercase().contains("installed") && tool_name(requirement).is_some()
}
