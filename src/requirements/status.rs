//! Check result types for requirement probing.
//!
//! Every probed requirement produces one [`CheckResult`] whose
//! [`CheckStatus`] is tri-state: a requirement that cannot be checked
//! mechanically is `Unknown`, which is an outcome and not an error.

use serde::Serialize;

/// Maximum length, in characters, of a check result message.
pub const MESSAGE_LIMIT: usize = 100;

/// Outcome of checking a single requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    /// Mechanically verified as satisfied.
    Passed,
    /// Mechanically verified as violated.
    Failed,
    /// Not mechanically verifiable.
    Unknown,
}

impl CheckStatus {
    /// Map a definite boolean outcome.
    pub fn from_bool(passed: bool) -> Self {
        if passed {
            CheckStatus::Passed
        } else {
            CheckStatus::Failed
        }
    }
}

/// The result of checking one requirement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    /// The requirement that was checked (source name or requirement text).
    pub subject: String,
    /// Tri-state outcome.
    pub status: CheckStatus,
    /// Short diagnostic, at most [`MESSAGE_LIMIT`] characters.
    pub message: String,
}

impl CheckResult {
    /// Create a result, truncating the message to [`MESSAGE_LIMIT`].
    pub fn new(subject: impl Into<String>, status: CheckStatus, message: impl AsRef<str>) -> Self {
        Self {
            subject: subject.into(),
            status,
            message: truncate_message(message.as_ref(), MESSAGE_LIMIT),
        }
    }

    pub fn passed(subject: impl Into<String>, message: impl AsRef<str>) -> Self {
        Self::new(subject, CheckStatus::Passed, message)
    }

    pub fn failed(subject: impl Into<String>, message: impl AsRef<str>) -> Self {
        Self::new(subject, CheckStatus::Failed, message)
    }

    pub fn unknown(subject: impl Into<String>, message: impl AsRef<str>) -> Self {
        Self::new(subject, CheckStatus::Unknown, message)
    }
}

/// Trim `message` and cut it to at most `limit` characters.
pub fn truncate_message(message: &str, limit: usize) -> String {
    let trimmed = message.trim();
    match trimmed.char_indices().nth(limit) {
        Some((idx, _)) => trimmed[..idx].to_string(),
        None => trimmed.to_string(),
    }
}
