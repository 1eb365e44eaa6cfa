//! Error types for capgate operations.
//!
//! This module defines [`CapgateError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Structural problems in a descriptor are *not* errors; they are lint
//!   diagnostics collected by [`crate::lint`]
//! - Probe failures are downgraded to failed check results by
//!   [`crate::requirements`] and never escape a single requirement
//! - `CapgateError` covers the remaining cases: unreadable paths, unparseable
//!   files and subprocesses that could not run to completion

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for capgate operations.
#[derive(Debug, Error)]
pub enum CapgateError {
    /// The path given on the command line does not exist.
    #[error("File not found: {path}")]
    PathNotFound { path: PathBuf },

    /// A descriptor file could not be parsed into a mapping.
    #[error("Failed to parse descriptor at {path}: {message}")]
    DescriptorParse { path: PathBuf, message: String },

    /// A probe command ran past its deadline and was killed.
    #[error("Command timed out")]
    CommandTimedOut { command: String, timeout_secs: u64 },

    /// A probe command could not be spawned or waited on.
    #[error("Command failed: {command}: {message}")]
    CommandFailed { command: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for capgate operations.
pub type Result<T> = std::result::Result<T, CapgateError>;
