//! Capgate - readiness gate for declarative capability descriptors.
//!
//! A capability descriptor is a YAML file describing a unit of automatable
//! work: what triggers it, which sources of truth, access and tooling it
//! needs, what it produces and how mature it is. Capgate answers two
//! questions about such a file: is it well-formed, and can it be run on
//! this machine right now?
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`descriptor`] - Descriptor records, loading and file discovery
//! - [`error`] - Error types and result aliases
//! - [`lint`] - Structural validation rules
//! - [`report`] - Readiness aggregation and decisions
//! - [`requirements`] - Host probes for declared requirements
//! - [`shell`] - Bounded shell command execution
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use capgate::descriptor::parse_descriptor;
//! use capgate::lint::validate;
//! use std::path::Path;
//!
//! let desc = parse_descriptor("id: Bad_Id\n", Path::new("bad.yaml")).unwrap();
//! let outcome = validate(&desc);
//! assert!(outcome.errors.iter().any(|e| e.starts_with("Invalid id format")));
//! ```

pub mod cli;
pub mod descriptor;
pub mod error;
pub mod lint;
pub mod report;
pub mod requirements;
pub mod shell;
pub mod ui;

pub use error::{CapgateError, Result};
