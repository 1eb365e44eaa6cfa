//! Capability descriptor model.
//!
//! This module handles everything about descriptor files up to the point
//! where they are checked:
//! - Record definitions and closed enumerations in [`schema`]
//! - Parsing a single file in [`loader`], with mis-shaped fields set aside
//!   by the `shape` pass
//! - Finding descriptor files for batch runs in [`discovery`]
//!
//! # Example
//!
//! ```
//! use capgate::descriptor::{parse_descriptor, Domain};
//! use std::path::Path;
//!
//! let yaml = "id: rotate-keys\ndomain: observability\n";
//! let desc = parse_descriptor(yaml, Path::new("rotate-keys.yaml")).unwrap();
//! assert_eq!(desc.id.as_deref(), Some("rotate-keys"));
//! assert_eq!(desc.domain.as_deref().unwrap().parse::<Domain>().unwrap(), Domain::Observability);
//! ```

pub mod discovery;
pub mod loader;
pub mod schema;
mod shape;

pub use discovery::{discover_descriptors, is_descriptor_file};
pub use loader::{load_descriptor, parse_descriptor};
pub use schema::{
    joined_names, Action, CapabilityDescriptor, Confidence, Domain, Freshness, Malformed, Maturity,
    Metadata, Output, Produces, Requirements, SourceOfTruth, UnknownVariant,
};
