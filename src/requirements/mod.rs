//! Requirement probing.
//!
//! Checks the requirements a capability descriptor declares against the
//! current host and reports each as passed, failed or unknown.
//!
//! # Example
//!
//! ```no_run
//! use capgate::descriptor::load_descriptor;
//! use capgate::requirements::{Category, ProbeSettings, RequirementProber, SystemHost};
//! use std::path::Path;
//!
//! let descriptor = load_descriptor(Path::new("capabilities/deploy.yaml"))?;
//! let host = SystemHost;
//! let prober = RequirementProber::new(&host, ProbeSettings::default());
//! if let Some(requires) = &descriptor.requires {
//!     for result in prober.probe(requires, Category::Access) {
//!         println!("{:?} {}: {}", result.status, result.subject, result.message);
//!     }
//! }
//! # Ok::<(), capgate::CapgateError>(())
//! ```

pub mod checker;
pub mod host;
pub mod kind;
pub mod probe;
pub mod status;

pub use checker::{ProbeSettings, RequirementProber};
pub use host::{HostEnvironment, SystemHost};
pub use kind::{classify, Category, RequirementKind};
pub use status::{CheckResult, CheckStatus, MESSAGE_LIMIT};
