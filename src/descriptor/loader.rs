//! Descriptor file loading.
//!
//! A descriptor file must hold exactly one YAML mapping. Anything else
//! (syntax errors, an empty file, a top-level list or scalar) is a
//! [`CapgateError::DescriptorParse`] for that file only. Fields with the
//! wrong shape inside the mapping are not parse errors: they are dropped
//! and listed in [`CapabilityDescriptor::malformed`].

use crate::descriptor::schema::CapabilityDescriptor;
use crate::descriptor::shape;
use crate::error::{CapgateError, Result};
use serde_yaml::Value;
use std::fs;
use std::path::Path;

/// Read and parse the descriptor at `path`.
pub fn load_descriptor(path: &Path) -> Result<CapabilityDescriptor> {
    let content = fs::read_to_string(path)?;
    parse_descriptor(&content, path)
}

/// Parse descriptor text. `path` is only used for error reporting.
pub fn parse_descriptor(content: &str, path: &Path) -> Result<CapabilityDescriptor> {
    let value: Value =
        serde_yaml::from_str(content).map_err(|e| CapgateError::DescriptorParse {
            path: path.to_path_buf(),
            message: format!("Invalid YAML: {}", e),
        })?;

    let Value::Mapping(mut root) = value else {
        return Err(CapgateError::DescriptorParse {
            path: path.to_path_buf(),
            message: "File is not a valid YAML mapping".to_string(),
        });
    };

    let malformed = shape::normalize(&mut root);
    let mut descriptor: CapabilityDescriptor = serde_yaml::from_value(Value::Mapping(root))
        .map_err(|e| CapgateError::DescriptorParse {
            path: path.to_path_buf(),
            message: format!("Invalid descriptor structure: {}", e),
        })?;
    descriptor.malformed = malformed;

    tracing::debug!(
        malformed = descriptor.malformed.len(),
        "Parsed descriptor {}",
        path.display()
    );
    Ok(descriptor)
}
