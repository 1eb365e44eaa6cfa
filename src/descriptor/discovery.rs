//! Descriptor file discovery.
//!
//! Batch mode walks a directory tree and collects every `*.yaml` / `*.yml`
//! file, skipping files whose name contains `schema` (JSON-schema companions
//! live next to the descriptors) and hidden directories.

use crate::error::{CapgateError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Resolve the descriptor files to process for `path`.
///
/// A directory (or any path when `all` is set) is walked recursively; a plain
/// file is returned as-is. Results are sorted so output order is stable.
pub fn discover_descriptors(path: &Path, all: bool) -> Result<Vec<PathBuf>> {
    if !path.exists() {
        return Err(CapgateError::PathNotFound {
            path: path.to_path_buf(),
        });
    }

    if !path.is_dir() {
        return Ok(vec![path.to_path_buf()]);
    }

    if !all {
        tracing::debug!("{} is a directory, scanning recursively", path.display());
    }

    let mut found = Vec::new();
    collect(path, &mut found)?;
    found.sort();
    Ok(found)
}

/// Whether `path` names a descriptor file.
pub fn is_descriptor_file(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    let has_yaml_ext = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    );
    has_yaml_ext && !name.contains("schema")
}

fn collect(dir: &Path, out: &mut Vec<PathBuf>) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            let hidden = path
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.starts_with('.'));
            if !hidden {
                collect(&path, out)?;
            }
        } else if is_descriptor_file(&path) {
            out.push(path);
        }
    }
    Ok(())
}
