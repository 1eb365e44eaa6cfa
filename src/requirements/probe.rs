//! Executable lookup and path helpers used by host probes.
//!
//! Tool presence is resolved by walking PATH directly rather than shelling
//! out to `which`, whose behavior varies across systems and is sometimes a
//! shell builtin with inconsistent error handling.

use std::path::{Path, PathBuf};

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Returns the first match that exists and is executable.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    if tool.contains(std::path::MAIN_SEPARATOR) {
        return None;
    }
    for dir in path_entries {
        for candidate in candidates(dir, tool) {
            if candidate.is_file() && is_executable(&candidate) {
                return Some(candidate);
            }
        }
    }
    None
}

#[cfg(unix)]
fn candidates(dir: &Path, tool: &str) -> Vec<PathBuf> {
    vec![dir.join(tool)]
}

#[cfg(not(unix))]
fn candidates(dir: &Path, tool: &str) -> Vec<PathBuf> {
    let mut out = vec![dir.join(tool)];
    for ext in ["exe", "cmd", "bat"] {
        out.push(dir.join(format!("{tool}.{ext}")));
    }
    out
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

/// Expand a leading `~` to `home`.
///
/// Only `~` and `~/...` are expanded; `~user/...` is returned unchanged.
pub fn expand_home(location: &str, home: Option<&Path>) -> PathBuf {
    let Some(home) = home else {
        return PathBuf::from(location);
    };
    if location == "~" {
        return home.to_path_buf();
    }
    match location.strip_prefix("~/") {
        Some(rest) => home.join(rest),
        None => PathBuf::from(location),
    }
}
