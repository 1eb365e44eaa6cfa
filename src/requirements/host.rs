//! Host access for requirement probes.
//!
//! Everything a probe needs from the machine goes through
//! [`HostEnvironment`], so probing logic can be tested against a scripted
//! host instead of the real one.

use crate::error::Result;
use crate::shell::{execute, CommandOptions, CommandResult};
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::probe::{parse_system_path, resolve_tool_path};

/// The host operations requirement probes depend on.
pub trait HostEnvironment {
    /// Run a command through the user's shell, bounded by `timeout`.
    fn run_command(&self, command: &str, timeout: Duration) -> Result<CommandResult>;

    /// Names of the host's network interfaces.
    fn network_interfaces(&self) -> Result<Vec<String>>;

    /// Whether `path` exists.
    fn path_exists(&self, path: &Path) -> bool;

    /// Resolve an executable on the search path.
    fn find_executable(&self, name: &str) -> Option<PathBuf>;

    /// The user's home directory, for `~` expansion.
    fn home_dir(&self) -> Option<PathBuf>;
}

/// The real machine.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemHost;

impl HostEnvironment for SystemHost {
    fn run_command(&self, command: &str, timeout: Duration) -> Result<CommandResult> {
        execute(command, &CommandOptions::with_timeout(timeout))
    }

    fn network_interfaces(&self) -> Result<Vec<String>> {
        Ok(list_interfaces()?)
    }

    fn path_exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn find_executable(&self, name: &str) -> Option<PathBuf> {
        resolve_tool_path(name, &parse_system_path())
    }

    fn home_dir(&self) -> Option<PathBuf> {
        dirs::home_dir()
    }
}

#[cfg(unix)]
fn list_interfaces() -> std::io::Result<Vec<String>> {
    use std::ffi::CStr;

    let mut head: *mut libc::ifaddrs = std::ptr::null_mut();
    // SAFETY: `getifaddrs` writes a list head into `head` on success; the
    // list is released with `freeifaddrs` below and not used afterwards.
    if unsafe { libc::getifaddrs(&mut head) } != 0 {
        return Err(std::io::Error::last_os_error());
    }

    let mut names: Vec<String> = Vec::new();
    let mut cursor = head;
    while !cursor.is_null() {
        // SAFETY: `cursor` is a non-null node of the list returned above.
        let entry = unsafe { &*cursor };
        if !entry.ifa_name.is_null() {
            // SAFETY: `ifa_name` is a NUL-terminated string owned by the list.
            let name = unsafe { CStr::from_ptr(entry.ifa_name) }
                .to_string_lossy()
                .into_owned();
            if !names.contains(&name) {
                names.push(name);
            }
        }
        cursor = entry.ifa_next;
    }

    // SAFETY: `head` came from a successful `getifaddrs` call.
    unsafe { libc::freeifaddrs(head) };
    Ok(names)
}

#[cfg(not(unix))]
fn list_interfaces() -> std::io::Result<Vec<String>> {
    Ok(Vec::new())
}
