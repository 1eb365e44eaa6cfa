//! Which shell runs probe commands, and whether we are under CI.

use std::path::{Path, PathBuf};

/// Environment variables set by the CI systems we know about.
const CI_MARKERS: &[&str] = &[
    "CI",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "CIRCLECI",
    "TRAVIS",
    "JENKINS_URL",
    "BUILDKITE",
];

/// Shell families, grouped by how they accept a command string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellKind {
    /// `sh` and anything POSIX-like.
    Posix,
    PowerShell,
    Cmd,
}

impl ShellKind {
    pub fn of(program: &Path) -> Self {
        let stem = program
            .file_stem()
            .map(|s| s.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        match stem.as_str() {
            "pwsh" | "powershell" => ShellKind::PowerShell,
            "cmd" => ShellKind::Cmd,
            _ => ShellKind::Posix,
        }
    }

    /// Flag that makes the shell run the next argument as a command. Never
    /// a login or interactive flag: profile output would end up in the
    /// captured diagnostic.
    pub fn command_flag(self) -> &'static str {
        match self {
            ShellKind::Posix => "-c",
            ShellKind::PowerShell => "-Command",
            ShellKind::Cmd => "/C",
        }
    }
}

/// The shell validation commands run under.
#[derive(Debug, Clone)]
pub struct ProbeShell {
    pub program: PathBuf,
    pub kind: ShellKind,
}

impl ProbeShell {
    /// `/bin/sh` on unix, `%COMSPEC%` (falling back to `cmd.exe`) on Windows.
    pub fn system() -> Self {
        let program = if cfg!(windows) {
            std::env::var_os("COMSPEC")
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("cmd.exe"))
        } else {
            PathBuf::from("/bin/sh")
        };
        let kind = ShellKind::of(&program);
        Self { program, kind }
    }
}

/// Whether we are running under a CI system.
pub fn is_ci() -> bool {
    CI_MARKERS.iter().any(|var| std::env::var_os(var).is_some())
}
