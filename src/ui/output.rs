//! Output verbosity.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Full report plus run details.
    Verbose,
    /// Full report.
    #[default]
    Normal,
    /// Per-file verdicts and final totals only.
    Quiet,
}

impl OutputMode {
    /// Build the mode from the global `--verbose` / `--quiet` flags.
    ///
    /// `--quiet` wins when both are given.
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        if quiet {
            Self::Quiet
        } else if verbose {
            Self::Verbose
        } else {
            Self::Normal
        }
    }

    /// Check if this mode shows run details.
    pub fn shows_details(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Check if this mode shows report bodies (headers, sections, items).
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Quiet)
    }
}
