//! Installed binary verification by execution
//!
//! The binary is probed with `--revision` first (version plus build
//! metadata, e.g. `1.2.3+abcdef`), falling back to `--version`. Both
//! probes tolerate non-zero exit codes and trust the stdout pattern
//! instead; some builds print version info while still exiting non-zero
//! for unrelated reasons. A binary answering neither probe yields `None`,
//! which only the orchestrator escalates to a fatal error.

use std::fmt;
use std::path::Path;
use std::process::Command;

use semver::Version;

/// The version-plus-build-metadata string reported by an installed binary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstalledRevision(String);

impl InstalledRevision {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The version without build metadata (`1.2.3+abcdef` -> `1.2.3`)
    ///
    /// Installed-state matching uses the bare version; callers needing
    /// exact reproducibility use the full revision.
    pub fn bare_version(&self) -> &str {
        self.0.split('+').next().unwrap_or(&self.0)
    }
}

impl fmt::Display for InstalledRevision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Read the revision of an installed binary, if it reports one
pub fn read_revision(exe: &Path) -> Option<InstalledRevision> {
    probe(exe, "--revision").or_else(|| probe(exe, "--version"))
}

fn probe(exe: &Path, flag: &str) -> Option<InstalledRevision> {
    let output = Command::new(exe).arg(flag).output().ok()?;
    let stdout = String::from_utf8_lossy(&output.stdout);
    parse_revision(&stdout)
}

fn parse_revision(stdout: &str) -> Option<InstalledRevision> {
    let first_token = stdout.split_whitespace().next()?;
    Version::parse(first_token)
        .ok()
        .map(|_| InstalledRevision(first_token.to_string()))
}
