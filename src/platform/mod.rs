//! Platform policy: target operating system, architecture and build flags
//!
//! A [`PlatformPolicy`] is constructed once per invocation from CLI/environment
//! input, defaulting to the running host, and passed explicitly into the
//! resolver and download planner. It is never mutated afterwards.

pub mod detection;

use std::fmt;

use crate::error::{Result, unsupported_arch, unsupported_os};

/// Target operating system for the downloaded artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Os {
    Linux,
    Darwin,
    Windows,
}

impl Os {
    /// Parse an OS name as supplied by CLI input or a CI matrix
    pub fn parse(input: &str) -> Result<Self> {
        match input.to_ascii_lowercase().as_str() {
            "linux" => Ok(Os::Linux),
            "darwin" | "macos" => Ok(Os::Darwin),
            "windows" | "win32" => Ok(Os::Windows),
            other => Err(unsupported_os(other)),
        }
    }

    /// Canonical name used in artifact file names
    pub fn name(&self) -> &'static str {
        match self {
            Os::Linux => "linux",
            Os::Darwin => "darwin",
            Os::Windows => "windows",
        }
    }
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Target CPU architecture for the downloaded artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arch {
    X64,
    Aarch64,
    X86,
}

impl Arch {
    /// Parse an architecture name as supplied by CLI input or a CI matrix
    pub fn parse(input: &str) -> Result<Self> {
        match input.to_ascii_lowercase().as_str() {
            "x64" | "x86_64" | "amd64" => Ok(Arch::X64),
            "aarch64" | "arm64" => Ok(Arch::Aarch64),
            "x86" | "i686" => Ok(Arch::X86),
            other => Err(unsupported_arch(other)),
        }
    }

    /// Canonical name used in artifact file names
    pub fn name(&self) -> &'static str {
        match self {
            Arch::X64 => "x64",
            Arch::Aarch64 => "aarch64",
            Arch::X86 => "x86",
        }
    }

    /// ARM targets never carry a baseline suffix; AVX2 is an x86 extension
    pub fn is_arm(&self) -> bool {
        matches!(self, Arch::Aarch64)
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Immutable platform policy for one invocation
#[derive(Debug, Clone)]
pub struct PlatformPolicy {
    pub os: Os,
    pub arch: Arch,
    /// Requested AVX2 support; `None` means auto-detect (Linux/x64) or default
    pub avx2: Option<bool>,
    /// Whether to download the profile (debug symbol) build variant
    pub profile: bool,
}

impl PlatformPolicy {
    /// Build a policy from optional CLI fields, defaulting to the host
    pub fn from_parts(
        os: Option<&str>,
        arch: Option<&str>,
        avx2: Option<bool>,
        profile: bool,
    ) -> Result<Self> {
        let os = match os {
            Some(value) => Os::parse(value)?,
            None => detection::host_os()?,
        };
        let arch = match arch {
            Some(value) => Arch::parse(value)?,
            None => detection::host_arch()?,
        };
        Ok(Self {
            os,
            arch,
            avx2,
            profile,
        })
    }

    /// Resolve the effective AVX2 setting for this policy
    ///
    /// ARM targets always report `true` (no baseline suffix exists for them).
    /// On Linux/x64 an unspecified flag is resolved from host CPU features,
    /// falling back to baseline when detection fails. Elsewhere the explicit
    /// flag, or `true`, is used verbatim.
    pub fn effective_avx2(&self) -> bool {
        if self.arch.is_arm() {
            return true;
        }
        match self.avx2 {
            Some(explicit) => explicit,
            None if self.os == Os::Linux && self.arch == Arch::X64 => detection::detect_avx2(),
            None => true,
        }
    }
}
