//! Host platform detection
//!
//! Detects the operating system and architecture the tool itself runs on,
//! and probes the host CPU for AVX2 support when the policy leaves the
//! flag unspecified on Linux/x64.

use super::{Arch, Os};
use crate::error::{Result, unsupported_arch, unsupported_os};

/// Operating system of the running host
pub fn host_os() -> Result<Os> {
    if cfg!(target_os = "linux") {
        Ok(Os::Linux)
    } else if cfg!(target_os = "macos") {
        Ok(Os::Darwin)
    } else if cfg!(target_os = "windows") {
        Ok(Os::Windows)
    } else {
        Err(unsupported_os(std::env::consts::OS))
    }
}

/// Architecture of the running host
pub fn host_arch() -> Result<Arch> {
    if cfg!(target_arch = "x86_64") {
        Ok(Arch::X64)
    } else if cfg!(target_arch = "aarch64") {
        Ok(Arch::Aarch64)
    } else if cfg!(target_arch = "x86") {
        Ok(Arch::X86)
    } else {
        Err(unsupported_arch(std::env::consts::ARCH))
    }
}

/// Probe the host CPU for AVX2 support
///
/// Reads the `flags` rows of `/proc/cpuinfo`. Returns `false` when the file
/// cannot be read or no flags row mentions avx2, so a failed probe selects
/// the baseline build rather than a binary the CPU cannot execute.
#[cfg(target_os = "linux")]
pub fn detect_avx2() -> bool {
    match std::fs::read_to_string("/proc/cpuinfo") {
        Ok(cpuinfo) => cpuinfo_has_avx2(&cpuinfo),
        Err(_) => false,
    }
}

/// Non-Linux hosts have no `/proc/cpuinfo`; the probe reports no support
/// and the baseline build is selected.
#[cfg(not(target_os = "linux"))]
pub fn detect_avx2() -> bool {
    false
}

#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
fn cpuinfo_has_avx2(cpuinfo: &str) -> bool {
    cpuinfo
        .lines()
        .filter(|line| line.starts_with("flags") || line.starts_with("Features"))
        .any(|line| line.split_whitespace().any(|flag| flag == "avx2"))
}
