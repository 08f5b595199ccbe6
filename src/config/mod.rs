//! Immutable per-invocation configuration
//!
//! All environment and CLI input is gathered into one [`InstallRequest`]
//! at process entry and passed explicitly into the resolver, planner and
//! orchestrator. Nothing downstream reads the process environment ad hoc,
//! which keeps the pipeline testable as pure functions.

pub mod version_file;

use crate::platform::PlatformPolicy;
use crate::resolver::Specifier;

/// Everything one install invocation needs, constructed once and never
/// mutated
#[derive(Debug, Clone)]
pub struct InstallRequest {
    pub specifier: Specifier,
    pub policy: PlatformPolicy,
    /// Direct download URL bypassing resolution and platform policy
    pub custom_url: Option<String>,
    /// API token for catalog requests and artifact downloads
    pub token: Option<String>,
    /// Disable the cross-invocation cache for this run
    pub no_cache: bool,
}

impl InstallRequest {
    /// Whether this request may participate in the cross-invocation cache
    ///
    /// Disabled for custom URLs (their contents are opaque), floating
    /// sentinels (never valid cache keys) and the explicit override.
    pub fn cache_eligible(&self) -> bool {
        !self.no_cache && self.custom_url.is_none() && self.specifier.is_cacheable()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{Arch, Os};

    fn request(specifier: &str, custom_url: Option<&str>, no_cache: bool) -> InstallRequest {
        InstallRequest {
            specifier: Specifier::parse(specifier).unwrap(),
            policy: PlatformPolicy {
                os: Os::Linux,
                arch: Arch::X64,
                avx2: Some(true),
                profile: false,
            },
            custom_url: custom_url.map(String::from),
            token: None,
            no_cache,
        }
    }

    #[test]
    fn test_cache_eligible_pinned() {
        assert!(request("1.0.0", None, false).cache_eligible());
        assert!(request("^1.0.0", None, false).cache_eligible());
    }

    #[test]
    fn test_cache_disabled_for_floating_specifiers() {
        assert!(!request("latest", None, false).cache_eligible());
        assert!(!request("canary", None, false).cache_eligible());
    }

    #[test]
    fn test_cache_disabled_for_custom_url() {
        assert!(!request("1.0.0", Some("https://example.com/bun.zip"), false).cache_eligible());
    }

    #[test]
    fn test_cache_disabled_by_override() {
        assert!(!request("1.0.0", None, true).cache_eligible());
    }
}
