//! Download planning: turn a resolved tag and platform policy into one
//! final artifact URL
//!
//! Planning is deterministic given (os, arch, tag); platform compatibility
//! fallbacks are pure functions, never runtime probes. The one side effect
//! a fallback produces is a warning message, returned to the caller rather
//! than emitted here.

pub mod fetch;

use std::fmt;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use semver::Version;

use crate::platform::{Arch, Os, PlatformPolicy};
use crate::resolver::ResolvedTag;

/// Base URL for release artifact downloads
pub const RELEASE_BASE_URL: &str = "https://github.com/oven-sh/bun/releases/download";

/// RFC 3986 unreserved characters stay, everything else is escaped.
/// Each path segment is encoded independently so reserved characters in
/// any field can neither break out of their segment nor get double-encoded.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// First release shipping native Windows ARM64 binaries
pub fn min_windows_arm64_version() -> Version {
    Version::new(1, 3, 10)
}

/// Whether a tag ships a native Windows ARM64 binary
///
/// Non-release tags (canary) track head and always do.
pub fn windows_arm64_native(tag: &ResolvedTag) -> bool {
    tag.version()
        .is_none_or(|version| *version >= min_windows_arm64_version())
}

/// A resolved download location, consumed exactly once by the installer
#[derive(Debug, Clone)]
pub struct ResolvedArtifact {
    /// Release tag segment or workflow run id the URL was derived from
    pub tag: String,
    pub url: String,
    /// Authorization header required to fetch the URL, if any
    pub auth_header: Option<String>,
}

/// A planned download plus any compatibility warning to surface
#[derive(Debug, Clone)]
pub struct DownloadPlan {
    pub artifact: ResolvedArtifact,
    pub warning: Option<String>,
}

/// Platform-concrete artifact variant after compatibility fallbacks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactVariant {
    os: Os,
    arch: Arch,
    baseline: bool,
    profile: bool,
}

impl ArtifactVariant {
    /// Apply the platform compatibility policies to a requested policy
    ///
    /// Windows/ARM64 downgrades to the x64 baseline build (with a warning)
    /// when the tag predates native ARM64 support. ARM targets never carry
    /// a baseline suffix regardless of the AVX2 flag.
    pub fn select(policy: &PlatformPolicy, native_arm64: bool) -> (Self, Option<String>) {
        let mut arch = policy.arch;
        let mut forced_baseline = false;
        let mut warning = None;

        if policy.os == Os::Windows && arch == Arch::Aarch64 && !native_arm64 {
            arch = Arch::X64;
            forced_baseline = true;
            warning = Some(
                "This Bun version does not provide native Windows ARM64 binaries. \
                 Falling back to the x64-baseline build, which runs under emulation \
                 and may be noticeably slower."
                    .to_string(),
            );
        }

        let baseline = if arch.is_arm() {
            false
        } else {
            forced_baseline || !policy.effective_avx2()
        };

        (
            Self {
                os: policy.os,
                arch,
                baseline,
                profile: policy.profile,
            },
            warning,
        )
    }

    fn baseline_suffix(&self) -> &'static str {
        if self.baseline { "-baseline" } else { "" }
    }

    fn profile_suffix(&self) -> &'static str {
        if self.profile { "-profile" } else { "" }
    }

    /// Artifact name, e.g. `bun-windows-x64-baseline`
    ///
    /// Workflow-run artifacts use this exact name; release downloads append
    /// `.zip`.
    pub fn name(&self) -> String {
        format!(
            "bun-{}-{}{}{}",
            self.os,
            self.arch,
            self.baseline_suffix(),
            self.profile_suffix()
        )
    }
}

impl fmt::Display for ArtifactVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

/// Plan the download for a resolved release tag
pub fn plan(tag: &ResolvedTag, policy: &PlatformPolicy) -> DownloadPlan {
    let (variant, warning) = ArtifactVariant::select(policy, windows_arm64_native(tag));
    let url = format!(
        "{RELEASE_BASE_URL}/{}/bun-{}-{}{}{}.zip",
        encode(&tag.segment()),
        encode(variant.os.name()),
        encode(variant.arch.name()),
        encode(variant.baseline_suffix()),
        encode(variant.profile_suffix()),
    );
    DownloadPlan {
        artifact: ResolvedArtifact {
            tag: tag.segment(),
            url,
            auth_header: None,
        },
        warning,
    }
}

/// A supplied custom URL bypasses tag resolution and platform policy
/// entirely; the caller assumes responsibility for its correctness.
pub fn plan_custom(url: &str) -> DownloadPlan {
    DownloadPlan {
        artifact: ResolvedArtifact {
            tag: "custom".to_string(),
            url: url.to_string(),
            auth_header: None,
        },
        warning: None,
    }
}

fn encode(segment: &str) -> String {
    utf8_percent_encode(segment, SEGMENT).to_string()
}
