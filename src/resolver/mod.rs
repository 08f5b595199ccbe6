//! Version resolution: turn a loose specifier into one concrete release tag
//!
//! Resolution is a pure function over an in-memory [`TagCatalog`]; the
//! catalog is fetched at most once per invocation, and pinned exact
//! versions never fetch it at all (the release tag is constructed
//! directly). Commit SHAs resolve through workflow runs instead of tags,
//! see [`sha`].

pub mod sha;

use std::fmt;

use semver::{Version, VersionReq};

use crate::catalog::TagRef;
use crate::error::{Result, invalid_specifier, no_matching_release};

/// Release tag prefix used by the Bun repository (e.g. `bun-v1.2.3`)
pub const TAG_PREFIX: &str = "bun-v";

/// Name of the floating head-tracking tag
pub const CANARY_TAG: &str = "canary";

/// Parsed user-supplied version specifier
#[derive(Debug, Clone)]
pub struct Specifier {
    raw: String,
    kind: SpecifierKind,
}

#[derive(Debug, Clone)]
pub enum SpecifierKind {
    /// Highest released version (also the default for absent input)
    Latest,
    /// The floating canary tag
    Canary,
    /// An exact, pinned version (`1.2.3`, `v1.2.3`, `bun-v1.2.3`)
    Exact(Version),
    /// A semver range (`^1.0.0`, `0.7`, `1.2.x`)
    Range(VersionReq),
    /// A 40-character commit SHA, resolved through workflow runs
    CommitSha(String),
}

impl Specifier {
    /// Parse a specifier, treating empty/absent input as `latest`
    pub fn parse(input: &str) -> Result<Self> {
        let raw = input.trim();
        let kind = if raw.is_empty() || raw.eq_ignore_ascii_case("latest") {
            SpecifierKind::Latest
        } else if raw.eq_ignore_ascii_case(CANARY_TAG) {
            SpecifierKind::Canary
        } else if is_commit_sha(raw) {
            SpecifierKind::CommitSha(raw.to_ascii_lowercase())
        } else {
            // Accept already-prefixed exact tags and a leading `v`
            let stripped = raw
                .strip_prefix(TAG_PREFIX)
                .or_else(|| raw.strip_prefix('v'))
                .unwrap_or(raw);
            if let Ok(version) = Version::parse(stripped) {
                SpecifierKind::Exact(version)
            } else {
                match VersionReq::parse(stripped) {
                    Ok(req) => SpecifierKind::Range(req),
                    Err(err) => return Err(invalid_specifier(raw, err.to_string())),
                }
            }
        };
        Ok(Self {
            raw: raw.to_string(),
            kind,
        })
    }

    pub fn kind(&self) -> &SpecifierKind {
        &self.kind
    }

    /// Whether this specifier may participate in the download cache
    ///
    /// Floating sentinels must never become cache keys: "latest" today is
    /// not "latest" tomorrow. Exact versions, ranges and commit SHAs are
    /// cacheable because the cache key is derived from the resolved URL.
    pub fn is_cacheable(&self) -> bool {
        !matches!(self.kind, SpecifierKind::Latest | SpecifierKind::Canary)
    }

    /// Whether an installed binary reporting `bare_version` satisfies this
    /// specifier without any network access
    ///
    /// Only pinned exact versions match an existing installation; floating
    /// specifiers, ranges and SHAs always go through resolution.
    pub fn matches_installed(&self, bare_version: &str) -> bool {
        match &self.kind {
            SpecifierKind::Exact(requested) => {
                let normalized = bare_version.trim().trim_start_matches(['v', 'V']);
                Version::parse(normalized)
                    .map(|installed| installed == *requested)
                    .unwrap_or(false)
            }
            _ => false,
        }
    }

    /// Normalized name used for the exact raw-tag match during resolution
    fn exact_name(&self) -> Option<String> {
        match &self.kind {
            SpecifierKind::Canary => Some(CANARY_TAG.to_string()),
            SpecifierKind::Exact(version) => Some(version.to_string()),
            SpecifierKind::Range(_) => Some(self.raw.clone()),
            _ => None,
        }
    }
}

impl fmt::Display for Specifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.raw.is_empty() {
            f.write_str("latest")
        } else {
            f.write_str(&self.raw)
        }
    }
}

fn is_commit_sha(input: &str) -> bool {
    input.len() == 40 && input.chars().all(|c| c.is_ascii_hexdigit())
}

/// The release tag a specifier resolved to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedTag {
    /// A released version; its tag segment is `bun-v<version>`
    Release(Version),
    /// The floating canary tag tracking head
    Canary,
}

impl ResolvedTag {
    /// The tag path segment in release download URLs
    pub fn segment(&self) -> String {
        match self {
            ResolvedTag::Release(version) => format!("{TAG_PREFIX}{version}"),
            ResolvedTag::Canary => CANARY_TAG.to_string(),
        }
    }

    /// The parsed version, when this tag is a release
    pub fn version(&self) -> Option<&Version> {
        match self {
            ResolvedTag::Release(version) => Some(version),
            ResolvedTag::Canary => None,
        }
    }
}

impl fmt::Display for ResolvedTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segment())
    }
}

/// Normalized release tags fetched once from the remote catalog
#[derive(Debug, Clone)]
pub struct TagCatalog {
    names: Vec<String>,
}

impl TagCatalog {
    /// Build a catalog from raw git ref listings
    ///
    /// Keeps `refs/tags/bun-v*` (stripped to the bare version) and the
    /// canary tag; everything else in the repository is not a release.
    pub fn from_refs(refs: &[TagRef]) -> Self {
        let names = refs
            .iter()
            .filter_map(|tag_ref| {
                let name = tag_ref.name.strip_prefix("refs/tags/")?;
                if let Some(version) = name.strip_prefix(TAG_PREFIX) {
                    Some(version.to_string())
                } else if name == CANARY_TAG {
                    Some(name.to_string())
                } else {
                    None
                }
            })
            .filter(|name| !name.is_empty())
            .collect();
        Self { names }
    }

    /// Build a catalog from already-normalized tag names
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Tags that parse as semantic versions, sorted ascending by precedence
    fn sorted_versions(&self) -> Vec<Version> {
        let mut versions: Vec<Version> = self
            .names
            .iter()
            .filter_map(|name| Version::parse(name).ok())
            .collect();
        versions.sort();
        versions
    }
}

/// Resolve a specifier against the catalog
///
/// A literal match against the raw tag names wins over interpretation, so
/// `canary` and already-released exact versions never run through semver
/// logic. Otherwise semver-parseable tags are ordered by precedence and the
/// highest tag satisfying the specifier is selected. An empty match set is
/// fatal; no fallback version is ever substituted.
pub fn resolve(specifier: &Specifier, catalog: &TagCatalog) -> Result<ResolvedTag> {
    if let Some(name) = specifier.exact_name() {
        if catalog.contains(&name) {
            return Ok(match Version::parse(&name) {
                Ok(version) => ResolvedTag::Release(version),
                Err(_) => ResolvedTag::Canary,
            });
        }
    }

    let versions = catalog.sorted_versions();
    let matched = match specifier.kind() {
        SpecifierKind::Latest => versions.last().cloned(),
        SpecifierKind::Exact(requested) => versions.iter().find(|v| *v == requested).cloned(),
        SpecifierKind::Range(req) => versions.iter().rev().find(|v| req.matches(v)).cloned(),
        // Canary without a canary tag in the catalog resolves to nothing;
        // SHAs never reach tag resolution
        SpecifierKind::Canary | SpecifierKind::CommitSha(_) => None,
    };

    matched
        .map(ResolvedTag::Release)
        .ok_or_else(|| no_matching_release(specifier.to_string()))
}
