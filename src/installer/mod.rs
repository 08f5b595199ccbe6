//! Install orchestration
//!
//! The top-level flow: plan the download, reuse a pre-existing compatible
//! install when the request is pinned, consult the cross-invocation cache,
//! otherwise download, extract, place and verify the binary. Produces the
//! outcome the command layer turns into step outputs and the persisted
//! cache decision.

pub mod extract;
pub mod place;
pub mod verify;

use std::fs;
use std::path::{Path, PathBuf};

use console::style;

use crate::cache::CacheStore;
use crate::catalog::GithubCatalog;
use crate::config::InstallRequest;
use crate::download::{self, DownloadPlan, ResolvedArtifact, fetch};
use crate::error::{Result, SetupError, io_error};
use crate::gha;
use crate::hash;
use crate::resolver::{self, ResolvedTag, SpecifierKind, TagCatalog};
use crate::temp;
use verify::InstalledRevision;

/// What one install invocation produced
#[derive(Debug)]
pub struct InstallOutcome {
    /// Bare resolved version (`1.2.3`)
    pub version: String,
    /// Full revision reported by the binary (`1.2.3+abcdef0`)
    pub revision: InstalledRevision,
    pub bun_path: PathBuf,
    pub url: String,
    pub cache_enabled: bool,
    pub cache_hit: bool,
}

/// Run the install flow for one request
pub fn install(request: &InstallRequest, store: &dyn CacheStore) -> Result<InstallOutcome> {
    let plan = plan_request(request)?;
    if let Some(message) = &plan.warning {
        gha::warning(message);
    }
    let artifact = plan.artifact;

    let bin_dir = bin_dir()?;
    fs::create_dir_all(&bin_dir)?;
    prepend_path(&bin_dir)?;

    let bun_path = bin_dir.join(executable_name("bun"));
    place::create_alias(&bun_path, &bin_dir.join(executable_name("bunx")))?;

    let mut revision: Option<InstalledRevision> = None;
    let mut cache_hit = false;

    // A pre-existing install satisfying a pinned request is the single
    // largest latency win: zero HTTP requests for the whole invocation.
    if request.custom_url.is_none() && bun_path.is_file() {
        if let Some(existing) = verify::read_revision(&bun_path) {
            if request.specifier.matches_installed(existing.bare_version()) {
                println!(
                    "Using existing Bun installation: {}",
                    style(&existing).green()
                );
                revision = Some(existing);
                cache_hit = true;
            }
        }
    }

    let cache_enabled = request.cache_eligible() && store.is_available();
    let cache_key = hash::cache_key(&artifact.url);

    if revision.is_none() && cache_enabled {
        if store.restore(&[bun_path.clone()], &cache_key)? {
            match verify::read_revision(&bun_path) {
                Some(restored) => {
                    println!("Using a cached version of Bun: {}", style(&restored).green());
                    revision = Some(restored);
                    cache_hit = true;
                }
                None => gha::warning(
                    "Found a cached version of Bun, but it appears to be corrupted? \
                     Downloading a new version.",
                ),
            }
        }
    }

    if revision.is_none() {
        println!("Downloading a new version of Bun: {}", artifact.url);
        revision = download_and_install(&artifact, &bun_path)?;
    }

    let revision = revision.ok_or(SetupError::VerifyFailed)?;
    Ok(InstallOutcome {
        version: revision.bare_version().to_string(),
        revision,
        bun_path,
        url: artifact.url,
        cache_enabled,
        cache_hit,
    })
}

/// Resolve the request into a concrete download plan
///
/// Pinned exact versions construct their release tag directly and perform
/// no catalog fetch; everything else fetches the catalog exactly once.
fn plan_request(request: &InstallRequest) -> Result<DownloadPlan> {
    if let Some(url) = &request.custom_url {
        return Ok(download::plan_custom(url));
    }
    match request.specifier.kind() {
        SpecifierKind::Exact(version) => Ok(download::plan(
            &ResolvedTag::Release(version.clone()),
            &request.policy,
        )),
        SpecifierKind::CommitSha(sha) => {
            let catalog = GithubCatalog::new(request.token.clone())?;
            resolver::sha::resolve_by_sha(&catalog, sha, &request.policy)
        }
        _ => {
            let client = GithubCatalog::new(request.token.clone())?;
            let catalog = TagCatalog::from_refs(&client.list_tags()?);
            let tag = resolver::resolve(&request.specifier, &catalog)?;
            Ok(download::plan(&tag, &request.policy))
        }
    }
}

fn download_and_install(
    artifact: &ResolvedArtifact,
    bun_path: &Path,
) -> Result<Option<InstalledRevision>> {
    let scratch = tempfile::Builder::new()
        .prefix("setup-bun")
        .tempdir_in(temp::temp_dir_base())
        .map_err(|err| io_error(err.to_string()))?;

    let download_path = scratch.path().join("bun-download");
    fetch::download(artifact, &download_path)?;

    // Extraction sniffs the file extension, so normalize it first
    let zip_path = extract::add_extension(&download_path, ".zip")?;
    let extracted = scratch.path().join("extracted");
    extract::extract_archive(&zip_path, &extracted)?;

    let executable = extract::find_executable(&extracted)?;
    place::place_binary(&executable, bun_path)?;

    Ok(verify::read_revision(bun_path))
}

/// The fixed home-relative install directory (`~/.bun/bin`)
pub fn bin_dir() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(".bun").join("bin"))
        .ok_or(SetupError::HomeDirNotFound)
}

/// Executable file name for the current host
pub fn executable_name(name: &str) -> String {
    if cfg!(windows) {
        format!("{name}.exe")
    } else {
        name.to_string()
    }
}

/// Prepend the install directory to the search path, for this process
/// (the verification probes) and for subsequent job steps
fn prepend_path(dir: &Path) -> Result<()> {
    gha::add_path(dir)?;

    let current = std::env::var_os("PATH").unwrap_or_default();
    let mut paths = vec![dir.to_path_buf()];
    paths.extend(std::env::split_paths(&current));
    let joined = std::env::join_paths(paths).map_err(|err| io_error(err.to_string()))?;
    // Single logical thread of control; no concurrent env readers exist
    unsafe { std::env::set_var("PATH", joined) };
    Ok(())
}
