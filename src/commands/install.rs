//! Install command implementation
//!
//! The job-start phase:
//! 1. Gather CLI/environment input into one immutable request
//! 2. Run the install orchestration (resolve, cache, download, verify)
//! 3. Publish step outputs for downstream workflow steps
//! 4. Persist the cache decision for the save-cache phase

use console::style;

use crate::cache::DirCacheStore;
use crate::cli::InstallArgs;
use crate::config::{InstallRequest, version_file};
use crate::error::Result;
use crate::gha;
use crate::installer::{self, InstallOutcome};
use crate::platform::PlatformPolicy;
use crate::resolver::Specifier;
use crate::state::{self, CacheState};

/// Run the install command
pub fn run(args: InstallArgs) -> Result<()> {
    let request = build_request(&args)?;
    let store = DirCacheStore::from_env();

    let outcome = installer::install(&request, &store)?;
    publish(&outcome)?;

    println!(
        "{} Installed Bun {} at {}",
        style("✓").green(),
        style(&outcome.revision).bold(),
        outcome.bun_path.display()
    );
    Ok(())
}

/// Construct the immutable request from CLI/environment input
///
/// An explicit version argument wins over the version file.
fn build_request(args: &InstallArgs) -> Result<InstallRequest> {
    let mut version = args.version.clone();
    if version.is_none() {
        if let Some(path) = &args.version_file {
            version = version_file::read_version_from_file(path)?;
        }
    }

    let specifier = Specifier::parse(version.as_deref().unwrap_or_default())?;
    let policy = PlatformPolicy::from_parts(
        args.os.as_deref(),
        args.arch.as_deref(),
        args.avx2,
        args.profile,
    )?;

    Ok(InstallRequest {
        specifier,
        policy,
        custom_url: args.custom_url.clone(),
        token: args.token.clone(),
        no_cache: args.no_cache,
    })
}

/// Publish step outputs and persist the cache decision
fn publish(outcome: &InstallOutcome) -> Result<()> {
    gha::set_output("bun-version", &outcome.version)?;
    gha::set_output("bun-revision", outcome.revision.as_str())?;
    gha::set_output("bun-path", &outcome.bun_path.display().to_string())?;
    gha::set_output("bun-download-url", &outcome.url)?;
    gha::set_output("cache-hit", if outcome.cache_hit { "true" } else { "false" })?;

    state::persist(&CacheState::new(
        outcome.cache_enabled,
        outcome.cache_hit,
        outcome.bun_path.clone(),
        outcome.url.clone(),
    ))
}
