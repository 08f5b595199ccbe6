//! Commit-SHA resolution through workflow runs
//!
//! Arbitrary commits have no release tag; their artifacts live on the CI
//! workflow run that built them. The run listing is paginated until the
//! head commit matches or the listing is exhausted, then the run's
//! artifacts are searched for the exact platform name. Partial or fuzzy
//! artifact matches are never accepted; picking an artifact for the wrong
//! platform silently would be a correctness bug.

use crate::catalog::{GithubCatalog, RunArtifact, WorkflowRun};
use crate::download::{ArtifactVariant, DownloadPlan, ResolvedArtifact};
use crate::error::{Result, no_matching_artifact, no_workflow_run};
use crate::platform::PlatformPolicy;

/// Resolve a commit SHA into a downloadable workflow-run artifact
///
/// Workflow artifacts are head builds, so the Windows/ARM64 native policy
/// always applies. Fetching an artifact archive requires authorization,
/// which is carried on the returned plan.
pub fn resolve_by_sha(
    catalog: &GithubCatalog,
    sha: &str,
    policy: &PlatformPolicy,
) -> Result<DownloadPlan> {
    let run = find_run_for_sha(|page| catalog.list_workflow_runs(page), sha)?;
    let artifacts = catalog.list_run_artifacts(run.id)?;

    let (variant, warning) = ArtifactVariant::select(policy, true);
    let artifact = select_artifact(&artifacts, &variant.name(), run.id)?;

    Ok(DownloadPlan {
        artifact: ResolvedArtifact {
            tag: run.id.to_string(),
            url: artifact.archive_download_url.clone(),
            auth_header: catalog.auth_header(),
        },
        warning,
    })
}

/// Paginate the run listing until a run's head commit equals `sha`
///
/// Exhaustion is fatal with no retry; a missing CI run for a SHA will not
/// appear later within the same invocation.
fn find_run_for_sha<F>(mut list_page: F, sha: &str) -> Result<WorkflowRun>
where
    F: FnMut(u32) -> Result<Vec<WorkflowRun>>,
{
    let mut page = 1;
    loop {
        let runs = list_page(page)?;
        if runs.is_empty() {
            return Err(no_workflow_run(sha));
        }
        if let Some(run) = runs.into_iter().find(|run| run.head_sha == sha) {
            return Ok(run);
        }
        page += 1;
    }
}

/// Select the artifact whose name equals the platform name exactly
fn select_artifact<'a>(
    artifacts: &'a [RunArtifact],
    expected_name: &str,
    run_id: u64,
) -> Result<&'a RunArtifact> {
    artifacts
        .iter()
        .find(|artifact| artifact.name == expected_name)
        .ok_or_else(|| no_matching_artifact(expected_name, run_id))
}
