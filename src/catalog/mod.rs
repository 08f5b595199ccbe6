//! Remote release catalog client
//!
//! Pure I/O adapter over the GitHub API: tag listings for version
//! resolution and workflow-run/artifact listings for commit-SHA
//! resolution. No resolution logic lives here.

mod github;

pub use github::{GithubCatalog, WORKFLOW_RUNS_PAGE_SIZE};

use serde::Deserialize;

/// One entry of the git refs listing (`{"ref": "refs/tags/bun-v1.2.3"}`)
#[derive(Debug, Clone, Deserialize)]
pub struct TagRef {
    #[serde(rename = "ref")]
    pub name: String,
}

impl TagRef {
    #[allow(dead_code)] // test constructor; production refs come from the API
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// One entry of the workflow-runs listing
#[derive(Debug, Clone, Deserialize)]
pub struct WorkflowRun {
    pub id: u64,
    pub head_sha: String,
}

/// One artifact produced by a workflow run
#[derive(Debug, Clone, Deserialize)]
pub struct RunArtifact {
    pub name: String,
    pub archive_download_url: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WorkflowRunsPage {
    pub workflow_runs: Vec<WorkflowRun>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ArtifactsPage {
    pub artifacts: Vec<RunArtifact>,
}
