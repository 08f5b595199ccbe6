//! Blocking GitHub API client for the Bun repository

use std::time::Duration;

use super::{ArtifactsPage, RunArtifact, TagRef, WorkflowRun, WorkflowRunsPage};
use crate::error::{Result, fetch};

const DEFAULT_API_BASE_URL: &str = "https://api.github.com";
const REPOSITORY: &str = "oven-sh/bun";
const USER_AGENT: &str = concat!("setup-bun/", env!("CARGO_PKG_VERSION"));

/// Page size for the paginated workflow-runs listing
pub const WORKFLOW_RUNS_PAGE_SIZE: u32 = 100;

/// Catalog client against the GitHub API
pub struct GithubCatalog {
    client: reqwest::blocking::Client,
    base_url: String,
    token: Option<String>,
}

impl GithubCatalog {
    /// Create a client with the default GitHub API base URL
    pub fn new(token: Option<String>) -> Result<Self> {
        Self::with_base_url(token, DEFAULT_API_BASE_URL)
    }

    /// Create a client against an explicit API base URL
    pub fn with_base_url(token: Option<String>, base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(Duration::from_secs(15))
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(|err| fetch::failed(DEFAULT_API_BASE_URL, err.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token,
        })
    }

    /// Bearer authorization header value, when a token was supplied
    pub fn auth_header(&self) -> Option<String> {
        self.token
            .as_deref()
            .map(|token| format!("Bearer {token}"))
    }

    /// List all release tag refs
    pub fn list_tags(&self) -> Result<Vec<TagRef>> {
        let url = format!("{}/repos/{REPOSITORY}/git/refs/tags", self.base_url);
        self.get_json(&url)
    }

    /// List one page of workflow runs (1-based page number)
    pub fn list_workflow_runs(&self, page: u32) -> Result<Vec<WorkflowRun>> {
        let url = format!(
            "{}/repos/{REPOSITORY}/actions/runs?per_page={WORKFLOW_RUNS_PAGE_SIZE}&page={page}",
            self.base_url
        );
        let listing: WorkflowRunsPage = self.get_json(&url)?;
        Ok(listing.workflow_runs)
    }

    /// List the artifacts produced by one workflow run
    pub fn list_run_artifacts(&self, run_id: u64) -> Result<Vec<RunArtifact>> {
        let url = format!(
            "{}/repos/{REPOSITORY}/actions/runs/{run_id}/artifacts",
            self.base_url
        );
        let listing: ArtifactsPage = self.get_json(&url)?;
        Ok(listing.artifacts)
    }

    fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T> {
        let mut request = self.client.get(url);
        if let Some(auth) = self.auth_header() {
            request = request.header("Authorization", auth);
        }
        let response = request
            .send()
            .map_err(|err| fetch::failed(url, err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(fetch::http_status(url, status.as_u16()));
        }

        response
            .json()
            .map_err(|err| fetch::failed(url, err.to_string()))
    }
}
