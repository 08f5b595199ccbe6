//! Artifact download with a bounded retry loop
//!
//! The retry is an explicit loop carrying the remaining-attempt count and a
//! fixed backoff.

use std::fs::File;
use std::path::Path;
use std::time::Duration;

use super::ResolvedArtifact;
use crate::error::{Result, SetupError, fetch};
use crate::progress::DownloadProgress;

/// Additional attempts after the first failed one
pub const DOWNLOAD_RETRIES: u32 = 3;

/// Fixed delay between attempts; never grows, CI time budgets are small
pub const RETRY_DELAY: Duration = Duration::from_secs(2);

const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(600);

/// Download an artifact to `dest`, retrying transient failures
pub fn download(artifact: &ResolvedArtifact, dest: &Path) -> Result<()> {
    let client = reqwest::blocking::Client::builder()
        .user_agent(concat!("setup-bun/", env!("CARGO_PKG_VERSION")))
        .connect_timeout(Duration::from_secs(15))
        .timeout(DOWNLOAD_TIMEOUT)
        .build()
        .map_err(|err| fetch::failed(&artifact.url, err.to_string()))?;

    retry(DOWNLOAD_RETRIES, RETRY_DELAY, || {
        attempt(&client, artifact, dest)
    })
}

/// Run `operation`, retrying up to `retries` more times with a fixed delay
pub(crate) fn retry<T>(
    retries: u32,
    delay: Duration,
    mut operation: impl FnMut() -> Result<T>,
) -> Result<T> {
    let mut remaining = retries;
    loop {
        match operation() {
            Ok(value) => return Ok(value),
            Err(_) if remaining > 0 => {
                remaining -= 1;
                std::thread::sleep(delay);
            }
            Err(err) => return Err(err),
        }
    }
}

fn attempt(
    client: &reqwest::blocking::Client,
    artifact: &ResolvedArtifact,
    dest: &Path,
) -> Result<()> {
    let mut request = client.get(&artifact.url);
    if let Some(auth) = &artifact.auth_header {
        request = request.header("Authorization", auth);
    }
    let response = request
        .send()
        .map_err(|err| fetch::failed(&artifact.url, err.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(fetch::http_status(&artifact.url, status.as_u16()));
    }

    let progress = DownloadProgress::new(response.content_length(), "Downloading Bun".to_string());
    let result = write_body(response, dest, &progress);
    match &result {
        Ok(()) => progress.finish(),
        Err(_) => progress.abandon(),
    }
    result
}

fn write_body(
    response: reqwest::blocking::Response,
    dest: &Path,
    progress: &DownloadProgress,
) -> Result<()> {
    let url = response.url().to_string();
    let mut file = File::create(dest).map_err(|err| SetupError::FileWriteFailed {
        path: dest.display().to_string(),
        reason: err.to_string(),
    })?;
    let mut reader = progress.wrap_read(response);
    std::io::copy(&mut reader, &mut file).map_err(|err| fetch::failed(url, err.to_string()))?;
    Ok(())
}
