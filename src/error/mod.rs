//! Error types and handling for setup-bun
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`resolve`]: Version/artifact resolution errors
//! - [`fetch`]: HTTP and download errors
//! - [`extract`]: Archive extraction errors
//! - [`cache`]: Cache store errors
//! - [`state`]: Cross-phase state errors
//! - [`platform`]: Platform policy errors
//! - [`fs`]: File system errors

// Declare submodules
pub mod cache;
pub mod extract;
pub mod fetch;
pub mod fs;
pub mod platform;
pub mod resolve;
pub mod state;

#[allow(unused_imports)]
pub use cache::{restore_failed as cache_restore_failed, save_failed as cache_save_failed};
#[allow(unused_imports)]
pub use extract::executable_not_found;
#[allow(unused_imports)]
pub use fetch::failed as fetch_failed;
#[allow(unused_imports)]
pub use fs::{io_error, read_failed as file_read_failed, write_failed as file_write_failed};
#[allow(unused_imports)]
pub use platform::{unsupported_arch, unsupported_os};
#[allow(unused_imports)]
pub use resolve::{
    invalid_specifier, no_matching_artifact, no_matching_release, no_workflow_run,
};
#[allow(unused_imports)]
pub use state::invalid as state_invalid;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for setup-bun operations
#[derive(Error, Diagnostic, Debug)]
pub enum SetupError {
    // Resolution errors
    #[error("No Bun release found matching version '{specifier}'")]
    #[diagnostic(
        code(setup_bun::resolve::no_matching_release),
        help("Check https://github.com/oven-sh/bun/releases for available versions")
    )]
    NoMatchingRelease { specifier: String },

    #[error("No workflow run found for SHA '{sha}'")]
    #[diagnostic(
        code(setup_bun::resolve::no_workflow_run),
        help("Only commits built by Bun's CI have downloadable artifacts")
    )]
    NoWorkflowRun { sha: String },

    #[error("No artifact named '{name}' in workflow run {run_id}")]
    #[diagnostic(
        code(setup_bun::resolve::no_matching_artifact),
        help("The requested platform may not be built for this commit")
    )]
    NoMatchingArtifact { name: String, run_id: u64 },

    #[error("Invalid version specifier '{input}': {reason}")]
    #[diagnostic(
        code(setup_bun::resolve::invalid_specifier),
        help("Valid formats: 1.2.3, ^1.0.0, latest, canary, or a 40-character commit SHA")
    )]
    InvalidSpecifier { input: String, reason: String },

    // Platform errors
    #[error("Unsupported operating system: {os}")]
    #[diagnostic(
        code(setup_bun::platform::unsupported_os),
        help("Supported operating systems: linux, darwin, windows")
    )]
    UnsupportedOs { os: String },

    #[error("Unsupported architecture: {arch}")]
    #[diagnostic(
        code(setup_bun::platform::unsupported_arch),
        help("Supported architectures: x64, aarch64, x86")
    )]
    UnsupportedArch { arch: String },

    // Fetch errors
    #[error("Failed to fetch {url}: {reason}")]
    #[diagnostic(code(setup_bun::fetch::failed))]
    FetchFailed { url: String, reason: String },

    // Extraction errors
    #[error("Could not find executable: bun")]
    #[diagnostic(
        code(setup_bun::extract::executable_not_found),
        help("The downloaded archive did not contain a bun binary")
    )]
    ExecutableNotFound,

    #[error("Failed to extract archive {path}: {reason}")]
    #[diagnostic(code(setup_bun::extract::archive_failed))]
    ExtractFailed { path: String, reason: String },

    // Verification errors
    #[error("Downloaded a new version of Bun, but failed to verify it. Try again.")]
    #[diagnostic(
        code(setup_bun::verify::failed),
        help("The download may be corrupted; re-running the job usually fixes this")
    )]
    VerifyFailed,

    // Cache errors
    #[error("Failed to restore from cache: {message}")]
    #[diagnostic(code(setup_bun::cache::restore_failed))]
    CacheRestoreFailed { message: String },

    #[error("Failed to save Bun to cache: {message}")]
    #[diagnostic(code(setup_bun::cache::save_failed))]
    CacheSaveFailed { message: String },

    // Cross-phase state errors
    #[error("No install-phase state found")]
    #[diagnostic(
        code(setup_bun::state::missing),
        help(
            "'setup-bun save-cache' must run in the same job as 'setup-bun install'; the install phase persists the cache decision this phase consumes"
        )
    )]
    StateMissing,

    #[error("Install-phase state is invalid: {reason}")]
    #[diagnostic(code(setup_bun::state::invalid))]
    StateInvalid { reason: String },

    // Configuration errors
    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(setup_bun::config::invalid))]
    ConfigInvalid { message: String },

    #[error("Could not determine home directory")]
    #[diagnostic(code(setup_bun::config::no_home_dir))]
    HomeDirNotFound,

    // File system errors
    #[error("Failed to read file: {path}")]
    #[diagnostic(code(setup_bun::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}")]
    #[diagnostic(code(setup_bun::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(setup_bun::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for SetupError {
    fn from(err: std::io::Error) -> Self {
        SetupError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, SetupError>;
