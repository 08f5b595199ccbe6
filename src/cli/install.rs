use std::path::PathBuf;

use clap::Parser;

/// Arguments for the install command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Install an exact version:\n    setup-bun install 1.2.3\n\n\
                   Install the highest release in a range:\n    setup-bun install \"^1.0.0\"\n\n\
                   Install the build for a commit:\n    setup-bun install <40-char-sha> --token $GITHUB_TOKEN\n\n\
                   Read the version from a project file:\n    setup-bun install --version-file .bun-version\n\n\
                   Install for an explicit platform:\n    setup-bun install 1.2.3 --os windows --arch aarch64")]
pub struct InstallArgs {
    /// Version specifier: exact version, semver range, latest, canary,
    /// or a 40-character commit SHA. Defaults to latest.
    #[arg(env = "BUN_VERSION")]
    pub version: Option<String>,

    /// Read the version specifier from a file
    /// (.bun-version, .tool-versions, or package.json)
    #[arg(long = "version-file", value_name = "PATH")]
    pub version_file: Option<PathBuf>,

    /// Direct download URL, bypassing version resolution and platform policy
    #[arg(long = "download-url", env = "BUN_DOWNLOAD_URL", value_name = "URL")]
    pub custom_url: Option<String>,

    /// Target operating system (defaults to the host)
    #[arg(long, env = "SETUP_BUN_OS", value_name = "OS")]
    pub os: Option<String>,

    /// Target architecture (defaults to the host)
    #[arg(long, env = "SETUP_BUN_ARCH", value_name = "ARCH")]
    pub arch: Option<String>,

    /// Whether the binary may use AVX2 (auto-detected on Linux/x64 when omitted)
    #[arg(long, env = "SETUP_BUN_AVX2", value_name = "BOOL")]
    pub avx2: Option<bool>,

    /// Download the profile (debug symbol) build variant
    #[arg(long, env = "SETUP_BUN_PROFILE")]
    pub profile: bool,

    /// API token for catalog requests and workflow artifact downloads
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Disable the cross-invocation cache for this run
    #[arg(long = "no-cache", env = "SETUP_BUN_NO_CACHE")]
    pub no_cache: bool,
}
