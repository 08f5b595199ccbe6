//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - install: Install command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};

pub mod completions;
pub mod install;

pub use completions::CompletionsArgs;
pub use install::InstallArgs;

/// setup-bun - install the Bun runtime in CI
#[derive(Parser, Debug)]
#[command(
    name = "setup-bun",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Install the Bun runtime in CI",
    long_about = "setup-bun resolves a loose version specifier (exact version, semver range, \
                  latest, canary, or a commit SHA) into one platform-correct download, installs \
                  the binary idempotently with a cross-invocation cache, and verifies it by \
                  execution. Run 'install' at job start and 'save-cache' at job end.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  setup-bun install                \x1b[90m# Install the latest release\x1b[0m\n   \
                  setup-bun install 1.2.3          \x1b[90m# Install an exact version\x1b[0m\n   \
                  setup-bun install \"^1.0.0\"       \x1b[90m# Install the highest 1.x release\x1b[0m\n   \
                  setup-bun install canary         \x1b[90m# Install the canary build\x1b[0m\n   \
                  setup-bun save-cache             \x1b[90m# Job-end phase: persist to cache\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve and install Bun (job-start phase)
    Install(InstallArgs),

    /// Save the installed binary to the cache (job-end phase)
    #[command(name = "save-cache")]
    SaveCache,

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
