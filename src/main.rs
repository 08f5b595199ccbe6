//! setup-bun - install the Bun runtime in CI
//!
//! Resolves a loose version specifier (exact version, semver range, latest,
//! canary, or a commit SHA) into one platform-correct download, installs
//! the binary idempotently with a cross-invocation cache, and verifies it
//! by execution. The companion save-cache command runs at job end and
//! persists the binary to the cache when a save is owed.

use clap::Parser;

mod cache;
mod catalog;
mod cli;
mod commands;
mod config;
mod download;
mod error;
mod gha;
mod hash;
mod installer;
mod platform;
mod progress;
mod resolver;
mod state;
mod temp;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Install(args) => commands::install::run(args),
        Commands::SaveCache => commands::save_cache::run(),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
