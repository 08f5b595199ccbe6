//! Common test utilities for setup-bun integration tests

use std::path::PathBuf;

use tempfile::TempDir;

/// A sandboxed runner environment: temp home, cache root and runner files
#[allow(dead_code)]
pub struct TestEnv {
    /// Temporary directory backing the whole environment
    pub temp: TempDir,
    pub home: PathBuf,
    pub cache_dir: PathBuf,
    pub github_output: PathBuf,
    pub github_state: PathBuf,
    pub github_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let root = temp.path();
        let home = root.join("home");
        let cache_dir = root.join("cache");
        std::fs::create_dir_all(&home).expect("Failed to create home directory");
        std::fs::create_dir_all(&cache_dir).expect("Failed to create cache directory");

        // Runner files are append-format; they must exist as regular files
        let github_output = root.join("github_output");
        let github_state = root.join("github_state");
        let github_path = root.join("github_path");
        for file in [&github_output, &github_state, &github_path] {
            std::fs::write(file, "").expect("Failed to create runner file");
        }

        Self {
            temp,
            home,
            cache_dir,
            github_output,
            github_state,
            github_path,
        }
    }

    /// Apply the environment to a command under test
    pub fn apply(&self, cmd: &mut assert_cmd::Command) {
        cmd.env("HOME", &self.home)
            .env("USERPROFILE", &self.home)
            .env("SETUP_BUN_CACHE_DIR", &self.cache_dir)
            .env("GITHUB_OUTPUT", &self.github_output)
            .env("GITHUB_STATE", &self.github_state)
            .env("GITHUB_PATH", &self.github_path)
            .env_remove("BUN_VERSION")
            .env_remove("BUN_DOWNLOAD_URL")
            .env_remove("GITHUB_TOKEN")
            .env_remove("SETUP_BUN_OS")
            .env_remove("SETUP_BUN_ARCH")
            .env_remove("SETUP_BUN_AVX2")
            .env_remove("SETUP_BUN_PROFILE")
            .env_remove("SETUP_BUN_NO_CACHE")
            .env_remove("STATE_cache");
    }

    /// Path where the install phase places the binary
    pub fn bun_path(&self) -> PathBuf {
        self.home.join(".bun").join("bin").join("bun")
    }

    /// Create a fake bun binary that reports the given revision
    #[cfg(unix)]
    pub fn write_fake_bun(&self, revision: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let bin_dir = self.home.join(".bun").join("bin");
        std::fs::create_dir_all(&bin_dir).expect("Failed to create bin directory");
        let bun = bin_dir.join("bun");
        std::fs::write(&bun, format!("#!/bin/sh\necho {revision}\n"))
            .expect("Failed to write fake bun");
        std::fs::set_permissions(&bun, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to set permissions");
        bun
    }

    /// Read the step outputs written by the install phase
    pub fn read_outputs(&self) -> String {
        std::fs::read_to_string(&self.github_output).expect("Failed to read GITHUB_OUTPUT")
    }

    /// Read the state record written by the install phase
    pub fn read_state(&self) -> String {
        std::fs::read_to_string(&self.github_state).expect("Failed to read GITHUB_STATE")
    }

    /// Whether any file exists under the cache root
    pub fn cache_has_entries(&self) -> bool {
        fn walk(dir: &std::path::Path) -> bool {
            std::fs::read_dir(dir)
                .map(|entries| {
                    entries.flatten().any(|entry| {
                        entry.path().is_file() || walk(&entry.path())
                    })
                })
                .unwrap_or(false)
        }
        walk(&self.cache_dir)
    }
}
