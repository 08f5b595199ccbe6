//! Directory-backed cache store
//!
//! Entries live at `<root>/<key>/<file-name>`. The root defaults to the
//! platform's standard cache location (e.g. XDG on Linux) with a
//! `setup-bun` subdirectory and can be overridden with the
//! `SETUP_BUN_CACHE_DIR` environment variable.

use std::fs;
use std::path::{Path, PathBuf};

use super::CacheStore;
use crate::error::{Result, cache_restore_failed, cache_save_failed};

/// Environment variable overriding the cache root
pub const CACHE_DIR_ENV: &str = "SETUP_BUN_CACHE_DIR";

const CACHE_DIR: &str = "setup-bun";

/// Filesystem cache keyed by digest directories
pub struct DirCacheStore {
    root: Option<PathBuf>,
}

impl DirCacheStore {
    /// Resolve the store root from the environment
    pub fn from_env() -> Self {
        let root = match std::env::var(CACHE_DIR_ENV) {
            Ok(dir) if !dir.trim().is_empty() => Some(PathBuf::from(dir)),
            _ => dirs::cache_dir().map(|base| base.join(CACHE_DIR)),
        };
        Self { root }
    }

    /// Create a store rooted at an explicit directory
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    fn entry_dir(&self, key: &str) -> Option<PathBuf> {
        self.root.as_ref().map(|root| root.join(key))
    }
}

fn entry_file(entry: &Path, path: &Path) -> Result<PathBuf> {
    path.file_name()
        .map(|name| entry.join(name))
        .ok_or_else(|| {
            crate::error::io_error(format!("path has no file name: {}", path.display()))
        })
}

impl CacheStore for DirCacheStore {
    fn is_available(&self) -> bool {
        self.root.is_some()
    }

    fn restore(&self, paths: &[PathBuf], key: &str) -> Result<bool> {
        let Some(entry) = self.entry_dir(key) else {
            return Ok(false);
        };
        if !entry.is_dir() {
            return Ok(false);
        }

        // Miss unless every requested path is present in the entry
        for path in paths {
            if !entry_file(&entry, path)?.is_file() {
                return Ok(false);
            }
        }

        for path in paths {
            let cached = entry_file(&entry, path)?;
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)
                    .map_err(|err| cache_restore_failed(err.to_string()))?;
            }
            fs::copy(&cached, path).map_err(|err| cache_restore_failed(err.to_string()))?;
        }
        Ok(true)
    }

    fn save(&self, paths: &[PathBuf], key: &str) -> Result<()> {
        let Some(entry) = self.entry_dir(key) else {
            return Err(cache_save_failed("cache directory could not be determined"));
        };
        fs::create_dir_all(&entry).map_err(|err| cache_save_failed(err.to_string()))?;

        for path in paths {
            let dest = entry_file(&entry, path)?;
            fs::copy(path, &dest).map_err(|err| cache_save_failed(err.to_string()))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_save_then_restore_round_trips() {
        let cache_root = TempDir::new().unwrap();
        let work = TempDir::new().unwrap();
        let store = DirCacheStore::at(cache_root.path());

        let original = work.path().join("bun");
        fs::write(&original, "binary contents").unwrap();

        store.save(&[original.clone()], "key1").unwrap();
        fs::remove_file(&original).unwrap();

        let hit = store.restore(&[original.clone()], "key1").unwrap();
        assert!(hit);
        assert_eq!(fs::read_to_string(&original).unwrap(), "binary contents");
    }

    #[test]
    fn test_restore_miss_on_unknown_key() {
        let cache_root = TempDir::new().unwrap();
        let work = TempDir::new().unwrap();
        let store = DirCacheStore::at(cache_root.path());

        let target = work.path().join("bun");
        let hit = store.restore(&[target.clone()], "no-such-key").unwrap();
        assert!(!hit);
        assert!(!target.exists());
    }

    #[test]
    fn test_restore_miss_when_entry_incomplete() {
        let cache_root = TempDir::new().unwrap();
        let work = TempDir::new().unwrap();
        let store = DirCacheStore::at(cache_root.path());

        let a = work.path().join("bun");
        fs::write(&a, "a").unwrap();
        store.save(&[a.clone()], "key").unwrap();

        // Second path was never saved under this key
        let b = work.path().join("bunx");
        let hit = store.restore(&[a, b], "key").unwrap();
        assert!(!hit);
    }

    #[test]
    fn test_restore_creates_missing_parent_dirs() {
        let cache_root = TempDir::new().unwrap();
        let work = TempDir::new().unwrap();
        let store = DirCacheStore::at(cache_root.path());

        let original = work.path().join("bun");
        fs::write(&original, "x").unwrap();
        store.save(&[original], "key").unwrap();

        let target = work.path().join("deep/nested/bin/bun");
        let hit = store.restore(&[target.clone()], "key").unwrap();
        assert!(hit);
        assert!(target.is_file());
    }

    #[test]
    #[serial_test::serial]
    fn test_from_env_prefers_override() {
        let temp = TempDir::new().unwrap();
        unsafe { std::env::set_var(CACHE_DIR_ENV, temp.path()) };
        let store = DirCacheStore::from_env();
        unsafe { std::env::remove_var(CACHE_DIR_ENV) };

        assert!(store.is_available());
        assert_eq!(store.root.as_deref(), Some(temp.path()));
    }

    #[test]
    #[serial_test::serial]
    fn test_from_env_blank_override_falls_back() {
        unsafe { std::env::set_var(CACHE_DIR_ENV, "  ") };
        let store = DirCacheStore::from_env();
        unsafe { std::env::remove_var(CACHE_DIR_ENV) };

        // Falls back to the platform cache dir when the override is blank
        assert_eq!(store.root, dirs::cache_dir().map(|base| base.join(CACHE_DIR)));
    }
}
