//! Cross-invocation artifact cache
//!
//! The cache is a key-value blob store consumed through a narrow
//! interface: restore files under a key, save files under a key. The
//! directory-backed implementation in [`dir`] persists entries under the
//! platform cache directory so a runner with a persistent tool cache
//! skips the download on the next job.

mod dir;

pub use dir::DirCacheStore;

use std::path::PathBuf;

use crate::error::Result;

/// Narrow interface over the key-value blob cache service
pub trait CacheStore {
    /// Whether the cache backend is usable for this invocation
    fn is_available(&self) -> bool;

    /// Restore the given paths from the entry under `key`
    ///
    /// Returns `false` on a miss. A successful restore is not trusted
    /// until the restored binary passes verification.
    fn restore(&self, paths: &[PathBuf], key: &str) -> Result<bool>;

    /// Save the given paths into the entry under `key`
    fn save(&self, paths: &[PathBuf], key: &str) -> Result<()>;
}
