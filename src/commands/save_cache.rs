//! Save-cache command implementation
//!
//! The job-end phase: consume the cache decision persisted by the install
//! phase and save the installed binary when a save is owed. A failed save
//! is a warning, never a job failure; a missing decision record means the
//! two phases were not wired together and is a hard error.

use console::style;

use crate::cache::{CacheStore, DirCacheStore};
use crate::error::Result;
use crate::gha;
use crate::hash;
use crate::state;

/// Run the save-cache command
pub fn run() -> Result<()> {
    let decision = state::consume()?;

    if !decision.save_owed() {
        println!(
            "Nothing to save (cache {}, {})",
            if decision.cache_enabled {
                "enabled"
            } else {
                "disabled"
            },
            if decision.cache_hit { "hit" } else { "miss" }
        );
        return Ok(());
    }

    let store = DirCacheStore::from_env();
    let key = hash::cache_key(&decision.url);
    match store.save(&[decision.bun_path.clone()], &key) {
        Ok(()) => {
            println!("{} Saved Bun to cache", style("✓").green());
            Ok(())
        }
        Err(err) => {
            // A missing cache entry only costs performance on the next run
            gha::warning(&format!("Failed to save Bun to cache: {err}"));
            Ok(())
        }
    }
}
