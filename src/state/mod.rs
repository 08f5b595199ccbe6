//! Cross-phase cache decision record
//!
//! The install phase and the save phase are separate process invocations
//! sharing no memory; their only channel is this record, serialized into
//! the runner's state storage. The record is typed and schema-versioned:
//! a missing record means the two phases were not wired together (a
//! configuration error), and an unreadable or unknown-schema record is a
//! hard error rather than a silently skipped save.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SetupError, state_invalid};
use crate::gha;

/// State key under which the record is persisted
pub const STATE_KEY: &str = "cache";

/// Current schema version of [`CacheState`]
pub const SCHEMA_VERSION: u32 = 1;

/// The cache decision made at the end of the install phase
///
/// Invariant: the save phase attempts a save if and only if
/// `cache_enabled && !cache_hit`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheState {
    pub schema: u32,
    pub cache_enabled: bool,
    pub cache_hit: bool,
    pub bun_path: PathBuf,
    pub url: String,
}

impl CacheState {
    pub fn new(cache_enabled: bool, cache_hit: bool, bun_path: PathBuf, url: String) -> Self {
        Self {
            schema: SCHEMA_VERSION,
            cache_enabled,
            cache_hit,
            bun_path,
            url,
        }
    }

    /// Whether the save phase owes a cache save
    pub fn save_owed(&self) -> bool {
        self.cache_enabled && !self.cache_hit
    }
}

/// Persist the decision record at the end of the install phase
pub fn persist(state: &CacheState) -> Result<()> {
    let serialized =
        serde_json::to_string(state).map_err(|err| state_invalid(err.to_string()))?;
    gha::save_state(STATE_KEY, &serialized)
}

/// Consume the decision record at the start of the save phase
pub fn consume() -> Result<CacheState> {
    let raw = gha::get_state(STATE_KEY).ok_or(SetupError::StateMissing)?;
    parse(&raw)
}

fn parse(raw: &str) -> Result<CacheState> {
    let state: CacheState =
        serde_json::from_str(raw).map_err(|err| state_invalid(err.to_string()))?;
    if state.schema != SCHEMA_VERSION {
        return Err(state_invalid(format!(
            "unsupported schema version {} (expected {})",
            state.schema, SCHEMA_VERSION
        )));
    }
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(cache_enabled: bool, cache_hit: bool) -> CacheState {
        CacheState::new(
            cache_enabled,
            cache_hit,
            PathBuf::from("/home/runner/.bun/bin/bun"),
            "https://github.com/oven-sh/bun/releases/download/bun-v1.0.0/bun-linux-x64.zip"
                .to_string(),
        )
    }

    #[test]
    fn test_round_trip() {
        let state = sample(true, false);
        let serialized = serde_json::to_string(&state).unwrap();
        let parsed = parse(&serialized).unwrap();
        assert_eq!(parsed, state);
    }

    #[test]
    fn test_save_owed_invariant() {
        assert!(sample(true, false).save_owed());
        assert!(!sample(true, true).save_owed());
        assert!(!sample(false, false).save_owed());
        assert!(!sample(false, true).save_owed());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            parse("not json"),
            Err(SetupError::StateInvalid { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_unknown_schema() {
        let mut state = sample(true, false);
        state.schema = 99;
        let serialized = serde_json::to_string(&state).unwrap();
        assert!(matches!(
            parse(&serialized),
            Err(SetupError::StateInvalid { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_missing_fields() {
        assert!(matches!(
            parse(r#"{"schema": 1}"#),
            Err(SetupError::StateInvalid { .. })
        ));
    }
}
