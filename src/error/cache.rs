//! Cache store errors

use super::SetupError;

/// Creates a cache restore failure error
pub fn restore_failed(message: impl Into<String>) -> SetupError {
    SetupError::CacheRestoreFailed {
        message: message.into(),
    }
}

/// Creates a cache save failure error
///
/// Save failures are downgraded to warnings by the save phase; a missing
/// cache entry only costs performance on the next run.
pub fn save_failed(message: impl Into<String>) -> SetupError {
    SetupError::CacheSaveFailed {
        message: message.into(),
    }
}
