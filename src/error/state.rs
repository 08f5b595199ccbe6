//! Cross-phase state errors

use super::SetupError;

/// Creates an error for unparseable or schema-incompatible persisted state
pub fn invalid(reason: impl Into<String>) -> SetupError {
    SetupError::StateInvalid {
        reason: reason.into(),
    }
}
