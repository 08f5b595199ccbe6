//! Archive extraction errors

use std::path::Path;

use super::SetupError;

/// Creates an error for an archive that contains no bun executable
pub fn executable_not_found() -> SetupError {
    SetupError::ExecutableNotFound
}

/// Creates an archive extraction failure error
pub fn failed(path: &Path, reason: impl Into<String>) -> SetupError {
    SetupError::ExtractFailed {
        path: path.display().to_string(),
        reason: reason.into(),
    }
}
