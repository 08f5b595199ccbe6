//! File system errors

use std::path::Path;

use super::SetupError;

/// Creates a file read failure error
pub fn read_failed(path: &Path, reason: impl Into<String>) -> SetupError {
    SetupError::FileReadFailed {
        path: path.display().to_string(),
        reason: reason.into(),
    }
}

/// Creates a file write failure error
pub fn write_failed(path: &Path, reason: impl Into<String>) -> SetupError {
    SetupError::FileWriteFailed {
        path: path.display().to_string(),
        reason: reason.into(),
    }
}

/// Creates a generic IO error
pub fn io_error(message: impl Into<String>) -> SetupError {
    SetupError::IoError {
        message: message.into(),
    }
}
