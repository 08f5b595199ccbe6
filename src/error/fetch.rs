//! HTTP and download errors

use super::SetupError;

/// Creates a fetch failure error
pub fn failed(url: impl Into<String>, reason: impl Into<String>) -> SetupError {
    SetupError::FetchFailed {
        url: url.into(),
        reason: reason.into(),
    }
}

/// Creates a fetch failure error from a non-success HTTP status
pub fn http_status(url: impl Into<String>, status: u16) -> SetupError {
    SetupError::FetchFailed {
        url: url.into(),
        reason: format!("HTTP {status}"),
    }
}
