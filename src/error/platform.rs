//! Platform policy errors

use super::SetupError;

/// Creates an error for an unsupported operating system
pub fn unsupported_os(os: impl Into<String>) -> SetupError {
    SetupError::UnsupportedOs { os: os.into() }
}

/// Creates an error for an unsupported architecture
pub fn unsupported_arch(arch: impl Into<String>) -> SetupError {
    SetupError::UnsupportedArch { arch: arch.into() }
}
