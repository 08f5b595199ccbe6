//! Resolution errors

use super::SetupError;

/// Creates an error for a specifier with no matching release tag
pub fn no_matching_release(specifier: impl Into<String>) -> SetupError {
    SetupError::NoMatchingRelease {
        specifier: specifier.into(),
    }
}

/// Creates an error for a commit SHA with no workflow run
pub fn no_workflow_run(sha: impl Into<String>) -> SetupError {
    SetupError::NoWorkflowRun { sha: sha.into() }
}

/// Creates an error for a workflow run without the requested platform artifact
pub fn no_matching_artifact(name: impl Into<String>, run_id: u64) -> SetupError {
    SetupError::NoMatchingArtifact {
        name: name.into(),
        run_id,
    }
}

/// Creates an error for an unparseable version specifier
pub fn invalid_specifier(input: impl Into<String>, reason: impl Into<String>) -> SetupError {
    SetupError::InvalidSpecifier {
        input: input.into(),
        reason: reason.into(),
    }
}
