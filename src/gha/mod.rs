//! GitHub Actions runner integration
//!
//! The runner communicates through append-format files named by
//! environment variables (`GITHUB_OUTPUT`, `GITHUB_PATH`, `GITHUB_STATE`)
//! and through workflow commands on stdout (`::warning::`).
//! State saved during one step becomes a `STATE_<name>` environment
//! variable in later steps of the same job, which is how the install and
//! save phases communicate without sharing memory.
//!
//! Writers are tolerant of a missing runner (unset environment variable):
//! they become no-ops so the tool stays usable outside CI.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::error::{Result, file_write_failed};

/// Set a step output (`GITHUB_OUTPUT`)
pub fn set_output(name: &str, value: &str) -> Result<()> {
    append_runner_file("GITHUB_OUTPUT", &format_entry(name, value))
}

/// Prepend a directory to the PATH of subsequent steps (`GITHUB_PATH`)
pub fn add_path(dir: &Path) -> Result<()> {
    append_runner_file("GITHUB_PATH", &format!("{}\n", dir.display()))
}

/// Persist state for later phases of this job (`GITHUB_STATE`)
pub fn save_state(name: &str, value: &str) -> Result<()> {
    append_runner_file("GITHUB_STATE", &format_entry(name, value))
}

/// Read state persisted by an earlier phase of this job
///
/// The runner exposes saved state as `STATE_<name>` environment variables.
pub fn get_state(name: &str) -> Option<String> {
    std::env::var(format!("STATE_{name}")).ok()
}

/// Emit a warning annotation
pub fn warning(message: &str) {
    println!("::warning::{}", escape_command_data(message));
}

/// Format one `name=value` entry, using the heredoc form when the value
/// spans multiple lines
fn format_entry(name: &str, value: &str) -> String {
    if value.contains('\n') || value.contains('\r') {
        let delimiter = "ghadelimiter";
        format!("{name}<<{delimiter}\n{value}\n{delimiter}\n")
    } else {
        format!("{name}={value}\n")
    }
}

/// Escape data for a workflow command line
fn escape_command_data(data: &str) -> String {
    data.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

fn append_runner_file(env_var: &str, content: &str) -> Result<()> {
    let Ok(path) = std::env::var(env_var) else {
        // Not running under a runner; nothing to record
        return Ok(());
    };
    let path = Path::new(&path);
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|err| file_write_failed(path, err.to_string()))?;
    file.write_all(content.as_bytes())
        .map_err(|err| file_write_failed(path, err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_entry_single_line() {
        assert_eq!(format_entry("bun-version", "1.2.3"), "bun-version=1.2.3\n");
    }

    #[test]
    fn test_format_entry_multiline_uses_heredoc() {
        let entry = format_entry("notes", "line one\nline two");
        assert!(entry.starts_with("notes<<ghadelimiter\n"));
        assert!(entry.ends_with("\nghadelimiter\n"));
        assert!(entry.contains("line one\nline two"));
    }

    #[test]
    fn test_escape_command_data() {
        assert_eq!(escape_command_data("plain"), "plain");
        assert_eq!(escape_command_data("50% done\nnext"), "50%25 done%0Anext");
    }

    #[test]
    fn test_get_state_missing_is_none() {
        assert_eq!(get_state("does_not_exist_in_tests"), None);
    }

    #[test]
    #[serial_test::serial]
    fn test_set_output_appends_to_runner_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let file = temp.path().join("output");
        std::fs::write(&file, "").unwrap();

        unsafe { std::env::set_var("GITHUB_OUTPUT", &file) };
        set_output("bun-version", "1.2.3").unwrap();
        set_output("cache-hit", "true").unwrap();
        unsafe { std::env::remove_var("GITHUB_OUTPUT") };

        let contents = std::fs::read_to_string(&file).unwrap();
        assert_eq!(contents, "bun-version=1.2.3\ncache-hit=true\n");
    }

    #[test]
    #[serial_test::serial]
    fn test_writers_are_noops_without_runner() {
        unsafe { std::env::remove_var("GITHUB_OUTPUT") };
        assert!(set_output("bun-version", "1.2.3").is_ok());
    }

    #[test]
    #[serial_test::serial]
    fn test_save_state_appends_to_state_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let file = temp.path().join("state");
        std::fs::write(&file, "").unwrap();

        unsafe { std::env::set_var("GITHUB_STATE", &file) };
        save_state("cache", r#"{"schema":1}"#).unwrap();
        unsafe { std::env::remove_var("GITHUB_STATE") };

        let contents = std::fs::read_to_string(&file).unwrap();
        assert_eq!(contents, "cache={\"schema\":1}\n");
    }
}
