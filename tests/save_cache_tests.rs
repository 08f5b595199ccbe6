//! Save-cache phase integration tests
//!
//! The save phase consumes the decision record the install phase persisted
//! through the runner's state storage (surfaced as the STATE_cache
//! environment variable). These tests drive the real binary with fabricated
//! state; no network access is involved.

mod common;

use assert_cmd::Command;
use common::TestEnv;
use predicates::prelude::*;

// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
fn setup_bun_cmd() -> Command {
    Command::cargo_bin("setup-bun").unwrap()
}

fn state_json(bun_path: &str, cache_enabled: bool, cache_hit: bool) -> String {
    format!(
        r#"{{"schema":1,"cache_enabled":{cache_enabled},"cache_hit":{cache_hit},"bun_path":{},"url":"https://github.com/oven-sh/bun/releases/download/bun-v1.0.0/bun-linux-x64.zip"}}"#,
        serde_json::to_string(bun_path).expect("path serializes")
    )
}

#[test]
fn test_save_cache_without_state_is_a_configuration_error() {
    let env = TestEnv::new();
    let mut cmd = setup_bun_cmd();
    env.apply(&mut cmd);
    cmd.arg("save-cache")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No install-phase state found"));
}

#[test]
fn test_save_cache_with_corrupted_state_fails_hard() {
    let env = TestEnv::new();
    let mut cmd = setup_bun_cmd();
    env.apply(&mut cmd);
    cmd.env("STATE_cache", "{ not json")
        .arg("save-cache")
        .assert()
        .failure()
        .stderr(predicate::str::contains("state is invalid"));
}

#[test]
fn test_save_cache_with_unknown_schema_fails_hard() {
    let env = TestEnv::new();
    let state = state_json("/tmp/bun", true, false).replace(r#""schema":1"#, r#""schema":99"#);
    let mut cmd = setup_bun_cmd();
    env.apply(&mut cmd);
    cmd.env("STATE_cache", state)
        .arg("save-cache")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported schema version"));
}

#[cfg(unix)]
#[test]
fn test_save_cache_saves_when_owed() {
    let env = TestEnv::new();
    env.write_fake_bun("1.0.0+abcdef0");

    let bun_path = env.bun_path().display().to_string();
    let mut cmd = setup_bun_cmd();
    env.apply(&mut cmd);
    cmd.env("STATE_cache", state_json(&bun_path, true, false))
        .arg("save-cache")
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved Bun to cache"));

    assert!(env.cache_has_entries());
}

#[test]
fn test_save_cache_noop_on_cache_hit() {
    let env = TestEnv::new();
    let mut cmd = setup_bun_cmd();
    env.apply(&mut cmd);
    cmd.env("STATE_cache", state_json("/tmp/bun", true, true))
        .arg("save-cache")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to save"));

    assert!(!env.cache_has_entries());
}

#[test]
fn test_save_cache_noop_when_cache_disabled() {
    let env = TestEnv::new();
    let mut cmd = setup_bun_cmd();
    env.apply(&mut cmd);
    cmd.env("STATE_cache", state_json("/tmp/bun", false, false))
        .arg("save-cache")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to save"));

    assert!(!env.cache_has_entries());
}

#[test]
fn test_save_cache_failure_is_a_warning_not_a_job_failure() {
    let env = TestEnv::new();
    // Save is owed but the binary to save does not exist
    let mut cmd = setup_bun_cmd();
    env.apply(&mut cmd);
    cmd.env("STATE_cache", state_json("/nonexistent/bun", true, false))
        .arg("save-cache")
        .assert()
        .success()
        .stdout(predicate::str::contains("::warning::"));
}
