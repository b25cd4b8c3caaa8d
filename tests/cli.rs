//! End-to-end checks of the `facts` binary: argument handling, the
//! auth gate, and error reporting. Network-touching paths point at a
//! closed local port so transport failures are immediate.

use assert_cmd::Command;
use predicates::prelude::*;

/// Command with HOME pointed at an empty temp dir, so no user config
/// leaks into the test.
fn facts(home: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin("facts").unwrap();
    cmd.env("HOME", home.path());
    cmd
}

/// Config pointing at a port nothing listens on.
fn write_config(home: &tempfile::TempDir, with_user: bool) {
    let dir = home.path().join(".facts");
    std::fs::create_dir_all(&dir).unwrap();
    let mut content = String::from("uri = \"http://127.0.0.1:9\"\n");
    if with_user {
        content.push_str("user = \"alice\"\npassword = \"secret\"\n");
    }
    std::fs::write(dir.join("config.toml"), content).unwrap();
}

#[test]
fn help_lists_the_command_set() {
    let home = tempfile::tempdir().unwrap();
    facts(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("query-category"))
        .stdout(predicate::str::contains("new-fact"))
        .stdout(predicate::str::contains("daily"));
}

#[test]
fn no_arguments_is_a_usage_error() {
    let home = tempfile::tempdir().unwrap();
    facts(&home)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn query_requires_at_least_one_term() {
    let home = tempfile::tempdir().unwrap();
    facts(&home)
        .arg("query-fact")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn mutating_commands_point_at_config_when_unauthenticated() {
    let home = tempfile::tempdir().unwrap();
    facts(&home)
        .args(["destroy-category", "ruby"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Authorization required for this task, use `facts config`",
        ));
}

#[test]
fn edit_without_credentials_is_a_clean_exit_too() {
    let home = tempfile::tempdir().unwrap();
    facts(&home)
        .args(["edit-fact", "42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Authorization required"));
}

#[test]
fn move_category_needs_a_destination() {
    let home = tempfile::tempdir().unwrap();
    facts(&home)
        .args(["move-category", "ruby"])
        .assert()
        .success()
        .stdout(predicate::str::contains("need at least two arguments"));
}

#[test]
fn move_category_to_root_skips_the_arity_check() {
    // With --no-parent a single argument is fine; the command then hits
    // the auth gate and exits cleanly.
    let home = tempfile::tempdir().unwrap();
    facts(&home)
        .args(["move-category", "-p", "ruby"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Authorization required"));
}

#[test]
fn unreachable_host_reports_a_transport_failure() {
    let home = tempfile::tempdir().unwrap();
    write_config(&home, false);
    facts(&home)
        .args(["query-fact", "ruby"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("request failed"));
}

#[test]
fn destroy_against_unreachable_host_fails_after_the_auth_gate() {
    let home = tempfile::tempdir().unwrap();
    write_config(&home, true);
    facts(&home)
        .args(["destroy-fact", "42"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("request failed"));
}

#[test]
fn command_aliases_resolve() {
    let home = tempfile::tempdir().unwrap();
    facts(&home)
        .args(["qf", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--or"));
    facts(&home)
        .args(["nc", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--no-parent"));
}
