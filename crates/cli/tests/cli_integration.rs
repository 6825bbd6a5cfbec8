//! CLI integration tests for taskal
//!
//! These tests run the real binary against task files in a temporary directory
//! and check output and exit codes.

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Get a command instance for the taskal binary
fn taskal_cmd() -> assert_cmd::Command {
    assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("taskal"))
}

/// Create a temporary directory containing a taskal.yml
fn setup_project(tasks: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("taskal.yml"), tasks).unwrap();
    dir
}

// =============================================================================
// Listing
// =============================================================================

#[test]
fn test_show_tasks_lists_sorted_names() {
    let dir = setup_project("foo: echo foo\nbar: echo bar\n_hidden: echo hidden\n");

    taskal_cmd()
        .current_dir(dir.path())
        .arg("-T")
        .assert()
        .success()
        .stdout(predicate::str::contains("All defined tasks:"))
        .stdout(predicate::str::contains("bar\nfoo\n"))
        .stdout(predicate::str::contains("_hidden").not());
}

#[test]
fn test_config_path_can_be_overridden() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("other.yml"), "custom: echo custom\n").unwrap();

    taskal_cmd()
        .current_dir(dir.path())
        .args(["-c", "other.yml", "-T"])
        .assert()
        .success()
        .stdout(predicate::str::contains("custom"));
}

// =============================================================================
// Running
// =============================================================================

#[cfg(unix)]
#[test]
fn test_runs_nested_commands_in_order() {
    let dir = setup_project("greet:\n  - echo one\n  -\n    - echo two\n    - echo three\n");

    taskal_cmd()
        .current_dir(dir.path())
        .arg("greet")
        .assert()
        .success()
        .stdout(predicate::str::contains("one\ntwo\nthree\n"))
        .stderr(predicate::str::contains("Execute task: greet"))
        .stderr(predicate::str::contains(r#"sh -c "echo one""#));
}

#[cfg(unix)]
#[test]
fn test_trailing_args_are_forwarded() {
    let dir = setup_project("say: echo \"$@\"\n");

    taskal_cmd()
        .current_dir(dir.path())
        .args(["say", "--", "hello", "world"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hello world"))
        .stderr(predicate::str::contains(r#"sh -c "echo \"$@\"" -- hello world"#));
}

#[cfg(unix)]
#[test]
fn test_dry_run_does_not_execute() {
    let dir = setup_project("touch: touch created.txt\n");

    taskal_cmd()
        .current_dir(dir.path())
        .args(["-n", "touch"])
        .assert()
        .success()
        .stderr(predicate::str::contains(r#"sh -c "touch created.txt""#))
        .stdout(predicate::str::contains("Dry run completed"))
        .stdout(predicate::str::contains("All tasks completed successfully!").not());

    assert!(!dir.path().join("created.txt").exists());
}

#[cfg(unix)]
#[test]
fn test_failing_command_stops_remaining_tasks() {
    let dir = setup_project("fail:\n  - exit 7\n  - touch after.txt\nlater: touch later.txt\n");

    taskal_cmd()
        .current_dir(dir.path())
        .args(["fail", "later"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("exit 7"));

    assert!(!dir.path().join("after.txt").exists());
    assert!(!dir.path().join("later.txt").exists());
}

#[cfg(unix)]
#[test]
fn test_successful_run_reports_completion() {
    let dir = setup_project("ok: \"true\"\n");

    taskal_cmd()
        .current_dir(dir.path())
        .arg("ok")
        .assert()
        .success()
        .stdout(predicate::str::contains("All tasks completed successfully!"));
}

#[test]
fn test_null_list_items_are_ignored() {
    let dir = setup_project("baz:\n  - echo foo\n  -\n  - echo bar\n");

    taskal_cmd()
        .current_dir(dir.path())
        .args(["-n", "baz"])
        .assert()
        .success()
        .stderr(predicate::str::contains("echo foo"))
        .stderr(predicate::str::contains("echo bar"));
}

// =============================================================================
// Logging
// =============================================================================

#[test]
fn test_verbose_flag_traces_task_definitions() {
    let dir = setup_project("foo: echo foo\n");

    taskal_cmd()
        .current_dir(dir.path())
        .env_remove("TASKAL_LOG")
        .args(["-v", "-T"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Define Task: foo"))
        .stderr(predicate::str::contains("Add Command: echo foo"));
}

#[test]
fn test_definition_traces_are_hidden_by_default() {
    let dir = setup_project("foo: echo foo\n");

    taskal_cmd()
        .current_dir(dir.path())
        .env_remove("TASKAL_LOG")
        .arg("-T")
        .assert()
        .success()
        .stderr(predicate::str::contains("Define Task:").not());
}

#[test]
fn test_taskal_log_overrides_the_filter() {
    let dir = setup_project("foo: echo foo\n");

    taskal_cmd()
        .current_dir(dir.path())
        .env("TASKAL_LOG", "debug")
        .arg("-T")
        .assert()
        .success()
        .stderr(predicate::str::contains("Define Task: foo"));

    taskal_cmd()
        .current_dir(dir.path())
        .env("TASKAL_LOG", "off")
        .args(["-n", "foo"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Execute task").not());
}

// =============================================================================
// Exit codes
// =============================================================================

#[test]
fn test_invalid_option_exit_code() {
    let dir = setup_project("foo: echo foo\n");

    taskal_cmd()
        .current_dir(dir.path())
        .arg("--no-such-flag")
        .assert()
        .code(1);
}

#[test]
fn test_malformed_config_exit_code() {
    let dir = setup_project("foo:\n  nested: mapping\n");

    taskal_cmd()
        .current_dir(dir.path())
        .arg("foo")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("task 'foo'"));
}

#[test]
fn test_missing_config_exit_code() {
    let dir = TempDir::new().unwrap();

    taskal_cmd()
        .current_dir(dir.path())
        .arg("foo")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("taskal.yml"));
}

#[test]
fn test_no_task_specified_exit_code() {
    let dir = setup_project("foo: echo foo\n");

    taskal_cmd()
        .current_dir(dir.path())
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Task is not specified"));
}

#[test]
fn test_undefined_task_exit_code() {
    let dir = setup_project("bar: touch bar.txt\n");

    taskal_cmd()
        .current_dir(dir.path())
        .args(["foo", "bar"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Specified task is not defined: foo"));

    assert!(!dir.path().join("bar.txt").exists());
}

#[test]
fn test_version_flag_succeeds() {
    taskal_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
