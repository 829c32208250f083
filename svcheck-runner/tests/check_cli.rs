#![cfg(unix)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::ffi::OsStr;
use std::fs;
use std::os::unix::ffi::OsStrExt;
use std::path::Path;
use tempfile::TempDir;

const SERVICES: [&str; 5] = ["shared", "manager", "orchestrator", "router", "shell"];

/// Creates a project tree whose checks print `ran <service>`
fn project() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();

    fs::create_dir_all(root.join("scripts")).unwrap();
    fs::write(
        root.join("scripts/check_shared.sh"),
        "echo \"ran shared\"\n",
    )
    .unwrap();

    for service in &SERVICES {
        fs::create_dir_all(root.join(service).join("scripts")).unwrap();
        if *service != "shared" {
            write_check(root, service, &format!("echo \"ran {}\"\n", service));
        }
    }

    dir
}

fn write_check(root: &Path, service: &str, body: &str) {
    fs::write(root.join(service).join("scripts/check.sh"), body).unwrap();
}

fn check(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("check").unwrap();
    cmd.env("CHECK_ROOT", root)
        .env("CHECK_ENV_RUNNER", "sh")
        .env("NO_COLOR", "1")
        .env_remove("CHECK_EXIT_POLICY")
        .env_remove("RUST_LOG");
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output).unwrap()
}

fn assert_in_order(haystack: &str, needles: &[&str]) {
    let mut last = 0;
    for needle in needles {
        let pos = haystack[last..].find(needle).unwrap_or_else(|| {
            panic!("'{}' missing or out of order in:\n{}", needle, haystack)
        });
        last += pos + needle.len();
    }
}

#[test]
fn test_runs_every_service_in_order() {
    let dir = project();
    let stdout = stdout_of(&mut check(dir.path()));

    assert!(stdout.contains("Skipping: (none)"));
    assert!(!stdout.contains("Skipped"));
    assert_in_order(
        &stdout,
        &[
            "==> shared",
            "ran shared",
            "==> manager",
            "ran manager",
            "==> orchestrator",
            "ran orchestrator",
            "==> router",
            "ran router",
            "==> shell",
            "ran shell",
        ],
    );
}

#[test]
fn test_skip_manager_and_shell() {
    let dir = project();
    let stdout = stdout_of(check(dir.path()).args(["--skip", "manager", "shell"]));

    assert!(stdout.contains("Skipping: manager, shell"));
    assert!(!stdout.contains("ran manager"));
    assert!(!stdout.contains("ran shell"));
    assert_eq!(stdout.matches("Skipped").count(), 2);
    assert_in_order(
        &stdout,
        &[
            "ran shared",
            "==> manager",
            "Skipped",
            "ran orchestrator",
            "ran router",
            "==> shell",
            "Skipped",
        ],
    );
}

#[test]
fn test_skip_shared_runs_the_rest() {
    let dir = project();
    let stdout = stdout_of(check(dir.path()).args(["--skip", "shared"]));

    assert!(!stdout.contains("ran shared"));
    assert_in_order(
        &stdout,
        &[
            "==> shared",
            "Skipped",
            "ran manager",
            "ran orchestrator",
            "ran router",
            "ran shell",
        ],
    );
}

#[test]
fn test_duplicates_reported_verbatim() {
    let dir = project();
    let stdout = stdout_of(check(dir.path()).args(["--skip", "router", "router"]));

    assert!(stdout.contains("Skipping: router, router"));
    assert_eq!(stdout.matches("Skipped").count(), 1);
}

#[test]
fn test_invalid_skip_exits_2_before_running() {
    let dir = project();

    for args in [
        vec!["--skip", "bogus"],
        vec!["--skip", "manager", "bogus"],
        vec!["--skip", "shell", "router", "Shared"],
    ] {
        check(dir.path())
            .args(&args)
            .assert()
            .code(2)
            .stdout(predicate::str::contains("ran ").not())
            .stdout(predicate::str::contains("==>").not())
            .stderr(predicate::str::contains("Invalid service to skip"))
            .stderr(predicate::str::contains(
                "shared, manager, orchestrator, router, shell",
            ));
    }
}

#[test]
fn test_invalid_skip_names_offending_candidate() {
    let dir = project();
    check(dir.path())
        .args(["--skip", "manager", "nope", "other"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("'nope'"))
        .stderr(predicate::str::contains("'other'").not());
}

#[test]
fn test_unknown_flags_are_ignored() {
    let dir = project();
    let stdout = stdout_of(
        check(dir.path()).args(["--verbose", "--skip", "router", "--future", "value"]),
    );

    assert!(stdout.contains("Skipping: router"));
    assert!(!stdout.contains("ran router"));
    assert!(stdout.contains("ran shell"));
}

#[test]
fn test_non_unicode_token_is_ignored() {
    let dir = project();
    let stdout = stdout_of(check(dir.path()).args([
        OsStr::from_bytes(b"--label=\xff"),
        OsStr::new("--skip"),
        OsStr::new("shared"),
        OsStr::from_bytes(b"--\xfe"),
    ]));

    assert!(stdout.contains("Skipping: shared"));
    assert!(!stdout.contains("ran shared"));
    assert!(stdout.contains("ran shell"));
}

#[test]
fn test_non_unicode_skip_candidate_is_invalid() {
    let dir = project();
    check(dir.path())
        .args([OsStr::new("--skip"), OsStr::from_bytes(b"rou\xffter")])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("==>").not())
        .stderr(predicate::str::contains("Invalid service to skip"));
}

#[test]
fn test_failing_check_does_not_change_exit_code() {
    let dir = project();
    write_check(dir.path(), "manager", "echo \"ran manager\"\nexit 3\n");

    let stdout = stdout_of(&mut check(dir.path()));
    assert_in_order(&stdout, &["ran manager", "ran orchestrator", "ran shell"]);
}

#[test]
fn test_worst_policy_reports_failing_code() {
    let dir = project();
    write_check(dir.path(), "manager", "exit 3\n");
    write_check(dir.path(), "router", "exit 5\n");

    check(dir.path())
        .env("CHECK_EXIT_POLICY", "worst")
        .assert()
        .code(5)
        .stdout(predicate::str::contains("ran shell"));
}

#[test]
fn test_missing_service_directory_is_not_fatal() {
    let dir = project();
    fs::remove_dir_all(dir.path().join("orchestrator")).unwrap();

    let stdout = stdout_of(&mut check(dir.path()));
    assert_in_order(&stdout, &["ran manager", "==> orchestrator", "ran router"]);

    check(dir.path())
        .env("CHECK_EXIT_POLICY", "worst")
        .assert()
        .code(1);
}

#[test]
fn test_invalid_exit_policy_is_config_error() {
    let dir = project();
    let output = check(dir.path())
        .env("CHECK_EXIT_POLICY", "strict")
        .env("RUST_LOG", "info")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("==>").not())
        .get_output()
        .clone();

    // Reported once, even with logging enabled.
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(stderr.matches("Unknown exit policy 'strict'").count(), 1);
    assert!(stderr.contains("CHECK_EXIT_POLICY"));
}

#[test]
fn test_missing_root_is_config_error() {
    let dir = project();
    check(&dir.path().join("missing")).assert().code(1);
}
