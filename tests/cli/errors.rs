//! Tests for error handling and CLI flags.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_help_lists_flags() {
    let t = Test::new();

    t.cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--repos"))
        .stdout(predicate::str::contains("--secrets"))
        .stdout(predicate::str::contains("--env-prefix"));
}

#[test]
fn test_long_help_documents_patterns() {
    let t = Test::new();

    t.cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(r"octo/svc-\d.*"));
}

#[test]
fn test_version_flag() {
    let t = Test::new();

    t.cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("gh-secrets-sync"));
}

#[test]
fn test_missing_token_fails_with_hint() {
    let t = Test::new();

    t.cmd()
        .args(["--repos", "octo/api", "--secrets", "API_KEY"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("please provide a GitHub token"))
        .stderr(predicate::str::contains("gh auth login"));
}

#[test]
fn test_token_from_gh_pat() {
    let t = Test::new();

    t.cmd()
        .env("GH_PAT", "from-env")
        .env("API_KEY", "v")
        .args(["--dry", "--repos", "octo/api", "--secrets", "API_KEY"])
        .assert()
        .success();
}

#[test]
fn test_strict_missing_secret_fails() {
    let t = Test::new();

    t.dry_cmd(&["--repos", "octo/api", "--secrets", "GHSS_TEST_MISSING"], &[])
        .env_remove("GHSS_TEST_MISSING")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "secret GHSS_TEST_MISSING not found in environment variables",
        ))
        .stdout(predicate::str::contains("PUT").not());
}

#[test]
fn test_malformed_repo_rejected() {
    let t = Test::new();

    t.dry_cmd(
        &["--repos", "not-a-repo", "--secrets", "API_KEY"],
        &[("API_KEY", "v")],
    )
    .assert()
    .failure()
    .stderr(predicate::str::contains("invalid repository 'not-a-repo'"));
}

#[test]
fn test_repo_pattern_without_remote_listing_finds_nothing() {
    let t = Test::new();

    // dry-run never lists repositories, so a pure pattern expands to nothing
    t.dry_cmd(
        &["--yes", "--repos", "octo/*", "--secrets", "API_KEY"],
        &[("API_KEY", "v")],
    )
    .assert()
    .failure()
    .stdout(predicate::str::contains("dry run: GET /user/repos"))
    .stderr(predicate::str::contains("no repos found"));
}

#[test]
fn test_verbose_flag_accepted() {
    let t = Test::new();

    t.dry_cmd(
        &["--verbose", "--repos", "octo/api", "--secrets", "API_KEY"],
        &[("API_KEY", "v")],
    )
    .assert()
    .success();
}
