//! Tests for dry-run sync output.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_dry_run_prints_requests() {
    let t = Test::new();

    t.dry_cmd(
        &["--repos", "octo/api", "--secrets", "API_KEY"],
        &[("API_KEY", "sk-test")],
    )
    .assert()
    .success()
    .stdout(predicate::str::contains(
        "dry run: GET /repos/octo/api/actions/secrets/public-key",
    ))
    .stdout(predicate::str::contains(
        "dry run: PUT /repos/octo/api/actions/secrets/API_KEY",
    ))
    .stdout(predicate::str::contains("Done"));
}

#[test]
fn test_dry_run_never_prints_values() {
    let t = Test::new();

    t.dry_cmd(
        &["--repos", "octo/api", "--secrets", "API_KEY"],
        &[("API_KEY", "sk-very-secret")],
    )
    .assert()
    .success()
    .stdout(predicate::str::contains("sk-very-secret").not())
    .stderr(predicate::str::contains("sk-very-secret").not());
}

#[test]
fn test_dry_run_is_repeatable() {
    let t = Test::new();
    let args = ["--repos", "octo/api,octo/web", "--secrets", "API_KEY"];
    let env = [("API_KEY", "v")];

    let first = t.dry_with_env(&args, &env);
    let second = t.dry_with_env(&args, &env);
    assert_success(&first);
    assert_eq!(stdout(&first), stdout(&second));
}

#[test]
fn test_env_prefix_renames_remote_secret() {
    let t = Test::new();

    t.dry_cmd(
        &[
            "--repos",
            "octo/api",
            "--secrets",
            "API_KEY",
            "--env-prefix",
            "PROD_",
        ],
        &[("API_KEY", "v")],
    )
    .assert()
    .success()
    .stdout(predicate::str::contains(
        "PUT /repos/octo/api/actions/secrets/PROD_API_KEY",
    ))
    .stdout(predicate::str::contains("API_KEY → PROD_API_KEY"));
}

#[test]
fn test_non_strict_skips_missing_secret() {
    let t = Test::new();

    t.dry_cmd(
        &[
            "--strict",
            "false",
            "--repos",
            "octo/api",
            "--secrets",
            "API_KEY,GHSS_TEST_MISSING",
        ],
        &[("API_KEY", "v")],
    )
    .env_remove("GHSS_TEST_MISSING")
    .assert()
    .success()
    .stdout(predicate::str::contains(
        "Secret GHSS_TEST_MISSING not found in environment variables",
    ))
    .stdout(predicate::str::contains(
        "PUT /repos/octo/api/actions/secrets/API_KEY",
    ))
    .stdout(predicate::str::contains("secrets/GHSS_TEST_MISSING").not());
}

#[test]
fn test_empty_value_counts_as_missing() {
    let t = Test::new();

    t.dry_cmd(
        &["--repos", "octo/api", "--secrets", "API_KEY"],
        &[("API_KEY", "")],
    )
    .assert()
    .failure()
    .stderr(predicate::str::contains("secret API_KEY not found"));
}

#[test]
fn test_banner_and_summary() {
    let t = Test::new();

    t.dry_cmd(
        &["--repos", "octo/api,octo/web", "--secrets", "API_KEY"],
        &[("API_KEY", "v")],
    )
    .assert()
    .success()
    .stdout(predicate::str::starts_with("gh-secrets-sync v"))
    .stdout(predicate::str::contains("would sync  2"));
}
