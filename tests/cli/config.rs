//! Tests for config file handling.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_missing_config_file() {
    let t = Test::new();

    t.dry_cmd(&[], &[])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read config file"))
        .stderr(predicate::str::contains("secrets.config.yaml"));
}

#[test]
fn test_config_file_supplies_lists() {
    let t = Test::with_config(SAMPLE_CONFIG);

    t.dry_cmd(&[], STANDARD_SECRETS)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "PUT /repos/octo/api/actions/secrets/DATABASE_URL",
        ))
        .stdout(predicate::str::contains(
            "PUT /repos/octo/web/actions/secrets/API_KEY",
        ))
        .stdout(predicate::str::contains("JWT_SECRET").not());
}

#[test]
fn test_flags_override_config_file_lists() {
    let t = Test::with_config(SAMPLE_CONFIG);

    t.dry_cmd(&["--secrets", "JWT_SECRET"], STANDARD_SECRETS)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "PUT /repos/octo/api/actions/secrets/JWT_SECRET",
        ))
        .stdout(predicate::str::contains("DATABASE_URL").not());
}

#[test]
fn test_custom_config_path() {
    let t = Test::new();
    t.write("sync.yaml", "repos:\n  - octo/custom\nenvs:\n  - API_KEY\n");

    t.dry_cmd(&["--config", "sync.yaml"], &[("API_KEY", "v")])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "PUT /repos/octo/custom/actions/secrets/API_KEY",
        ));
}

#[test]
fn test_cwd_flag_locates_config() {
    let t = Test::with_config(SAMPLE_CONFIG);
    let elsewhere = tempfile::TempDir::new().unwrap();

    t.cmd()
        .current_dir(elsewhere.path())
        .args(["--dry", "--token", "t", "--cwd"])
        .arg(t.path())
        .envs(STANDARD_SECRETS.iter().copied())
        .assert()
        .success()
        .stdout(predicate::str::contains("octo/web"));
}

#[test]
fn test_invalid_yaml_fails() {
    let t = Test::with_config("repos: [unclosed");

    t.dry_cmd(&[], &[])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse config file"));
}

#[test]
fn test_empty_config_reports_missing_repos() {
    let t = Test::with_config("other: value\n");

    t.dry_cmd(&[], &[])
        .assert()
        .failure()
        .stderr(predicate::str::contains("please provide repos to sync"));
}
