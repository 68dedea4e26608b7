//! Tests for `casetally check` command.

use crate::support::*;

#[test]
fn test_check_reports_site_and_token() {
    let t = Test::with_backend(Behavior::default());

    let output = t.check();

    assert_success(&output);
    assert_stdout_contains(&output, "✓ credentials and sessions ok");
    assert_stdout_contains(&output, SITE_TITLE);
    assert_stdout_contains(&output, &t.backend().site_url());
    assert_stdout_contains(&output, &t.backend().token_url());

    let rec = t.backend().recorded();
    assert_eq!(rec.login_forms.len(), 1);
    assert_eq!(rec.token_forms.len(), 1);
    assert!(rec.case_bodies.is_empty());
}

#[test]
fn test_check_does_not_print_secrets() {
    let t = Test::with_backend(Behavior::default());

    let output = t.check();

    assert_success(&output);
    assert!(!stdout(&output).contains("nova-secret"));
    assert!(!stderr(&output).contains("nova-secret"));
    assert!(!stderr(&output).contains(REPOSITORY_TOKEN));
}

#[test]
fn test_check_verbose_logs_debug() {
    let t = Test::with_backend(Behavior::default());

    let output = t.cmd().args(["--verbose", "check"]).output().unwrap();

    assert_success(&output);
    assert_stderr_contains(&output, "requesting repository token");
}

#[test]
fn test_check_vault_from_flag() {
    let t = Test::with_backend(Behavior::default());
    std::fs::rename(t.path("casetally-vault.toml"), t.path("other-vault.toml")).unwrap();

    let output = t
        .cmd()
        .args(["--vault", "other-vault.toml", "check"])
        .output()
        .unwrap();
    assert_success(&output);

    let output = t
        .cmd()
        .env("CASETALLY_VAULT", "other-vault.toml")
        .arg("check")
        .output()
        .unwrap();
    assert_success(&output);
}
