//! Integration tests for the PassVault CLI.
//!
//! These tests exercise the binary end-to-end using `assert_cmd`.
//! The master secret is supplied through `PASSVAULT_MASTER` so no
//! command ever waits on an interactive prompt.

use assert_cmd::Command;
use assert_fs::TempDir;
use predicates::prelude::*;

const SECRET: &str = "master123";

/// Helper: get a Command pointing at the passvault binary.
fn passvault() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("passvault").expect("binary should exist")
}

/// Helper: a command running inside `tmp` with the master secret set.
fn in_vault(tmp: &TempDir, secret: &str) -> Command {
    let mut cmd = passvault();
    cmd.current_dir(tmp.path())
        .env("PASSVAULT_MASTER", secret)
        .env_remove("PASSVAULT_NEW_MASTER")
        .env_remove("PASSVAULT_LOG");
    cmd
}

#[test]
fn help_flag_shows_usage() {
    passvault()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Local credential vault"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("add"))
        .stdout(predicate::str::contains("edit"))
        .stdout(predicate::str::contains("delete"))
        .stdout(predicate::str::contains("insights"))
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("change-master"));
}

#[test]
fn version_flag_shows_version() {
    passvault()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("passvault"));
}

#[test]
fn no_args_shows_help() {
    passvault()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn generate_respects_length() {
    let output = passvault()
        .args(["generate", "--length", "20"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let password = stdout.trim_end_matches('\n');
    assert_eq!(password.chars().count(), 20);
}

#[test]
fn generate_without_any_class_fails() {
    passvault()
        .args([
            "generate",
            "--no-uppercase",
            "--no-lowercase",
            "--no-numbers",
            "--no-symbols",
        ])
        .assert()
        .failure();
}

#[test]
fn generate_rejects_out_of_range_length() {
    passvault()
        .args(["generate", "--length", "4"])
        .assert()
        .failure();
}

#[test]
fn first_list_shows_demo_credentials() {
    let tmp = TempDir::new().unwrap();

    in_vault(&tmp, SECRET)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Gmail"))
        .stdout(predicate::str::contains("Netflix"))
        .stdout(predicate::str::contains("shop123").not());

    assert!(tmp.path().join(".passvault").join("secure_vault_data").exists());
}

#[test]
fn list_reveal_shows_passwords() {
    let tmp = TempDir::new().unwrap();

    in_vault(&tmp, SECRET)
        .args(["list", "--reveal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("shop123"));
}

#[test]
fn insights_json_reports_score() {
    let tmp = TempDir::new().unwrap();

    in_vault(&tmp, SECRET)
        .args(["insights", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"securityScore\""))
        .stdout(predicate::str::contains("\"totalPasswords\": 5"))
        .stdout(predicate::str::contains("\"weakPasswords\": 1"));
}

#[test]
fn add_then_show() {
    let tmp = TempDir::new().unwrap();

    in_vault(&tmp, SECRET)
        .args([
            "add",
            "Bank",
            "me@example.com",
            "--url",
            "bank.example",
            "--password",
            "Bank!ng2024",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added 'Bank'"));

    in_vault(&tmp, SECRET)
        .args(["list", "--reveal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bank!ng2024"))
        .stdout(predicate::str::contains("bank.example"));

    in_vault(&tmp, SECRET)
        .args(["show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("P@ssw0rd123"));
}

#[test]
fn add_reads_password_from_stdin() {
    let tmp = TempDir::new().unwrap();

    in_vault(&tmp, SECRET)
        .args(["add", "Piped", "me"])
        .write_stdin("from-stdin-pw\n")
        .assert()
        .success();

    in_vault(&tmp, SECRET)
        .args(["list", "--reveal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("from-stdin-pw"));
}

#[test]
fn edit_changes_title() {
    let tmp = TempDir::new().unwrap();

    in_vault(&tmp, SECRET)
        .args(["edit", "3", "--title", "Amazon Prime"])
        .assert()
        .success();

    in_vault(&tmp, SECRET)
        .args(["show", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Amazon Prime"));
}

#[test]
fn edit_unknown_id_fails() {
    let tmp = TempDir::new().unwrap();

    in_vault(&tmp, SECRET)
        .args(["edit", "nope", "--title", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nope"));
}

#[test]
fn delete_with_force() {
    let tmp = TempDir::new().unwrap();

    in_vault(&tmp, SECRET)
        .args(["delete", "2", "--force"])
        .assert()
        .success();

    in_vault(&tmp, SECRET)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Facebook").not());
}

#[test]
fn delete_unknown_id_fails() {
    let tmp = TempDir::new().unwrap();

    in_vault(&tmp, SECRET)
        .args(["delete", "nope", "--force"])
        .assert()
        .failure();
}

#[test]
fn show_unknown_id_fails() {
    let tmp = TempDir::new().unwrap();

    in_vault(&tmp, SECRET)
        .args(["show", "nope"])
        .assert()
        .failure();
}

#[test]
fn wrong_secret_is_reported() {
    let tmp = TempDir::new().unwrap();

    in_vault(&tmp, SECRET).arg("list").assert().success();

    in_vault(&tmp, "not-the-secret")
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Decryption failed"));
}

#[test]
fn change_master_reseals_vault() {
    let tmp = TempDir::new().unwrap();

    in_vault(&tmp, SECRET).arg("list").assert().success();

    in_vault(&tmp, SECRET)
        .arg("change-master")
        .env("PASSVAULT_NEW_MASTER", "a-much-better-secret")
        .assert()
        .success();

    in_vault(&tmp, SECRET).arg("list").assert().failure();

    in_vault(&tmp, "a-much-better-secret")
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Gmail"));
}

#[test]
fn change_master_rejects_short_secret() {
    let tmp = TempDir::new().unwrap();

    in_vault(&tmp, SECRET)
        .arg("change-master")
        .env("PASSVAULT_NEW_MASTER", "short")
        .assert()
        .failure();
}

#[test]
fn new_vault_rejects_short_secret() {
    let tmp = TempDir::new().unwrap();

    in_vault(&tmp, "short")
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 8 characters"));

    assert!(!tmp.path().join(".passvault").join("secure_vault_data").exists());
}

#[test]
fn existing_vault_does_not_recheck_secret_length() {
    let tmp = TempDir::new().unwrap();

    in_vault(&tmp, SECRET).arg("list").assert().success();

    // A short wrong secret is a decryption failure, not a length error.
    in_vault(&tmp, "short")
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Decryption failed"));
}

#[test]
fn vault_dir_flag_overrides_default() {
    let tmp = TempDir::new().unwrap();

    in_vault(&tmp, SECRET)
        .args(["list", "--vault-dir", "custom-vault"])
        .assert()
        .success();

    assert!(tmp.path().join("custom-vault").join("secure_vault_data").exists());
    assert!(!tmp.path().join(".passvault").exists());
}

#[test]
fn config_file_selects_storage_key() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(
        tmp.path().join(".passvault.toml"),
        "storage_key = \"work_vault\"\nseed_demo_data = false\n",
    )
    .unwrap();

    in_vault(&tmp, SECRET)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Gmail").not());

    assert!(tmp.path().join(".passvault").join("work_vault").exists());
}

#[test]
fn completions_bash() {
    passvault()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("passvault"));
}

#[test]
fn completions_unknown_shell_fails() {
    passvault()
        .args(["completions", "tcsh"])
        .assert()
        .failure();
}
