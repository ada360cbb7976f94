//! Integration tests for the PassMaster CLI.
//!
//! These tests exercise the binary end-to-end using `assert_cmd`.
//! Every test runs inside its own temp directory so the default
//! `secret.key` / `passwords.vault` paths never collide.

use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;

/// Helper: get a Command pointing at the passmaster binary, run in `dir`.
fn passmaster(dir: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("passmaster").expect("binary should exist");
    cmd.current_dir(dir.path())
        .env_remove("PASSMASTER_KEY_FILE")
        .env_remove("PASSMASTER_VAULT_FILE")
        .env_remove("PASSMASTER_LOG");
    cmd
}

/// Add an entry and return the short id printed by `add`.
fn add_entry(dir: &TempDir, identifier: &str, secret: &str, memo: &str) -> String {
    let out = passmaster(dir)
        .args(["add", identifier, "-s", secret, "-m", memo])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8(out).unwrap();
    text.split(" as ")
        .nth(1)
        .and_then(|rest| rest.split_whitespace().next())
        .expect("add should print the new id")
        .to_string()
}

#[test]
fn help_flag_shows_usage() {
    let tmp = TempDir::new().unwrap();
    passmaster(&tmp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Password generator and encrypted credential vault",
        ))
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("add"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("remove"))
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("strength"));
}

#[test]
fn version_flag_shows_version() {
    let tmp = TempDir::new().unwrap();
    passmaster(&tmp)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("passmaster"));
}

#[test]
fn no_args_shows_help() {
    let tmp = TempDir::new().unwrap();
    passmaster(&tmp)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn init_creates_key_and_vault() {
    let tmp = TempDir::new().unwrap();
    passmaster(&tmp)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created key"));

    tmp.child("secret.key").assert(predicate::path::is_file());
    tmp.child("passwords.vault").assert(predicate::path::is_file());
    assert_eq!(
        std::fs::metadata(tmp.child("secret.key").path()).unwrap().len(),
        32
    );
}

#[test]
fn init_twice_keeps_the_key() {
    let tmp = TempDir::new().unwrap();
    passmaster(&tmp).arg("init").assert().success();
    let key = std::fs::read(tmp.child("secret.key").path()).unwrap();

    passmaster(&tmp)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Using existing key"));
    assert_eq!(std::fs::read(tmp.child("secret.key").path()).unwrap(), key);
}

#[test]
fn add_list_show_remove_flow() {
    let tmp = TempDir::new().unwrap();

    let id = add_entry(&tmp, "bank", "x1-secret", "checking");
    add_entry(&tmp, "mail", "x2-secret", "");

    passmaster(&tmp)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("bank"))
        .stdout(predicate::str::contains("mail"))
        .stdout(predicate::str::contains("checking"))
        .stdout(predicate::str::contains("x1-secret").not());

    passmaster(&tmp)
        .args(["show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("x1-secret"));

    passmaster(&tmp)
        .args(["remove", &id, "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted 'bank'"));

    passmaster(&tmp)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("mail"))
        .stdout(predicate::str::contains("bank").not());
}

#[test]
fn list_filter_narrows_results() {
    let tmp = TempDir::new().unwrap();
    add_entry(&tmp, "GitHub", "a", "work");
    add_entry(&tmp, "bank", "b", "");

    passmaster(&tmp)
        .args(["list", "WORK"])
        .assert()
        .success()
        .stdout(predicate::str::contains("GitHub"))
        .stdout(predicate::str::contains("bank").not());
}

#[test]
fn add_reads_secret_from_stdin() {
    let tmp = TempDir::new().unwrap();
    let out = passmaster(&tmp)
        .args(["add", "piped"])
        .write_stdin("from-stdin\n")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8(out).unwrap();
    let id = text
        .split(" as ")
        .nth(1)
        .and_then(|rest| rest.split_whitespace().next())
        .unwrap()
        .to_string();

    passmaster(&tmp)
        .args(["show", &id])
        .assert()
        .success()
        .stdout(predicate::str::diff("from-stdin\n"));
}

#[test]
fn add_generate_stores_generated_password() {
    let tmp = TempDir::new().unwrap();
    passmaster(&tmp)
        .args(["add", "site", "--generate", "-l", "24"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved 'site'"))
        .stdout(predicate::str::contains("Strength: strong"));
}

#[test]
fn add_with_empty_secret_fails() {
    let tmp = TempDir::new().unwrap();
    passmaster(&tmp)
        .args(["add", "bank", "-s", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid input"));
}

#[test]
fn show_unknown_id_fails() {
    let tmp = TempDir::new().unwrap();
    add_entry(&tmp, "bank", "x1", "");

    passmaster(&tmp)
        .args(["show", "ffffffff-ffff-4fff-bfff-ffffffffffff"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn generate_respects_length_and_classes() {
    let tmp = TempDir::new().unwrap();
    let out = passmaster(&tmp)
        .args(["generate", "-l", "20", "--no-symbols", "--no-upper"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8(out).unwrap();
    let password = text.lines().next().unwrap();

    assert_eq!(password.chars().count(), 20);
    assert!(password
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
}

#[test]
fn generate_with_no_classes_fails() {
    let tmp = TempDir::new().unwrap();
    passmaster(&tmp)
        .args([
            "generate",
            "--no-upper",
            "--no-lower",
            "--no-digits",
            "--no-symbols",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least one character class"));
}

#[test]
fn generate_with_bad_length_fails() {
    let tmp = TempDir::new().unwrap();
    for bad in ["0", "abc", "-3"] {
        passmaster(&tmp)
            .args(["generate", "--length", bad])
            .assert()
            .failure();
    }
}

#[test]
fn generate_uses_configured_default_length() {
    let tmp = TempDir::new().unwrap();
    tmp.child(".passmaster.toml")
        .write_str("default_length = 9\n")
        .unwrap();

    let out = passmaster(&tmp)
        .arg("generate")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.lines().next().unwrap().chars().count(), 9);
}

#[test]
fn strength_rates_passwords() {
    let tmp = TempDir::new().unwrap();
    passmaster(&tmp)
        .args(["strength", "a"])
        .assert()
        .success()
        .stdout(predicate::str::contains("weak"));

    passmaster(&tmp)
        .args(["strength", "aaaaaaaa"])
        .assert()
        .success()
        .stdout(predicate::str::contains("medium"));

    passmaster(&tmp)
        .args(["strength", "Ab1!Ab1!"])
        .assert()
        .success()
        .stdout(predicate::str::contains("strong"));
}

#[test]
fn vault_without_key_is_refused() {
    let tmp = TempDir::new().unwrap();
    add_entry(&tmp, "bank", "x1", "");
    std::fs::remove_file(tmp.child("secret.key").path()).unwrap();

    passmaster(&tmp)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing"));
    tmp.child("secret.key").assert(predicate::path::missing());
}

#[test]
fn custom_paths_via_flags() {
    let tmp = TempDir::new().unwrap();
    passmaster(&tmp)
        .args([
            "--key-file",
            "keys/my.key",
            "--vault-file",
            "my.vault",
            "add",
            "bank",
            "-s",
            "x1",
        ])
        .assert()
        .success();

    tmp.child("keys/my.key").assert(predicate::path::is_file());
    tmp.child("my.vault").assert(predicate::path::is_file());
    tmp.child("passwords.vault").assert(predicate::path::missing());
}

#[test]
fn completions_emit_script() {
    let tmp = TempDir::new().unwrap();
    passmaster(&tmp)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("passmaster"));
}

#[test]
fn nested_paths_from_config_are_created() {
    let tmp = TempDir::new().unwrap();
    tmp.child(".passmaster.toml")
        .write_str("key_file = \"keys/vault.key\"\nvault_file = \"data/creds.vault\"\n")
        .unwrap();

    let id = add_entry(&tmp, "bank", "x1-secret", "");

    tmp.child("keys/vault.key").assert(predicate::path::is_file());
    tmp.child("data/creds.vault").assert(predicate::path::is_file());

    passmaster(&tmp)
        .args(["show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("x1-secret"));
}

#[test]
fn ids_from_list_still_resolve_in_a_later_run() {
    let tmp = TempDir::new().unwrap();
    let id = add_entry(&tmp, "bank", "x1", "");

    passmaster(&tmp)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains(id.as_str()));

    passmaster(&tmp)
        .args(["remove", &id, "--force"])
        .assert()
        .success();
}

#[cfg(feature = "audit-log")]
#[test]
fn audit_lists_operations_without_secrets() {
    let tmp = TempDir::new().unwrap();
    let id = add_entry(&tmp, "bank", "x1-secret", "private memo");
    passmaster(&tmp).args(["show", &id]).assert().success();

    passmaster(&tmp)
        .arg("audit")
        .assert()
        .success()
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("add"))
        .stdout(predicate::str::contains("bank"))
        .stdout(predicate::str::contains(id.as_str()))
        .stdout(predicate::str::contains("x1-secret").not())
        .stdout(predicate::str::contains("private memo").not());
}

#[test]
fn generate_rejects_huge_length() {
    let tmp = TempDir::new().unwrap();
    passmaster(&tmp)
        .args(["generate", "--length", "99999999999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("from 1 to 4096"));
}
