//! Integration tests for the PassVault CLI.
//!
//! These tests exercise the binary end-to-end using `assert_cmd`.
//! The master password is supplied through `PASSVAULT_PASSWORD` so no
//! command ever waits on an interactive prompt. Clipboard commands are
//! not covered here since they need a desktop session.

use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;

/// Helper: get a Command pointing at the passvault binary.
fn passvault() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("passvault").expect("binary should exist")
}

/// Helper: a command run inside `dir` with the given master password.
fn in_vault(dir: &TempDir, password: &str) -> Command {
    let mut cmd = passvault();
    cmd.current_dir(dir.path())
        .env("PASSVAULT_PASSWORD", password)
        .env_remove("PASSVAULT_LOG");
    cmd
}

#[test]
fn help_flag_shows_usage() {
    passvault()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Local encrypted password manager"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("add"))
        .stdout(predicate::str::contains("delete"))
        .stdout(predicate::str::contains("delete-all"))
        .stdout(predicate::str::contains("copy"))
        .stdout(predicate::str::contains("shell"));
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
fn completions_bash_succeeds() {
    passvault()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("passvault"));
}

#[test]
fn completions_rejects_unknown_shell() {
    passvault()
        .args(["completions", "csh"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid value 'csh'"));
}

#[test]
fn first_run_creates_vault_files() {
    let tmp = TempDir::new().unwrap();

    in_vault(&tmp, "Secret123")
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Master password created"))
        .stdout(predicate::str::contains("No passwords"));

    tmp.child(".passvault/master.hash")
        .assert(predicate::path::exists());
    tmp.child(".passvault/key.key")
        .assert(predicate::path::exists());
    // Nothing has been added yet, so no vault file is written.
    tmp.child(".passvault/vault_data.json")
        .assert(predicate::path::missing());
}

#[test]
fn add_then_list_masks_secret() {
    let tmp = TempDir::new().unwrap();

    in_vault(&tmp, "Secret123")
        .args(["add", "github.com", "me", "p@ss1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved password for github.com (1 total)"))
        .stderr(predicate::str::contains("shell history"));

    in_vault(&tmp, "Secret123")
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("github.com"))
        .stdout(predicate::str::contains("******"))
        .stdout(predicate::str::contains("p@ss1").not());
}

#[test]
fn add_reads_piped_secret() {
    let tmp = TempDir::new().unwrap();

    in_vault(&tmp, "pw")
        .args(["add", "example.org", "someone"])
        .write_stdin("piped-secret\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved password for example.org"));
}

#[test]
fn piped_secret_without_env_password_is_refused() {
    let tmp = TempDir::new().unwrap();

    passvault()
        .current_dir(tmp.path())
        .env_remove("PASSVAULT_PASSWORD")
        .env_remove("PASSVAULT_LOG")
        .args(["add", "example.org", "someone"])
        .write_stdin("piped-secret\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("PASSVAULT_PASSWORD"));

    // Refused before the vault was touched.
    tmp.child(".passvault").assert(predicate::path::missing());
}

#[test]
fn trace_logging_never_shows_secret_material() {
    let tmp = TempDir::new().unwrap();
    let master = "Master-Pw-42";
    let secret = "Sup3r$ecretValue";
    let digest_hex: String = passvault::crypto::digest_passphrase(master)
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect();

    let add = in_vault(&tmp, master)
        .env("PASSVAULT_LOG", "passvault=trace")
        .args(["--verbose", "add", "github.com", "me", secret])
        .assert()
        .success();
    let list = in_vault(&tmp, master)
        .env("PASSVAULT_LOG", "passvault=trace")
        .args(["--verbose", "list"])
        .assert()
        .success();

    let key = std::fs::read(tmp.path().join(".passvault/key.key")).unwrap();
    let key_hex: String = key.iter().map(|b| format!("{b:02x}")).collect();

    let add_log = String::from_utf8_lossy(&add.get_output().stderr).into_owned();
    let list_log = String::from_utf8_lossy(&list.get_output().stderr).into_owned();
    assert!(add_log.contains("vault persisted"));
    assert!(list_log.contains("vault loaded"));

    for output in [add.get_output(), list.get_output()] {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let stdout = String::from_utf8_lossy(&output.stdout);
        for text in [&stderr, &stdout] {
            assert!(!text.contains(master));
            assert!(!text.contains(secret));
            assert!(!text.contains(&digest_hex));
            assert!(!text.contains(&key_hex));
        }
    }
}

#[test]
fn wrong_password_exits_cleanly() {
    let tmp = TempDir::new().unwrap();

    in_vault(&tmp, "Secret123").arg("list").assert().success();

    in_vault(&tmp, "wrong")
        .arg("list")
        .assert()
        .code(0)
        .stderr(predicate::str::contains("Incorrect master password"));
}

#[test]
fn delete_with_force_removes_entry() {
    let tmp = TempDir::new().unwrap();

    in_vault(&tmp, "pw")
        .args(["add", "a.com", "me", "one"])
        .assert()
        .success();
    in_vault(&tmp, "pw")
        .args(["add", "b.com", "me", "two"])
        .assert()
        .success();

    in_vault(&tmp, "pw")
        .args(["delete", "1", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted password for a.com"));

    in_vault(&tmp, "pw")
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains("Number of entries: 1"));
}

#[test]
fn delete_missing_entry_fails() {
    let tmp = TempDir::new().unwrap();

    in_vault(&tmp, "pw")
        .args(["delete", "3", "--force"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("no entry #3"));
}

#[test]
fn delete_all_with_force_empties_vault() {
    let tmp = TempDir::new().unwrap();

    for site in ["a.com", "b.com"] {
        in_vault(&tmp, "pw")
            .args(["add", site, "me", "secret"])
            .assert()
            .success();
    }

    in_vault(&tmp, "pw")
        .args(["delete-all", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All passwords have been deleted."));

    in_vault(&tmp, "pw")
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No passwords"));
}

#[test]
fn corrupted_vault_exits_with_error() {
    let tmp = TempDir::new().unwrap();

    in_vault(&tmp, "pw")
        .args(["add", "a.com", "me", "secret"])
        .assert()
        .success();

    tmp.child(".passvault/vault_data.json")
        .write_binary(&[0u8; 64])
        .unwrap();

    in_vault(&tmp, "pw")
        .arg("list")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Decryption failed"));
}

#[test]
fn vault_dir_flag_overrides_default() {
    let tmp = TempDir::new().unwrap();

    in_vault(&tmp, "pw")
        .args(["--vault-dir", "elsewhere", "add", "a.com", "me", "secret"])
        .assert()
        .success();

    tmp.child("elsewhere/vault_data.json")
        .assert(predicate::path::exists());
    tmp.child(".passvault").assert(predicate::path::missing());
}

#[test]
fn config_file_sets_vault_dir() {
    let tmp = TempDir::new().unwrap();
    tmp.child(".passvault.toml")
        .write_str("vault_dir = \"from-config\"\n")
        .unwrap();

    in_vault(&tmp, "pw")
        .args(["add", "a.com", "me", "secret"])
        .assert()
        .success();

    tmp.child("from-config/key.key")
        .assert(predicate::path::exists());
}
