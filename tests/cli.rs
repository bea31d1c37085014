//! CLI 整合測試

use assert_cmd::Command;
use predicates::prelude::*;

fn lettr_tabs() -> Command {
    Command::cargo_bin("lettr-tabs").unwrap()
}

#[test]
fn list_names_every_tab() {
    lettr_tabs()
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Laravel\tphp"))
        .stdout(predicate::str::contains("Node.js\tjavascript"))
        .stdout(predicate::str::contains("cURL\tbash"));
}

#[test]
fn json_export_is_valid() {
    let output = lettr_tabs().arg("--json").assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();

    let payload: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(payload["theme"]["name"], "lettr");
    assert_eq!(payload["theme"]["kind"], "dark");
    assert_eq!(payload["samples"].as_array().unwrap().len(), 7);
}

#[test]
fn renders_named_tab() {
    lettr_tabs()
        .args(["Python", "--plain"])
        .assert()
        .success()
        .stdout(predicate::str::contains("import lettr"))
        .stdout(predicate::str::contains("[Python]"));
}

#[test]
fn tab_label_is_case_insensitive() {
    lettr_tabs()
        .args(["curl", "--plain"])
        .assert()
        .success()
        .stdout(predicate::str::contains("api.lettr.dev"));
}

#[test]
fn unknown_tab_fails() {
    lettr_tabs()
        .args(["Swift"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown tab 'Swift'"));
}
