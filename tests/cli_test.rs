//! Command line tests for `domlet`.

use assert_cmd::Command;
use indoc::indoc;
use predicates::prelude::*;
use std::fs::write;
use tempfile::tempdir;

fn domlet() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_domlet"));

    command.env("NO_COLOR", "1").env_remove("RUST_LOG");

    command
}

#[test]
fn create_elements() {
    domlet()
        .args(["div", "span"])
        .assert()
        .success()
        .stdout("OK\tdiv\nOK\tspan\n");
}

#[test]
fn fail_on_rejected_name() {
    domlet()
        .args(["div", ""])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("OK\tdiv"))
        .stdout(predicate::str::contains("ERROR\t\"\"\tempty name"))
        .stderr(predicate::str::contains("1 element name(s) rejected"));
}

#[test]
fn write_summary_to_stderr() {
    domlet()
        .arg("div")
        .assert()
        .success()
        .stdout(predicate::str::contains("created").not())
        .stderr(predicate::str::contains("created"))
        .stderr(predicate::str::contains("rejected"))
        .stderr(predicate::str::contains("unchecked"))
        .stderr(predicate::str::contains("element"));
}

#[test]
fn require_unchecked_for_value() {
    domlet()
        .args(["--value", "div"])
        .assert()
        .failure()
        .code(2)
        .stdout("")
        .stderr(predicate::str::contains("--unchecked"));
}

#[test]
fn create_unchecked_elements_with_value() {
    domlet()
        .args(["--unchecked", "--value", "", "p"])
        .assert()
        .success()
        .stdout("OK\t\tvalue\nOK\tp\tvalue\n");
}

#[test]
fn require_names() {
    domlet().assert().failure().code(2);
}

#[test]
fn render_json() {
    domlet()
        .args(["--format", "json", "1a"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains(r#""name":"1a""#))
        .stdout(predicate::str::contains(r#""kind":"invalid_character""#));
}

#[test]
fn substitute_names_with_configuration() {
    let directory = tempdir().unwrap();
    let path = directory.path().join("domlet.toml");

    write(
        &path,
        indoc! {r#"
            [unchecked]
            policy = "substitute"
            fallback = "div"
        "#},
    )
    .unwrap();

    domlet()
        .arg("--config")
        .arg(&path)
        .args(["--unchecked", "1a"])
        .assert()
        .success()
        .stdout("OK\tdiv\n");
}

#[test]
fn fail_on_fallback_longer_than_maximum() {
    let directory = tempdir().unwrap();
    let path = directory.path().join("domlet.toml");

    write(
        &path,
        indoc! {r#"
            max_name_length = 2

            [unchecked]
            policy = "substitute"
            fallback = "div"
        "#},
    )
    .unwrap();

    domlet()
        .arg("--config")
        .arg(&path)
        .arg("p")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid fallback"));
}
