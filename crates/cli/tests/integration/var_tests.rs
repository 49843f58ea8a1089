//! Integration tests for `blogc-run var` and `blogc-run version`.

use predicates::prelude::*;

use crate::common::{HOUR, TestSite};

#[test]
fn var_prints_value() {
  let site = TestSite::new();
  site.write_file("post.txt", "TITLE: Hello World\n", HOUR);

  site
    .cmd()
    .args(["var", "TITLE", "post.txt"])
    .assert()
    .success()
    .stdout("Hello World\n");
}

#[test]
fn var_not_found_exits_nonzero() {
  let site = TestSite::new();
  site.write_file("post.txt", "", HOUR);

  site
    .cmd()
    .args(["var", "MISSING", "post.txt"])
    .assert()
    .code(1)
    .stderr(predicate::str::contains("variable not found: MISSING"));
}

#[test]
fn var_json_output() {
  let site = TestSite::new();
  site.write_file("a.txt", "", HOUR);
  site.write_file("b.txt", "", HOUR);

  let output = site
    .cmd()
    .args(["var", "TITLE", "a.txt", "b.txt", "--listing", "--output", "json"])
    .output()
    .unwrap();

  assert!(output.status.success());
  let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
  assert_eq!(value["value"], "Hello World");
  assert_eq!(value["found"], true);
}

#[test]
fn var_rejects_multiple_inputs_without_listing() {
  let site = TestSite::new();

  site
    .cmd()
    .args(["var", "TITLE", "a.txt", "b.txt"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("one input file is required"));
}

#[test]
fn version_reports_binary() {
  let site = TestSite::new();

  site
    .cmd()
    .arg("version")
    .assert()
    .success()
    .stdout(predicate::str::contains("blogc 0.20.1"))
    .stdout(predicate::str::contains("0.16.0"));
}
