//! Integration tests for `blogc-run build`.

use predicates::prelude::*;

use crate::common::{HOUR, TestSite};

const MANIFEST: &str = r#"{
  "variables": ["SITE_TITLE=Test"],
  "builds": [
    { "inputs": ["content/a.txt"], "output": "out/a.html", "template": "main.tmpl" },
    { "listing": true, "inputs": ["content/a.txt", "content/b.txt"],
      "output": "out/index.html", "template": "main.tmpl" }
  ]
}"#;

fn site() -> TestSite {
  let site = TestSite::new();
  site.write_file("blogc.json", MANIFEST, HOUR);
  site.write_file("main.tmpl", "{{ CONTENT }}", HOUR);
  site.write_file("content/a.txt", "A", HOUR);
  site.write_file("content/b.txt", "B", HOUR);
  std::fs::create_dir_all(site.path().join("out")).unwrap();
  site
}

#[test]
fn build_renders_outdated_targets() {
  let site = site();

  site
    .cmd()
    .arg("build")
    .assert()
    .success()
    .stderr(predicate::str::contains("  BLOGC    "))
    .stderr(predicate::str::contains("out/a.html"))
    .stdout(predicate::str::contains("Built 2 of 2 target(s)"));

  assert!(site.read_file("out/a.html").starts_with("rendered "));
  assert!(site.path().join("out/index.html").exists());
}

#[test]
fn second_build_is_a_no_op() {
  let site = site();
  site.cmd().arg("build").assert().success();

  site
    .cmd()
    .arg("build")
    .assert()
    .success()
    .stderr(predicate::str::contains("BLOGC").not())
    .stdout(predicate::str::contains("All 2 target(s) up to date"));
}

#[test]
fn touched_dependency_triggers_rebuild() {
  let site = site();
  site.cmd().arg("build").assert().success();

  site.write_file("content/b.txt", "B2", std::time::Duration::ZERO);

  site
    .cmd()
    .arg("build")
    .assert()
    .success()
    .stderr(predicate::str::contains("out/index.html"))
    .stderr(predicate::str::contains("out/a.html").not())
    .stdout(predicate::str::contains("Built 1 of 2 target(s)"));
}

#[test]
fn failing_target_stops_the_build() {
  let site = site();
  std::fs::remove_file(site.path().join("main.tmpl")).unwrap();

  site
    .cmd()
    .arg("build")
    .assert()
    .code(1)
    .stderr(predicate::str::contains("blogc-run: error: \""))
    .stderr(predicate::str::contains("failed to read template file"))
    .stderr(predicate::str::contains("out/index.html").not());

  assert!(!site.path().join("out/a.html").exists());
}

#[test]
fn old_blogc_is_rejected() {
  let site = site();
  let script = std::fs::read_to_string(&site.blogc).unwrap().replace("blogc 0.20.1", "blogc 0.15.0");
  std::fs::write(&site.blogc, script).unwrap();

  site
    .cmd()
    .arg("build")
    .assert()
    .failure()
    .stderr(predicate::str::contains("or greater required"));
}
