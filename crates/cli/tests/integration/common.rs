//! Shared test helpers for CLI integration tests.

use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

/// Stand-in for blogc: renders `rendered <input>` into the `-o` file, prints
/// `TITLE` for `-p`, and fails like blogc when the template is missing.
const FAKE_BLOGC: &str = r#"#!/bin/sh
if [ "$1" = "-v" ]; then
  echo "blogc 0.20.1"
  exit 0
fi
input=""
out=""
tmpl=""
print=""
while [ $# -gt 0 ]; do
  case "$1" in
    -o) out="$2"; shift ;;
    -t) tmpl="$2"; shift ;;
    -p) print="$2"; shift ;;
    -D|-e) shift ;;
    -l|-i) ;;
    *) input="$1" ;;
  esac
  shift
done
if [ -n "$print" ]; then
  if [ "$print" = "TITLE" ]; then
    echo "Hello World"
    exit 0
  fi
  exit 78
fi
if [ ! -f "$tmpl" ]; then
  echo "blogc: error: template: failed to read template file: $tmpl" >&2
  exit 1
fi
echo "rendered $input" > "$out"
"#;

/// Isolated site directory with a fake blogc binary.
pub struct TestSite {
  pub temp: TempDir,
  pub blogc: PathBuf,
}

impl TestSite {
  pub fn new() -> Self {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().unwrap();
    let blogc = temp.path().join("bin").join("blogc");
    std::fs::create_dir_all(blogc.parent().unwrap()).unwrap();
    std::fs::write(&blogc, FAKE_BLOGC).unwrap();
    std::fs::set_permissions(&blogc, std::fs::Permissions::from_mode(0o755)).unwrap();
    Self { temp, blogc }
  }

  pub fn path(&self) -> &Path {
    self.temp.path()
  }

  /// Write a file relative to the site directory, dated `age` in the past.
  pub fn write_file(&self, relative_path: &str, content: &str, age: Duration) {
    let path = self.path().join(relative_path);
    if let Some(parent) = path.parent() {
      std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, content).unwrap();
    std::fs::File::options()
      .write(true)
      .open(&path)
      .unwrap()
      .set_modified(SystemTime::now() - age)
      .unwrap();
  }

  pub fn read_file(&self, relative_path: &str) -> String {
    std::fs::read_to_string(self.path().join(relative_path)).unwrap()
  }

  /// A blogc-run command running in the site directory with the fake blogc.
  pub fn cmd(&self) -> Command {
    let mut cmd = cargo_bin_cmd!("blogc-run");
    cmd.current_dir(self.path()).env("BLOGC", &self.blogc).env_remove("RUST_LOG");
    cmd
  }
}

pub const HOUR: Duration = Duration::from_secs(3600);
