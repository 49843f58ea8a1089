//! Test utilities for blogc-lib.
//!
//! Tests that need a compiler use a small shell script standing in for blogc.
//! It answers `-v` with a fixed line and runs `body` for everything else.

use std::ffi::OsString;
#[cfg(unix)]
use std::ffi::OsStr;
#[cfg(unix)]
use std::path::{Path, PathBuf};

/// Convert string arguments into the form passed to blogc.
pub fn args(items: &[&str]) -> Vec<OsString> {
  items.iter().map(OsString::from).collect()
}

/// Write an executable fake `blogc` into `dir`.
///
/// `version_line` is printed for `-v`; `body` is the shell script run for
/// any other invocation.
#[cfg(unix)]
pub fn fake_blogc(dir: &Path, version_line: &str, body: &str) -> PathBuf {
  fake_blogc_named(dir, OsStr::new("blogc"), version_line, body)
}

/// Like [`fake_blogc`], with a custom file name.
#[cfg(unix)]
pub fn fake_blogc_named(dir: &Path, name: &OsStr, version_line: &str, body: &str) -> PathBuf {
  use std::os::unix::fs::PermissionsExt;

  let path = dir.join(name);
  let script = format!(
    "#!/bin/sh\nif [ \"$1\" = \"-v\" ]; then\n  echo \"{}\"\n  exit 0\nfi\n{}\n",
    version_line, body
  );
  std::fs::write(&path, script).unwrap();
  std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
  path
}

/// A fake blogc that records its arguments (one per line) to `args.txt` and
/// its standard input to `stdin.txt` in `dir`, then runs `body`.
#[cfg(unix)]
pub fn recording_blogc(dir: &Path, body: &str) -> PathBuf {
  let script = format!(
    "printf '%s\\n' \"$@\" > \"{args}\"\ncat > \"{stdin}\"\n{body}",
    args = dir.join("args.txt").display(),
    stdin = dir.join("stdin.txt").display(),
    body = body
  );
  fake_blogc(dir, "blogc 0.20.1", &script)
}

/// Arguments recorded by [`recording_blogc`].
#[cfg(unix)]
pub fn recorded_args(dir: &Path) -> Vec<String> {
  std::fs::read_to_string(dir.join("args.txt"))
    .unwrap()
    .lines()
    .map(str::to_string)
    .collect()
}

/// Standard input recorded by [`recording_blogc`].
#[cfg(unix)]
pub fn recorded_stdin(dir: &Path) -> String {
  std::fs::read_to_string(dir.join("stdin.txt")).unwrap()
}
