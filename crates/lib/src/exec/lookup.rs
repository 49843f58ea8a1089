//! Executable search, in the manner of a shell's `PATH` lookup.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::exec::types::ExecError;

/// Resolve `name` to an executable file.
///
/// A name containing a path separator is checked as-is. Anything else is
/// searched for in each `PATH` entry, in order; empty entries are skipped.
pub fn find_binary(name: &OsStr) -> Result<PathBuf, ExecError> {
  let not_found = || ExecError::NotFound {
    name: name.to_string_lossy().into_owned(),
  };

  let candidate = Path::new(name);
  if name.is_empty() {
    return Err(not_found());
  }
  if candidate.components().count() > 1 {
    return if is_executable(candidate) {
      Ok(candidate.to_path_buf())
    } else {
      Err(not_found())
    };
  }

  let paths = std::env::var_os("PATH").ok_or_else(not_found)?;
  std::env::split_paths(&paths)
    .filter(|dir| !dir.as_os_str().is_empty())
    .flat_map(|dir| candidates(&dir, name))
    .find(|path| is_executable(path))
    .ok_or_else(not_found)
}

#[cfg(windows)]
fn candidates(dir: &Path, name: &OsStr) -> Vec<PathBuf> {
  let mut exe = std::ffi::OsString::from(name);
  exe.push(".exe");
  vec![dir.join(name), dir.join(exe)]
}

#[cfg(not(windows))]
fn candidates(dir: &Path, name: &OsStr) -> Vec<PathBuf> {
  vec![dir.join(name)]
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
  use std::os::unix::fs::PermissionsExt;

  std::fs::metadata(path)
    .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
    .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
  path.is_file()
}
