//! Types for invoking the blogc binary.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while locating, validating or running the blogc binary.
///
/// A nonzero exit status is not an error at this layer; it is reported in
/// [`RunOutput::status`] for the caller to interpret.
#[derive(Debug, Error)]
pub enum ExecError {
  /// The binary could not be found in `PATH` (or at the given path).
  #[error(
    "failed to find {name:?} binary in PATH, please install from https://blogc.rgm.io/, or set BLOGC environment variable"
  )]
  NotFound { name: String },

  /// `blogc -v` exited unsuccessfully.
  #[error("{binary:?} failed to report its version (exit code {code:?})")]
  VersionFailed { binary: PathBuf, code: Option<i32> },

  /// `blogc -v` printed something other than `blogc <version>`.
  #[error("malformed version reported by {binary:?} binary: {output}")]
  MalformedVersion { binary: PathBuf, output: String },

  /// A version string could not be parsed.
  #[error("invalid version {version:?}: {source}")]
  InvalidVersion {
    version: String,
    #[source]
    source: semver::Error,
  },

  /// The binary is older than required.
  #[error("version {required:?} or greater required, got {actual:?}")]
  VersionTooOld { required: String, actual: String },

  /// The process could not be started.
  #[error("failed to start {binary:?}: {source}")]
  Spawn {
    binary: PathBuf,
    #[source]
    source: io::Error,
  },

  /// Pipe or wait failure after the process started.
  #[error("io error: {0}")]
  Io(#[from] io::Error),
}

/// Everything a finished blogc process produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOutput {
  /// Exit status, or `-1` if the process was terminated by a signal.
  pub status: i32,
  /// Raw standard output; printed variable values may be any bytes.
  pub stdout: Vec<u8>,
  /// Standard error, lossily decoded. Only used for diagnostics.
  pub stderr: String,
}

impl RunOutput {
  pub fn success(&self) -> bool {
    self.status == 0
  }
}
