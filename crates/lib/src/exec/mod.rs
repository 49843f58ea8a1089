//! Process invoker for the blogc binary.
//!
//! The binary is resolved and version-checked once, producing an immutable
//! [`Blogc`] value that every invocation goes through. Each call spawns one
//! process; standard input is fed by a detached writer task while standard
//! output and standard error are drained concurrently, so a compiler that
//! produces output before it finishes reading input cannot deadlock us.

pub mod lookup;
pub mod types;
pub mod version;

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Stdio;

use semver::Version;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, info};

use crate::consts::{BLOGC_BIN, BLOGC_ENV, BLOGC_REQUIRED_VERSION};

pub use types::{ExecError, RunOutput};

/// A located blogc binary of a supported version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blogc {
  binary: PathBuf,
  package_version: String,
  version: String,
  parsed_version: Version,
}

impl Blogc {
  /// Locate blogc using the `BLOGC` environment variable or `PATH`, then
  /// check its version.
  pub async fn detect() -> Result<Self, ExecError> {
    let name = std::env::var_os(BLOGC_ENV).unwrap_or_else(|| BLOGC_BIN.into());
    let binary = lookup::find_binary(&name)?;
    Self::with_binary(binary).await
  }

  /// Use the binary at `binary`, checking its version.
  pub async fn with_binary(binary: impl Into<PathBuf>) -> Result<Self, ExecError> {
    let binary = binary.into();

    let output = Command::new(&binary)
      .arg("-v")
      .stdin(Stdio::null())
      .output()
      .await
      .map_err(|source| ExecError::Spawn {
        binary: binary.clone(),
        source,
      })?;

    if !output.status.success() {
      return Err(ExecError::VersionFailed {
        binary,
        code: output.status.code(),
      });
    }

    let mut combined = output.stdout;
    combined.extend_from_slice(&output.stderr);
    let package_version = String::from_utf8_lossy(&combined).trim().to_string();

    let pieces: Vec<&str> = package_version.split(' ').collect();
    if pieces.len() != 2 || pieces[0] != BLOGC_BIN {
      return Err(ExecError::MalformedVersion {
        binary,
        output: package_version,
      });
    }

    let version = pieces[1].to_string();
    let parsed_version = version::parse_version(&version)?;

    let blogc = Blogc {
      binary,
      package_version,
      version,
      parsed_version,
    };
    blogc.require_version(BLOGC_REQUIRED_VERSION)?;

    info!(binary = %blogc.binary.display(), version = %blogc.version, "using blogc");
    Ok(blogc)
  }

  /// Resolved path of the binary.
  pub fn binary(&self) -> &Path {
    &self.binary
  }

  /// Bare version number, e.g. `0.20.1`.
  pub fn version(&self) -> &str {
    &self.version
  }

  /// Full output of `blogc -v`, e.g. `blogc 0.20.1`.
  pub fn package_version(&self) -> &str {
    &self.package_version
  }

  /// Fail unless this binary is at least version `required`.
  pub fn require_version(&self, required: &str) -> Result<(), ExecError> {
    version::check_version(&self.parsed_version, &self.version, required)
  }

  /// Run blogc with `args`, feeding `stdin` to it when non-empty.
  ///
  /// Returns the exit status and captured output. A nonzero exit status is
  /// returned as data. A failure of the stdin writer is not reported.
  pub async fn run(&self, stdin: &[u8], args: &[OsString]) -> Result<RunOutput, ExecError> {
    let mut command = Command::new(&self.binary);
    command
      .args(args)
      .stdin(if stdin.is_empty() { Stdio::null() } else { Stdio::piped() })
      .stdout(Stdio::piped())
      .stderr(Stdio::piped());

    debug!(binary = %self.binary.display(), args = ?args, stdin_len = stdin.len(), "spawning blogc");

    let mut child = command.spawn().map_err(|source| ExecError::Spawn {
      binary: self.binary.clone(),
      source,
    })?;

    if let Some(mut pipe) = child.stdin.take() {
      let payload = stdin.to_vec();
      // Dropping the pipe at the end of the task closes the child's stdin.
      tokio::spawn(async move {
        if let Err(e) = pipe.write_all(&payload).await {
          debug!(error = %e, "stdin writer stopped early");
        }
      });
    }

    let output = child.wait_with_output().await?;
    let status = output.status.code().unwrap_or(-1);

    debug!(status, "blogc exited");

    Ok(RunOutput {
      status,
      stdout: output.stdout,
      stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
  }
}
