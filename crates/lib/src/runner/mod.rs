//! Sequential task runner.
//!
//! Tasks run in the order given. Up-to-date tasks are skipped; each task that
//! runs gets a progress line on stderr, and the first failure stops the run.

use std::io::Write;
use std::path::Path;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, error};

use crate::build::{BuildContext, BuildError};
use crate::consts::APP_NAME;
use crate::exec::Blogc;
use crate::file::BlogcFile;

#[derive(Debug, Error)]
pub enum TaskError {
  #[error("invalid context")]
  InvalidContext,

  #[error(transparent)]
  Build(#[from] BuildError),
}

/// A unit of work the runner can skip or execute.
///
/// Object safe, so one run can mix task kinds as `Box<dyn Task>`.
#[async_trait]
pub trait Task: Send + Sync {
  /// Category label shown in progress output.
  fn tag(&self) -> &str;

  /// The file this task produces, if any.
  fn target(&self) -> Option<&BlogcFile>;

  /// Whether the task has to run.
  fn outdated(&self) -> bool;

  async fn run(&self) -> Result<(), TaskError>;
}

/// Renders one build context with blogc.
#[derive(Debug)]
pub struct BlogcTask {
  pub context: Option<BuildContext>,
  pub blogc: Blogc,
}

impl BlogcTask {
  pub fn new(blogc: Blogc, context: BuildContext) -> Self {
    BlogcTask {
      context: Some(context),
      blogc,
    }
  }
}

#[async_trait]
impl Task for BlogcTask {
  fn tag(&self) -> &str {
    "blogc"
  }

  fn target(&self) -> Option<&BlogcFile> {
    self.context.as_ref()?.output_file.as_ref()
  }

  fn outdated(&self) -> bool {
    self.context.as_ref().is_some_and(BuildContext::needs_build)
  }

  async fn run(&self) -> Result<(), TaskError> {
    let context = self.context.as_ref().ok_or(TaskError::InvalidContext)?;
    context.build(&self.blogc).await?;
    Ok(())
  }
}

/// Run `tasks`, reporting to stderr. Returns `false` on the first failure.
pub async fn run_tasks(tasks: &[Option<Box<dyn Task>>]) -> bool {
  let prog = std::env::args_os()
    .next()
    .and_then(|arg0| Path::new(&arg0).file_name().map(|name| name.to_string_lossy().into_owned()))
    .unwrap_or_else(|| APP_NAME.to_string());

  run_tasks_with(&mut std::io::stderr(), &prog, tasks).await
}

/// Run `tasks`, writing progress and errors to `out` with `prog` as the
/// program name in error lines.
pub async fn run_tasks_with<W: Write>(out: &mut W, prog: &str, tasks: &[Option<Box<dyn Task>>]) -> bool {
  for task in tasks.iter().flatten() {
    if !task.outdated() {
      debug!(tag = task.tag(), "up to date");
      continue;
    }

    let target = task
      .target()
      .map(|file| file.path().display().to_string())
      .unwrap_or_default();

    // Diagnostics are best-effort; a closed stderr must not stop the build.
    let _ = writeln!(out, "  {:<8} {}", task.tag().to_uppercase(), target);

    if let Err(e) = task.run().await {
      error!(output = %target, error = %e, "task failed");
      let _ = writeln!(out, "{}: error: {:?}: {}", prog, target, e);
      return false;
    }
  }

  true
}
