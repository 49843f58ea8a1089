//! blogc-lib: Orchestration for the blogc static site compiler
//!
//! This crate drives an external `blogc` binary rather than reimplementing it:
//! - `Blogc`: the discovered compiler binary and its version
//! - `BlogcFile`: a fixed path or a temporary file materialized from bytes
//! - `BuildContext`: inputs, output, template and variables for one invocation
//! - `Task` / `run_tasks`: a sequential runner that skips up-to-date targets
//! - `BuildManifest`: a JSON description of many builds

pub mod build;
pub mod consts;
pub mod exec;
pub mod file;
pub mod manifest;
pub mod runner;

#[cfg(test)]
pub mod util;

pub use build::{BuildContext, BuildError};
pub use exec::{Blogc, ExecError, RunOutput};
pub use file::{BlogcFile, FileError, TempFile};
pub use manifest::{BuildManifest, ManifestError};
pub use runner::{BlogcTask, Task, TaskError, run_tasks, run_tasks_with};
