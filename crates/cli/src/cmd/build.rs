//! Implementation of the `blogc-run build` command.
//!
//! Loads a build manifest and renders every outdated target with blogc,
//! stopping at the first failure.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;

use blogc_lib::{Blogc, BlogcTask, BuildManifest, Task, run_tasks};

use crate::output::{format_duration, print_success};

pub fn cmd_build(manifest_path: &Path, defines: &[String]) -> Result<()> {
  let manifest = BuildManifest::from_file(manifest_path)
    .with_context(|| format!("Failed to load manifest: {}", manifest_path.display()))?;
  let contexts = manifest.contexts(defines).context("Invalid variable definition")?;

  let rt = tokio::runtime::Runtime::new().context("Failed to create async runtime")?;
  let blogc = rt.block_on(Blogc::detect()).context("blogc is not usable")?;

  let tasks: Vec<Option<Box<dyn Task>>> = contexts
    .into_iter()
    .map(|context| Some(Box::new(BlogcTask::new(blogc.clone(), context)) as Box<dyn Task>))
    .collect();
  let outdated = tasks.iter().flatten().filter(|task| task.outdated()).count();

  info!(targets = tasks.len(), outdated, "starting build");

  let started = Instant::now();
  if !rt.block_on(run_tasks(&tasks)) {
    std::process::exit(1);
  }

  if outdated == 0 {
    print_success(&format!("All {} target(s) up to date", tasks.len()));
  } else {
    print_success(&format!(
      "Built {} of {} target(s) in {}",
      outdated,
      tasks.len(),
      format_duration(started.elapsed())
    ));
  }

  Ok(())
}
