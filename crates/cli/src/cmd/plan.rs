//! Implementation of the `blogc-run plan` command.
//!
//! Reports which manifest targets `build` would render. Does not need blogc.

use std::path::Path;

use anyhow::{Context, Result};
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;

use blogc_lib::BuildManifest;

use crate::output::{OutputFormat, print_info, print_json, symbols};

#[derive(Debug, Serialize)]
struct PlanEntry {
  output: String,
  outdated: bool,
}

pub fn cmd_plan(manifest_path: &Path, defines: &[String], verbose: bool, format: OutputFormat) -> Result<()> {
  let manifest = BuildManifest::from_file(manifest_path)
    .with_context(|| format!("Failed to load manifest: {}", manifest_path.display()))?;
  let contexts = manifest.contexts(defines).context("Invalid variable definition")?;

  let entries: Vec<PlanEntry> = contexts
    .iter()
    .map(|context| PlanEntry {
      output: context
        .output_file
        .as_ref()
        .map(|file| file.path().display().to_string())
        .unwrap_or_default(),
      outdated: context.needs_build(),
    })
    .collect();

  if format.is_json() {
    return print_json(&entries);
  }

  let outdated = entries.iter().filter(|entry| entry.outdated).count();

  for entry in &entries {
    if entry.outdated {
      println!(
        "  {} {}",
        symbols::TILDE.if_supports_color(Stream::Stdout, |s| s.yellow()),
        entry.output
      );
    } else if verbose {
      println!(
        "    {} {}",
        entry.output,
        "(up to date)".if_supports_color(Stream::Stdout, |s| s.dimmed())
      );
    }
  }

  print_info(&format!("{} of {} target(s) outdated", outdated, entries.len()));

  Ok(())
}
