//! Implementation of the `blogc-run var` command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Serialize;

use blogc_lib::manifest::check_variable;
use blogc_lib::{Blogc, BlogcFile, BuildContext};

use crate::output::{OutputFormat, print_json, print_warning};

#[derive(Debug, Serialize)]
struct VarOutput<'a> {
  name: &'a str,
  value: Option<&'a str>,
  found: bool,
}

pub fn cmd_var(
  name: &str,
  inputs: Vec<PathBuf>,
  listing: bool,
  entry: Option<PathBuf>,
  defines: Vec<String>,
  format: OutputFormat,
) -> Result<()> {
  for define in &defines {
    check_variable(define)?;
  }

  let context = BuildContext {
    listing,
    variables: defines,
    input_files: inputs.into_iter().map(BlogcFile::Path).collect(),
    listing_entry_file: entry.map(BlogcFile::Path),
    ..Default::default()
  };

  let rt = tokio::runtime::Runtime::new().context("Failed to create async runtime")?;
  let blogc = rt.block_on(Blogc::detect()).context("blogc is not usable")?;
  let value = rt
    .block_on(context.evaluated_variable(&blogc, name))
    .with_context(|| format!("Failed to evaluate variable: {}", name))?;

  if format.is_json() {
    print_json(&VarOutput {
      name,
      value: value.as_deref(),
      found: value.is_some(),
    })?;
  } else if let Some(value) = &value {
    println!("{}", value);
  } else {
    print_warning(&format!("variable not found: {}", name));
  }

  if value.is_none() {
    std::process::exit(1);
  }

  Ok(())
}
