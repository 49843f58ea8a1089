use anyhow::{Context, Result};
use serde::Serialize;

use blogc_lib::Blogc;
use blogc_lib::consts::BLOGC_REQUIRED_VERSION;

use crate::output::{OutputFormat, print_json, print_stat};

#[derive(Debug, Serialize)]
struct VersionOutput<'a> {
  package_version: &'a str,
  version: &'a str,
  binary: String,
  required_version: &'a str,
}

pub fn cmd_version(format: OutputFormat) -> Result<()> {
  let rt = tokio::runtime::Runtime::new().context("Failed to create async runtime")?;
  let blogc = rt.block_on(Blogc::detect()).context("blogc is not usable")?;

  if format.is_json() {
    return print_json(&VersionOutput {
      package_version: blogc.package_version(),
      version: blogc.version(),
      binary: blogc.binary().display().to_string(),
      required_version: BLOGC_REQUIRED_VERSION,
    });
  }

  println!("{}", blogc.package_version());
  print_stat("Binary", &blogc.binary().display().to_string());
  print_stat("Required", &format!(">= {}", BLOGC_REQUIRED_VERSION));

  Ok(())
}
