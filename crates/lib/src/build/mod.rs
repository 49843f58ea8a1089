//! Build contexts: one blogc invocation's worth of inputs and outputs.
//!
//! A context is in either single-entry mode (exactly one input compiled to
//! one output) or listing mode (one or more inputs, passed over standard
//! input, rendered into an index, optionally with a designated entry file).

pub mod types;

use std::ffi::OsString;
use std::path::Path;
use std::time::SystemTime;

use tracing::{debug, info, warn};

use crate::consts::EXIT_VARIABLE_NOT_FOUND;
use crate::exec::Blogc;
use crate::file::BlogcFile;

pub use types::BuildError;

#[derive(Debug, Default)]
pub struct BuildContext {
  /// Build a listing from all inputs instead of a single entry.
  pub listing: bool,
  /// `KEY=VALUE` definitions, passed in order.
  pub variables: Vec<String>,
  pub input_files: Vec<BlogcFile>,
  /// Entry rendered alongside the listing. Listing mode only.
  pub listing_entry_file: Option<BlogcFile>,
  pub output_file: Option<BlogcFile>,
  pub template_file: Option<BlogcFile>,
}

impl BuildContext {
  /// Whether the output is missing or older than any of its dependencies.
  ///
  /// Dependencies that cannot be stat'ed also force a build, so blogc gets
  /// the chance to report the missing file itself.
  pub fn needs_build(&self) -> bool {
    let Some(output_mtime) = self.output_file.as_ref().and_then(|f| modified(f.path())) else {
      return true;
    };

    let mut dependencies: Vec<&BlogcFile> = self.input_files.iter().collect();
    dependencies.extend(self.template_file.as_ref());
    if self.listing {
      dependencies.extend(self.listing_entry_file.as_ref());
    }

    dependencies.into_iter().any(|dep| match modified(dep.path()) {
      Some(mtime) => output_mtime <= mtime,
      None => true,
    })
  }

  /// Arguments for blogc, either printing `print_var` or building the output.
  pub fn command(&self, print_var: Option<&str>) -> Vec<OsString> {
    let mut args: Vec<OsString> = Vec::new();

    if self.listing {
      args.push("-l".into());
      args.push("-i".into());
      if let Some(entry) = &self.listing_entry_file {
        args.push("-e".into());
        args.push(entry.path().into());
      }
    } else if let Some(input) = self.input_files.first() {
      args.push(input.path().into());
    }

    for variable in &self.variables {
      args.push("-D".into());
      args.push(variable.into());
    }

    match (print_var, &self.output_file, &self.template_file) {
      (Some(name), _, _) => {
        args.push("-p".into());
        args.push(name.into());
      }
      (None, Some(output), Some(template)) => {
        args.push("-o".into());
        args.push(output.path().into());
        args.push("-t".into());
        args.push(template.path().into());
      }
      _ => {}
    }

    args
  }

  /// Standard input for blogc: the input paths, one per line, in listing mode.
  pub fn stdin(&self) -> Vec<u8> {
    let mut stdin = Vec::new();
    if self.listing {
      for input in &self.input_files {
        stdin.extend_from_slice(input.path().as_os_str().as_encoded_bytes());
        stdin.push(b'\n');
      }
    }
    stdin
  }

  /// Check the input-file rules for the current mode.
  ///
  /// The output and template files are not checked here, so variables can be
  /// evaluated without them; [`BuildContext::build`] requires both.
  pub fn validate(&self) -> Result<(), BuildError> {
    if self.listing {
      if self.input_files.is_empty() {
        return Err(BuildError::MissingInputs);
      }
    } else {
      if self.input_files.len() != 1 {
        return Err(BuildError::SingleInputRequired);
      }
      if self.listing_entry_file.is_some() {
        return Err(BuildError::EntryWithoutListing);
      }
    }
    Ok(())
  }

  /// Render the output file.
  pub async fn build(&self, blogc: &Blogc) -> Result<(), BuildError> {
    self.validate()?;

    let output = self.output_file.as_ref().ok_or(BuildError::MissingOutput)?;
    if self.template_file.is_none() {
      return Err(BuildError::MissingTemplate);
    }

    info!(output = %output.path().display(), listing = self.listing, "building");

    let result = blogc.run(&self.stdin(), &self.command(None)).await?;
    if !result.success() {
      warn!(output = %output.path().display(), status = result.status, "blogc failed");
      return Err(BuildError::Compiler(result.stderr.trim().to_string()));
    }

    Ok(())
  }

  /// Evaluate a variable as blogc sees it for these inputs.
  ///
  /// Returns `Ok(None)` when blogc reports the variable as undefined. A value
  /// that is not valid UTF-8 is an error rather than being altered; the raw
  /// bytes are available from [`Blogc::run`] with [`BuildContext::command`].
  pub async fn evaluated_variable(&self, blogc: &Blogc, name: &str) -> Result<Option<String>, BuildError> {
    if name.is_empty() {
      return Err(BuildError::MissingVariableName);
    }
    self.validate()?;

    let result = blogc.run(&self.stdin(), &self.command(Some(name))).await?;
    match result.status {
      0 => {}
      EXIT_VARIABLE_NOT_FOUND => {
        debug!(variable = name, "variable not found");
        return Ok(None);
      }
      _ => return Err(BuildError::Compiler(result.stderr.trim().to_string())),
    }

    // blogc terminates the value with a newline of its own. Anything else,
    // whitespace included, belongs to the value.
    let mut value = result.stdout;
    if value.last() == Some(&b'\n') {
      value.pop();
    }
    String::from_utf8(value)
      .map(Some)
      .map_err(|source| BuildError::InvalidValue {
        name: name.to_string(),
        source,
      })
  }
}

fn modified(path: &Path) -> Option<SystemTime> {
  std::fs::metadata(path).and_then(|meta| meta.modified()).ok()
}
