//! JSON build manifests.
//!
//! A manifest lists the builds for a site:
//!
//! ```json
//! {
//!   "variables": ["SITE_TITLE=My Blog"],
//!   "builds": [
//!     { "inputs": ["content/post.txt"], "output": "out/post.html", "template": "main.tmpl" },
//!     { "listing": true, "inputs": ["content/a.txt", "content/b.txt"],
//!       "entry": "content/index.txt", "output": "out/index.html", "template": "main.tmpl" }
//!   ]
//! }
//! ```
//!
//! Relative paths are resolved against the manifest's directory.

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::build::BuildContext;
use crate::file::BlogcFile;

#[derive(Debug, Error)]
pub enum ManifestError {
  #[error("failed to read manifest {path:?}: {source}")]
  Read {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("failed to parse manifest: {0}")]
  Parse(#[from] serde_json::Error),

  #[error("invalid variable definition {0:?}, expected KEY=VALUE")]
  InvalidVariable(String),
}

/// One build in a manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuildDecl {
  #[serde(default)]
  pub listing: bool,
  pub inputs: Vec<PathBuf>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub entry: Option<PathBuf>,
  pub output: PathBuf,
  pub template: PathBuf,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub variables: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuildManifest {
  /// Definitions applied to every build, before the build's own.
  #[serde(default)]
  pub variables: Vec<String>,
  #[serde(default)]
  pub builds: Vec<BuildDecl>,
  #[serde(skip)]
  base_dir: PathBuf,
}

impl BuildManifest {
  pub fn from_file(path: &Path) -> Result<Self, ManifestError> {
    let content = std::fs::read_to_string(path).map_err(|source| ManifestError::Read {
      path: path.to_path_buf(),
      source,
    })?;
    let base_dir = path.parent().unwrap_or(Path::new(""));
    Self::from_json(&content, base_dir)
  }

  pub fn from_json(json: &str, base_dir: &Path) -> Result<Self, ManifestError> {
    let mut manifest: BuildManifest = serde_json::from_str(json)?;
    manifest.base_dir = base_dir.to_path_buf();

    let all_variables = manifest
      .variables
      .iter()
      .chain(manifest.builds.iter().flat_map(|b| &b.variables));
    for variable in all_variables {
      check_variable(variable)?;
    }

    debug!(builds = manifest.builds.len(), base_dir = %base_dir.display(), "loaded manifest");
    Ok(manifest)
  }

  /// Directory relative paths are resolved against.
  pub fn base_dir(&self) -> &Path {
    &self.base_dir
  }

  /// Build contexts for every build, in manifest order.
  ///
  /// Variables are ordered manifest-wide, then the build's own, then
  /// `extra_variables`. blogc keeps the last definition of a name, so
  /// command-line definitions override the manifest.
  pub fn contexts(&self, extra_variables: &[String]) -> Result<Vec<BuildContext>, ManifestError> {
    for variable in extra_variables {
      check_variable(variable)?;
    }

    let contexts = self
      .builds
      .iter()
      .map(|build| BuildContext {
        listing: build.listing,
        variables: self
          .variables
          .iter()
          .chain(&build.variables)
          .chain(extra_variables)
          .cloned()
          .collect(),
        input_files: build.inputs.iter().map(|p| self.file(p)).collect(),
        listing_entry_file: build.entry.as_deref().map(|p| self.file(p)),
        output_file: Some(self.file(&build.output)),
        template_file: Some(self.file(&build.template)),
      })
      .collect();
    Ok(contexts)
  }

  fn file(&self, path: &Path) -> BlogcFile {
    BlogcFile::Path(self.base_dir.join(path))
  }
}

/// Check that `definition` looks like `KEY=VALUE` with a non-empty key.
pub fn check_variable(definition: &str) -> Result<(), ManifestError> {
  match definition.split_once('=') {
    Some((key, _)) if !key.is_empty() => Ok(()),
    _ => Err(ManifestError::InvalidVariable(definition.to_string())),
  }
}
