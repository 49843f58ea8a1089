//! Error types for build contexts.

use thiserror::Error;

use crate::exec::ExecError;

/// Errors returned by [`BuildContext`](super::BuildContext) operations.
#[derive(Debug, Error)]
pub enum BuildError {
  #[error("at least one input file is required")]
  MissingInputs,

  #[error("one input file is required")]
  SingleInputRequired,

  #[error("listing entry is only supported by listing mode")]
  EntryWithoutListing,

  #[error("output file is required")]
  MissingOutput,

  #[error("template file is required")]
  MissingTemplate,

  #[error("variable name is required")]
  MissingVariableName,

  /// A printed variable value is not valid UTF-8.
  #[error("value of variable {name:?} is not valid UTF-8")]
  InvalidValue {
    name: String,
    #[source]
    source: std::string::FromUtf8Error,
  },

  /// blogc exited with a failure status; holds its trimmed standard error.
  #[error("{0}")]
  Compiler(String),

  #[error(transparent)]
  Exec(#[from] ExecError),
}
