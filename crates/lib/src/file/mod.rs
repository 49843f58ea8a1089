//! File references handed to blogc.
//!
//! A [`BlogcFile`] is either a path owned by the caller or a temporary file
//! materialized from bytes. Temporary files are removed by [`BlogcFile::close`];
//! a temporary file that is dropped without being closed is removed as well,
//! so removal happens exactly once either way.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::TempPath;
use thiserror::Error;
use tracing::debug;

use crate::consts::TEMP_FILE_PREFIX;

#[derive(Debug, Error)]
pub enum FileError {
  #[error("failed to create temporary file: {0}")]
  Create(#[source] io::Error),

  #[error("failed to write temporary file {path:?}: {source}")]
  Write {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("failed to read {path:?}: {source}")]
  Read {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("failed to remove temporary file {path:?}: {source}")]
  Remove {
    path: PathBuf,
    #[source]
    source: io::Error,
  },
}

/// A temporary file holding caller-provided bytes.
///
/// The content is flushed and the handle closed on creation; blogc reads or
/// writes the file by path. [`TempFile::read`] always goes back to disk, so
/// anything blogc wrote there is visible.
#[derive(Debug)]
pub struct TempFile {
  path: TempPath,
}

impl TempFile {
  pub fn new(content: &[u8]) -> Result<Self, FileError> {
    let mut file = tempfile::Builder::new()
      .prefix(TEMP_FILE_PREFIX)
      .tempfile()
      .map_err(FileError::Create)?;

    if !content.is_empty() {
      // On failure `file` drops here and takes the partial file with it.
      file.write_all(content).map_err(|source| FileError::Write {
        path: file.path().to_path_buf(),
        source,
      })?;
    }

    let path = file.into_temp_path();
    debug!(path = %path.display(), len = content.len(), "created temporary file");
    Ok(TempFile { path })
  }

  pub fn path(&self) -> &Path {
    &self.path
  }

  /// Read the file's current content from disk.
  pub fn read(&self) -> Result<Vec<u8>, FileError> {
    std::fs::read(&self.path).map_err(|source| FileError::Read {
      path: self.path.to_path_buf(),
      source,
    })
  }

  /// Remove the file.
  pub fn close(self) -> Result<(), FileError> {
    let path = self.path.to_path_buf();
    self.path.close().map_err(|source| FileError::Remove { path, source })
  }
}

/// A file blogc reads from or writes to.
#[derive(Debug)]
pub enum BlogcFile {
  /// A path supplied by the caller. Never removed.
  Path(PathBuf),
  /// A temporary file owned by this value.
  Temp(TempFile),
}

impl BlogcFile {
  /// Reference an existing path.
  pub fn path_of(path: impl Into<PathBuf>) -> Self {
    BlogcFile::Path(path.into())
  }

  /// Materialize `content` into a new temporary file.
  pub fn from_bytes(content: &[u8]) -> Result<Self, FileError> {
    TempFile::new(content).map(BlogcFile::Temp)
  }

  pub fn path(&self) -> &Path {
    match self {
      BlogcFile::Path(path) => path,
      BlogcFile::Temp(temp) => temp.path(),
    }
  }

  pub fn is_temp_file(&self) -> bool {
    matches!(self, BlogcFile::Temp(_))
  }

  /// Release the file. Removes temporary files; a no-op for plain paths.
  pub fn close(self) -> Result<(), FileError> {
    match self {
      BlogcFile::Path(_) => Ok(()),
      BlogcFile::Temp(temp) => temp.close(),
    }
  }
}

impl From<PathBuf> for BlogcFile {
  fn from(path: PathBuf) -> Self {
    BlogcFile::Path(path)
  }
}

impl From<&Path> for BlogcFile {
  fn from(path: &Path) -> Self {
    BlogcFile::Path(path.to_path_buf())
  }
}

impl From<&str> for BlogcFile {
  fn from(path: &str) -> Self {
    BlogcFile::Path(PathBuf::from(path))
  }
}

impl From<TempFile> for BlogcFile {
  fn from(temp: TempFile) -> Self {
    BlogcFile::Temp(temp)
  }
}
