use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoaderError {
  #[error("flow directory not found: {}", path.display())]
  DirectoryNotFound { path: PathBuf },

  #[error("no .json flow files in {}", path.display())]
  NoFlowFiles { path: PathBuf },

  #[error("selection {choice} is out of range (1-{available})")]
  InvalidSelection { choice: usize, available: usize },

  #[error("input closed before a flow file was selected")]
  SelectionAborted,

  #[error("failed to read flow file {}: {source}", path.display())]
  Read {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("failed to parse flow file {}: {source}", path.display())]
  Parse {
    path: PathBuf,
    #[source]
    source: serde_json::Error,
  },

  #[error("io error: {0}")]
  Io(#[from] std::io::Error),
}
