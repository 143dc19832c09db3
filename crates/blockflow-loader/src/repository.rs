use std::path::{Path, PathBuf};
use std::time::SystemTime;

use async_trait::async_trait;
use blockflow_config::FlowDocument;

use crate::error::LoaderError;

/// A candidate flow file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowFile {
  /// File name shown in the selection list, e.g. "demo.json".
  pub name: String,
  pub path: PathBuf,
  pub modified: SystemTime,
}

/// Source of flow files.
#[async_trait]
pub trait FlowRepository: Send + Sync {
  /// Directory the flow files live in.
  fn root(&self) -> &Path;

  /// List flow files, most recently modified first.
  async fn list(&self) -> Result<Vec<FlowFile>, LoaderError>;

  /// Read and parse a flow file.
  async fn load(&self, path: &Path) -> Result<FlowDocument, LoaderError>;
}
