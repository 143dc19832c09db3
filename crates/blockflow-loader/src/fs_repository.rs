use std::path::{Path, PathBuf};

use async_trait::async_trait;
use blockflow_config::FlowDocument;
use tokio::fs;
use tracing::{debug, info};

use crate::error::LoaderError;
use crate::repository::{FlowFile, FlowRepository};

/// Extension a file needs to be listed as a flow.
pub const FLOW_EXTENSION: &str = ".json";

/// Filesystem-based flow repository.
///
/// Flows are plain JSON files directly inside one directory:
/// ```text
/// {root}/
/// ├── onboarding.json
/// ├── k1llly-flow-v2.json
/// └── notes.txt (ignored)
/// ```
pub struct FsFlowRepository {
  root: PathBuf,
}

impl FsFlowRepository {
  /// Create a repository reading from the given directory.
  pub fn new(root: impl Into<PathBuf>) -> Self {
    Self { root: root.into() }
  }

  fn is_flow_file(name: &str) -> bool {
    name.ends_with(FLOW_EXTENSION)
  }
}

#[async_trait]
impl FlowRepository for FsFlowRepository {
  fn root(&self) -> &Path {
    &self.root
  }

  async fn list(&self) -> Result<Vec<FlowFile>, LoaderError> {
    if !fs::try_exists(&self.root).await? {
      return Err(LoaderError::DirectoryNotFound {
        path: self.root.clone(),
      });
    }

    let mut files = Vec::new();
    let mut entries = fs::read_dir(&self.root).await?;
    while let Some(entry) = entries.next_entry().await? {
      let name = match entry.file_name().into_string() {
        Ok(name) => name,
        Err(_) => continue,
      };
      if !Self::is_flow_file(&name) {
        continue;
      }

      let metadata = entry.metadata().await?;
      if !metadata.is_file() {
        continue;
      }

      files.push(FlowFile {
        name,
        path: entry.path(),
        modified: metadata.modified()?,
      });
    }

    // Newest first; name breaks ties so the listing is stable.
    files.sort_by(|a, b| {
      b.modified
        .cmp(&a.modified)
        .then_with(|| a.name.cmp(&b.name))
    });

    debug!(root = %self.root.display(), count = files.len(), "listed flow files");
    Ok(files)
  }

  async fn load(&self, path: &Path) -> Result<FlowDocument, LoaderError> {
    let content = fs::read_to_string(path)
      .await
      .map_err(|source| LoaderError::Read {
        path: path.to_path_buf(),
        source,
      })?;

    let document: FlowDocument =
      serde_json::from_str(&content).map_err(|source| LoaderError::Parse {
        path: path.to_path_buf(),
        source,
      })?;

    info!(
      path = %path.display(),
      blocks = document.blocks.len(),
      connections = document.connections.len(),
      "flow file loaded"
    );
    Ok(document)
  }
}
