//! Blockflow Loader
//!
//! Finds flow files in a directory, lets the user pick one and parses it
//! into a [`FlowDocument`](blockflow_config::FlowDocument).
//!
//! Nothing in this crate exits the process. Every failure is a
//! [`LoaderError`] and the caller decides what to do with it.

mod error;
mod fs_repository;
mod repository;
mod selector;

pub use error::LoaderError;
pub use fs_repository::{FLOW_EXTENSION, FsFlowRepository};
pub use repository::{FlowFile, FlowRepository};
pub use selector::{FixedSelector, FlowSelector, PromptSelector};

use blockflow_config::FlowMeta;

/// Default directory searched for flow files.
pub const DEFAULT_FLOW_DIR: &str = "json-files";

/// List the repository's flow files and let `selector` pick one.
///
/// Fails with [`LoaderError::NoFlowFiles`] when there is nothing to choose from.
/// An out-of-range index from a selector outside this crate is reported as
/// [`LoaderError::InvalidSelection`] rather than trusted.
pub async fn choose_flow<R, S>(repository: &R, selector: &mut S) -> Result<FlowFile, LoaderError>
where
  R: FlowRepository + ?Sized,
  S: FlowSelector + ?Sized,
{
  let mut files = repository.list().await?;
  if files.is_empty() {
    return Err(LoaderError::NoFlowFiles {
      path: repository.root().to_path_buf(),
    });
  }

  let index = selector.select(&files)?;
  // `FlowSelector` is public; don't index with an unchecked value.
  if index >= files.len() {
    return Err(LoaderError::InvalidSelection {
      choice: index + 1,
      available: files.len(),
    });
  }
  Ok(files.swap_remove(index))
}

/// Lines printed once a flow file has been parsed.
pub fn load_banner(meta: &FlowMeta) -> String {
  format!(
    "\n✅ Project loaded: {} (v{})\n{}",
    meta.display_name(),
    meta.display_version(),
    "-".repeat(50)
  )
}
