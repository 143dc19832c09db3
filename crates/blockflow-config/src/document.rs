use serde::{Deserialize, Serialize};

use crate::block::Block;
use crate::connection::Connection;
use crate::lenient;

/// A flow document as read from disk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlowDocument {
  #[serde(default)]
  pub meta: FlowMeta,
  #[serde(default)]
  pub blocks: Vec<Block>,
  #[serde(default)]
  pub connections: Vec<Connection>,
}

/// Project metadata. Only used for the load banner.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowMeta {
  #[serde(
    default,
    deserialize_with = "lenient::text",
    skip_serializing_if = "Option::is_none"
  )]
  pub project_name: Option<String>,
  #[serde(
    default,
    deserialize_with = "lenient::text",
    skip_serializing_if = "Option::is_none"
  )]
  pub version: Option<String>,
  /// ISO-8601 export timestamp written by the editor.
  #[serde(
    default,
    deserialize_with = "lenient::text",
    skip_serializing_if = "Option::is_none"
  )]
  pub created_at: Option<String>,
}

impl FlowMeta {
  pub fn display_name(&self) -> &str {
    self.project_name.as_deref().unwrap_or("Unnamed")
  }

  pub fn display_version(&self) -> &str {
    self.version.as_deref().unwrap_or("?.?")
  }
}
