use serde::{Deserialize, Serialize};

use crate::id::BlockId;
use crate::lenient;
use crate::{ENTRY_KIND, NO_CONTENT, PROCESSING_KIND, UNTITLED};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
  pub id: BlockId,
  /// Free-form type tag, e.g. "giris", "gelisme", "sonuc".
  #[serde(rename = "type")]
  pub kind: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub data: Option<BlockData>,
}

/// Display content of a block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlockData {
  #[serde(
    default,
    deserialize_with = "lenient::text",
    skip_serializing_if = "Option::is_none"
  )]
  pub title: Option<String>,
  #[serde(
    default,
    deserialize_with = "lenient::text",
    skip_serializing_if = "Option::is_none"
  )]
  pub body: Option<String>,
  /// Header color chosen in the editor, e.g. "rgb(52, 152, 219)".
  #[serde(
    default,
    deserialize_with = "lenient::text",
    skip_serializing_if = "Option::is_none"
  )]
  pub color: Option<String>,
}

impl Block {
  pub fn new(id: impl Into<BlockId>, kind: impl Into<String>) -> Self {
    Self {
      id: id.into(),
      kind: kind.into(),
      data: None,
    }
  }

  pub fn with_content(mut self, title: impl Into<String>, body: impl Into<String>) -> Self {
    self.data = Some(BlockData {
      title: Some(title.into()),
      body: Some(body.into()),
      color: None,
    });
    self
  }

  /// True for the entry marker. The comparison is case-sensitive.
  pub fn is_entry(&self) -> bool {
    self.kind == ENTRY_KIND
  }

  /// True for blocks that simulate extended work. The comparison is case-sensitive.
  pub fn is_processing(&self) -> bool {
    self.kind == PROCESSING_KIND
  }

  /// Type tag as shown in the header line.
  pub fn display_kind(&self) -> String {
    self.kind.to_uppercase()
  }

  pub fn title(&self) -> &str {
    self
      .data
      .as_ref()
      .and_then(|d| d.title.as_deref())
      .unwrap_or(UNTITLED)
  }

  pub fn body(&self) -> &str {
    self
      .data
      .as_ref()
      .and_then(|d| d.body.as_deref())
      .unwrap_or(NO_CONTENT)
  }
}
