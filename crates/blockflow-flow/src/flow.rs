use blockflow_config::{Block, BlockId, Connection, FlowDocument, FlowMeta};
use tracing::debug;

use crate::index::BlockIndex;

/// A loaded flow ready for traversal.
#[derive(Debug, Clone, Default)]
pub struct Flow {
  meta: FlowMeta,
  blocks: BlockIndex,
  connections: Vec<Connection>,
}

impl Flow {
  /// Index a flow document.
  ///
  /// Blocks with duplicate ids are not rejected: the later definition wins
  /// and takes over the slot of the earlier one.
  pub fn new(document: FlowDocument) -> Self {
    let FlowDocument {
      meta,
      blocks,
      connections,
    } = document;

    let mut index = BlockIndex::new();
    for block in blocks {
      let id = block.id.clone();
      if index.insert(block).is_some() {
        debug!(block_id = %id, "duplicate block id, later definition wins");
      }
    }

    Self {
      meta,
      blocks: index,
      connections,
    }
  }

  /// First block, in iteration order, whose type is the entry marker.
  pub fn find_start_block(&self) -> Option<&Block> {
    self.blocks.iter().find(|block| block.is_entry())
  }

  /// Target of the first connection leaving `current_id`.
  ///
  /// Connections are scanned in document order, so the first one listed wins
  /// when a block has several outgoing connections.
  pub fn get_next_block_id(&self, current_id: &str) -> Option<&BlockId> {
    self
      .connections
      .iter()
      .find(|conn| conn.from.as_str() == current_id)
      .map(|conn| &conn.to)
  }

  pub fn get_block(&self, id: &str) -> Option<&Block> {
    self.blocks.get(id)
  }

  pub fn blocks(&self) -> &BlockIndex {
    &self.blocks
  }

  pub fn connections(&self) -> &[Connection] {
    &self.connections
  }

  pub fn meta(&self) -> &FlowMeta {
    &self.meta
  }

  pub fn len(&self) -> usize {
    self.blocks.len()
  }

  pub fn is_empty(&self) -> bool {
    self.blocks.is_empty()
  }
}

impl From<FlowDocument> for Flow {
  fn from(document: FlowDocument) -> Self {
    Self::new(document)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn document(blocks: Vec<Block>, connections: Vec<Connection>) -> FlowDocument {
    FlowDocument {
      meta: FlowMeta::default(),
      blocks,
      connections,
    }
  }

  #[test]
  fn test_find_start_block() {
    let flow = Flow::new(document(
      vec![Block::new("x", "sonuc"), Block::new("a", "giris")],
      vec![],
    ));
    assert_eq!(flow.find_start_block().map(|b| b.id.as_str()), Some("a"));
  }

  #[test]
  fn test_no_start_block_in_empty_flow() {
    let flow = Flow::new(FlowDocument::default());
    assert!(flow.is_empty());
    assert!(flow.find_start_block().is_none());
  }

  #[test]
  fn test_start_block_match_is_case_sensitive() {
    let flow = Flow::new(document(vec![Block::new("a", "Giris")], vec![]));
    assert!(flow.find_start_block().is_none());
  }

  #[test]
  fn test_first_entry_block_wins() {
    let flow = Flow::new(document(
      vec![Block::new("one", "giris"), Block::new("two", "giris")],
      vec![],
    ));
    assert_eq!(flow.find_start_block().map(|b| b.id.as_str()), Some("one"));
  }

  #[test]
  fn test_duplicate_id_overwrites_entry_marker() {
    // The second "a" is no longer an entry block, and it keeps a's slot.
    let flow = Flow::new(document(
      vec![
        Block::new("a", "giris"),
        Block::new("b", "giris"),
        Block::new("a", "gelisme"),
      ],
      vec![],
    ));
    assert_eq!(flow.len(), 2);
    assert_eq!(flow.find_start_block().map(|b| b.id.as_str()), Some("b"));

    let kinds: Vec<&str> = flow.blocks().iter().map(|b| b.kind.as_str()).collect();
    assert_eq!(kinds, ["gelisme", "giris"]);
  }

  #[test]
  fn test_meta_and_connections_are_kept() {
    let doc: FlowDocument = serde_json::from_str(
      r#"{
        "meta": { "projectName": "Demo", "version": 3 },
        "blocks": [{ "id": "a", "type": "giris" }],
        "connections": [{ "from": "a", "to": "b" }, { "from": "a", "to": "c" }]
      }"#,
    )
    .unwrap();
    let flow = Flow::new(doc);

    assert_eq!(flow.meta().display_name(), "Demo");
    assert_eq!(flow.meta().display_version(), "3");
    assert_eq!(flow.connections().len(), 2);
    assert_eq!(flow.connections()[1].to.as_str(), "c");
  }

  #[test]
  fn test_get_next_block_id_first_connection_wins() {
    let flow = Flow::new(document(
      vec![Block::new("a", "giris"), Block::new("b", "sonuc")],
      vec![
        Connection::new("a", "b"),
        Connection::new("a", "c"),
        Connection::new("b", "a"),
      ],
    ));
    assert_eq!(flow.get_next_block_id("a").map(BlockId::as_str), Some("b"));
    assert_eq!(flow.get_next_block_id("b").map(BlockId::as_str), Some("a"));
    assert!(flow.get_next_block_id("c").is_none());
  }

  #[test]
  fn test_next_block_id_may_dangle() {
    let flow = Flow::new(document(
      vec![Block::new("a", "giris")],
      vec![Connection::new("a", "ghost")],
    ));
    let next = flow.get_next_block_id("a").unwrap();
    assert_eq!(next.as_str(), "ghost");
    assert!(flow.get_block(next.as_str()).is_none());
  }

  #[test]
  fn test_integer_ids_connect_to_string_ids() {
    let doc: FlowDocument = serde_json::from_str(
      r#"{
        "blocks": [{ "id": 1, "type": "giris" }, { "id": "2", "type": "sonuc" }],
        "connections": [{ "from": "1", "to": 2 }]
      }"#,
    )
    .unwrap();
    let flow = Flow::from(doc);

    let start = flow.find_start_block().unwrap();
    let next = flow.get_next_block_id(start.id.as_str()).unwrap();
    assert_eq!(flow.get_block(next.as_str()).map(|b| b.kind.as_str()), Some("sonuc"));
  }
}
