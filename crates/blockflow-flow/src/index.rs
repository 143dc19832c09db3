use std::collections::HashMap;

use blockflow_config::{Block, BlockId};

/// Insertion-ordered map from block id to block.
///
/// Re-inserting an existing id replaces the block but keeps the slot of the
/// first insertion, so iteration order is the order in which ids first appear.
#[derive(Debug, Clone, Default)]
pub struct BlockIndex {
  blocks: Vec<Block>,
  positions: HashMap<BlockId, usize>,
}

impl BlockIndex {
  pub fn new() -> Self {
    Self::default()
  }

  /// Insert a block, returning the block it replaced.
  pub fn insert(&mut self, block: Block) -> Option<Block> {
    match self.positions.get(&block.id) {
      Some(&slot) => Some(std::mem::replace(&mut self.blocks[slot], block)),
      None => {
        self.positions.insert(block.id.clone(), self.blocks.len());
        self.blocks.push(block);
        None
      }
    }
  }

  pub fn get(&self, id: &str) -> Option<&Block> {
    self.positions.get(id).map(|&slot| &self.blocks[slot])
  }

  /// Blocks in iteration order.
  pub fn iter(&self) -> impl Iterator<Item = &Block> {
    self.blocks.iter()
  }

  pub fn len(&self) -> usize {
    self.blocks.len()
  }

  pub fn is_empty(&self) -> bool {
    self.blocks.is_empty()
  }
}

impl FromIterator<Block> for BlockIndex {
  fn from_iter<I: IntoIterator<Item = Block>>(iter: I) -> Self {
    let mut index = Self::new();
    for block in iter {
      index.insert(block);
    }
    index
  }
}
