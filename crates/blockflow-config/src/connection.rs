use serde::{Deserialize, Serialize};

use crate::id::BlockId;

/// A directed edge from one block to the next.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
  pub from: BlockId,
  pub to: BlockId,
}

impl Connection {
  pub fn new(from: impl Into<BlockId>, to: impl Into<BlockId>) -> Self {
    Self {
      from: from.into(),
      to: to.into(),
    }
  }
}
