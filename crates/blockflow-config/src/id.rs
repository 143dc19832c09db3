use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Identifier of a block.
///
/// The flow editor exports ids as JSON integers while hand-written files tend
/// to use strings. Both forms are accepted and normalized to text, so `1` and
/// `"1"` name the same block.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockId(String);

impl BlockId {
  pub fn new(id: impl Into<String>) -> Self {
    Self(id.into())
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl fmt::Display for BlockId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl Borrow<str> for BlockId {
  fn borrow(&self) -> &str {
    &self.0
  }
}

impl From<&str> for BlockId {
  fn from(id: &str) -> Self {
    Self::new(id)
  }
}

impl From<String> for BlockId {
  fn from(id: String) -> Self {
    Self(id)
  }
}

impl From<u64> for BlockId {
  fn from(id: u64) -> Self {
    Self(id.to_string())
  }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawBlockId {
  Text(String),
  Unsigned(u64),
  Signed(i64),
}

impl<'de> Deserialize<'de> for BlockId {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    let id = match RawBlockId::deserialize(deserializer)? {
      RawBlockId::Text(s) => s,
      RawBlockId::Unsigned(n) => n.to_string(),
      RawBlockId::Signed(n) => n.to_string(),
    };
    Ok(Self(id))
  }
}

impl Serialize for BlockId {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&self.0)
  }
}
