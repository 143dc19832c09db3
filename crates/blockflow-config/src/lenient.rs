//! Tolerant parsing for display-only fields.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Read a display field as text.
///
/// Numbers and booleans are rendered as text; null, arrays and objects are
/// treated as absent. Never fails on well-formed JSON.
pub(crate) fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
  D: Deserializer<'de>,
{
  Ok(match Value::deserialize(deserializer)? {
    Value::String(s) => Some(s),
    Value::Number(n) => Some(n.to_string()),
    Value::Bool(b) => Some(b.to_string()),
    Value::Null | Value::Array(_) | Value::Object(_) => None,
  })
}

#[cfg(test)]
mod tests {
  use super::*;

  #[derive(Deserialize)]
  struct Holder {
    #[serde(default, deserialize_with = "text")]
    value: Option<String>,
  }

  fn parse(json: &str) -> Option<String> {
    serde_json::from_str::<Holder>(json).unwrap().value
  }

  #[test]
  fn test_scalars_become_text() {
    assert_eq!(parse(r#"{"value": "1.0"}"#).as_deref(), Some("1.0"));
    assert_eq!(parse(r#"{"value": 2}"#).as_deref(), Some("2"));
    assert_eq!(parse(r#"{"value": 2.5}"#).as_deref(), Some("2.5"));
    assert_eq!(parse(r#"{"value": true}"#).as_deref(), Some("true"));
  }

  #[test]
  fn test_other_types_are_absent() {
    assert_eq!(parse(r#"{"value": null}"#), None);
    assert_eq!(parse(r#"{"value": [1]}"#), None);
    assert_eq!(parse(r#"{"value": {"major": 1}}"#), None);
    assert_eq!(parse("{}"), None);
  }
}
