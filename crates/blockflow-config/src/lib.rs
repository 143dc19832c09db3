//! Blockflow Config
//!
//! This crate contains the serializable flow document types for blockflow.
//! A flow document is the JSON file written by the flow editor: project
//! metadata, a list of blocks and the connections between them.
//!
//! ```json
//! {
//!   "meta": { "projectName": "Demo", "version": "1.0" },
//!   "blocks": [
//!     { "id": 1, "type": "giris", "data": { "title": "Start", "body": "Hi" } },
//!     { "id": 2, "type": "gelisme", "data": { "title": "Mid", "body": "Work" } }
//!   ],
//!   "connections": [{ "from": 1, "to": 2 }]
//! }
//! ```
//!
//! Every top-level key is optional, and display-only fields accept any JSON
//! scalar. Editor-only keys such as `position` are ignored. These types carry
//! no behaviour beyond defaulting; indexing and traversal live in `blockflow-flow` and
//! `blockflow-engine`.

mod block;
mod connection;
mod document;
mod id;
mod lenient;

pub use block::{Block, BlockData};
pub use connection::Connection;
pub use document::{FlowDocument, FlowMeta};
pub use id::BlockId;

/// Block type that marks where traversal begins.
pub const ENTRY_KIND: &str = "giris";

/// Block type that triggers the extra processing delay.
pub const PROCESSING_KIND: &str = "gelisme";

/// Title shown for blocks without `data.title`.
pub const UNTITLED: &str = "Untitled";

/// Body shown for blocks without `data.body`.
pub const NO_CONTENT: &str = "No content";
