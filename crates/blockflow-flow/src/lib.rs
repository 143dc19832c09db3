//! Blockflow Flow
//!
//! This crate provides the indexed form of a flow document. A [`Flow`] is
//! built once from a [`FlowDocument`](blockflow_config::FlowDocument) and is
//! read-only afterwards:
//!
//! - Blocks are indexed by id, in document order
//! - Connections are kept as an ordered list
//! - The entry block and each block's successor are looked up on demand

mod flow;
mod index;

pub use flow::Flow;
pub use index::BlockIndex;
