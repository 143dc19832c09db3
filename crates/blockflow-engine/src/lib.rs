//! Blockflow Engine
//!
//! This crate walks a [`Flow`](blockflow_flow::Flow) from its entry block to
//! its end, one block at a time.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        FlowEngine                           │
//! │  - run(cancel) → RunReport                                  │
//! │  - find entry block, execute, follow first connection       │
//! │  - pacing delays between blocks                             │
//! └─────────────────────────────────────────────────────────────┘
//!                               │ FlowEvent
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       FlowNotifier                          │
//! │  - ConsoleNotifier: renders lines to a writer (stdout)      │
//! │  - ChannelNotifier: forwards events to an mpsc channel      │
//! │  - NoopNotifier: discards events                            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! let flow = Flow::new(document);
//! let engine = FlowEngine::with_notifier(flow, EngineConfig::default(), ConsoleNotifier::stdout());
//! let report = engine.run(CancellationToken::new()).await?;
//! ```

mod config;
mod console;
mod engine;
mod error;
mod events;

pub use config::EngineConfig;
pub use console::{ConsoleNotifier, render_event};
pub use engine::{FlowEngine, RunOutcome, RunReport};
pub use error::EngineError;
pub use events::{ChannelNotifier, FlowEvent, FlowNotifier, NoopNotifier};
