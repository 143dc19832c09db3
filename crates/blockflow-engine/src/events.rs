//! Flow events and notifiers.
//!
//! The engine never prints directly. Every observable step of a run is
//! emitted as a [`FlowEvent`], and the notifier decides what to do with it
//! (render to a console, forward to a channel, ignore).

use blockflow_config::BlockId;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

/// Events emitted during a flow run, in the order they happen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FlowEvent {
  /// An entry block was found and traversal is starting.
  RunStarted { run_id: String },

  /// The flow has no entry block. Nothing else is emitted for this run.
  NoEntryBlock { run_id: String },

  /// A block is being executed.
  BlockStarted {
    run_id: String,
    block_id: BlockId,
    kind: String,
    title: String,
    body: String,
  },

  /// A processing block started its extended work.
  BlockProcessing { run_id: String, block_id: BlockId },

  /// Traversal moved on to the next block.
  Advanced {
    run_id: String,
    from: BlockId,
    to: BlockId,
  },

  /// The current block has no usable outgoing connection.
  Terminated { run_id: String, block_id: BlockId },

  /// The run reached the end of the flow.
  RunCompleted { run_id: String, visited: usize },
}

impl FlowEvent {
  pub fn run_id(&self) -> &str {
    match self {
      FlowEvent::RunStarted { run_id }
      | FlowEvent::NoEntryBlock { run_id }
      | FlowEvent::BlockStarted { run_id, .. }
      | FlowEvent::BlockProcessing { run_id, .. }
      | FlowEvent::Advanced { run_id, .. }
      | FlowEvent::Terminated { run_id, .. }
      | FlowEvent::RunCompleted { run_id, .. } => run_id,
    }
  }
}

/// Trait for receiving flow events.
pub trait FlowNotifier: Send + Sync {
  /// Called for each event of a run.
  fn notify(&self, event: FlowEvent);
}

/// A notifier that discards all events.
#[derive(Debug, Clone, Default)]
pub struct NoopNotifier;

impl FlowNotifier for NoopNotifier {
  fn notify(&self, _event: FlowEvent) {}
}

/// A notifier that sends events to an unbounded channel.
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
  sender: mpsc::UnboundedSender<FlowEvent>,
}

impl ChannelNotifier {
  pub fn new(sender: mpsc::UnboundedSender<FlowEvent>) -> Self {
    Self { sender }
  }

  /// Create a notifier together with the receiving end of its channel.
  pub fn channel() -> (Self, mpsc::UnboundedReceiver<FlowEvent>) {
    let (sender, receiver) = mpsc::unbounded_channel();
    (Self::new(sender), receiver)
  }
}

impl FlowNotifier for ChannelNotifier {
  fn notify(&self, event: FlowEvent) {
    // Receiver may have been dropped
    let _ = self.sender.send(event);
  }
}
