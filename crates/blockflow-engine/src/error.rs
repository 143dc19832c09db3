//! Error types for flow execution.

use thiserror::Error;

/// Errors that can stop a flow run.
///
/// A missing entry block is not an error: it is reported through
/// [`RunOutcome::NoEntryBlock`](crate::RunOutcome::NoEntryBlock).
#[derive(Debug, Error)]
pub enum EngineError {
  /// The run was cancelled.
  #[error("flow execution cancelled")]
  Cancelled,

  /// The run executed `limit` blocks and the flow still had somewhere to go.
  #[error("step limit of {limit} blocks reached, the flow may contain a cycle")]
  StepLimitExceeded { limit: usize },
}
