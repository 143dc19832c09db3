//! Flow traversal.
//!
//! The `FlowEngine` walks a flow from its entry block, following the first
//! outgoing connection of each block until there is none left to follow.

use std::time::Duration;

use blockflow_config::{Block, BlockId};
use blockflow_flow::Flow;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument, warn};

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::events::{FlowEvent, FlowNotifier, NoopNotifier};

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
  /// The walk reached a block with nowhere to go.
  ///
  /// `dangling_target` is set when the last block did have a connection but
  /// its target is not a known block. Console output is the same either way.
  Completed { dangling_target: Option<BlockId> },

  /// No entry block was found; nothing was executed.
  NoEntryBlock,
}

/// Result of a flow run.
#[derive(Debug, Clone)]
pub struct RunReport {
  pub run_id: String,
  /// Executed blocks, in order.
  pub visited: Vec<BlockId>,
  pub outcome: RunOutcome,
}

impl RunReport {
  pub fn is_completed(&self) -> bool {
    matches!(self.outcome, RunOutcome::Completed { .. })
  }
}

/// The flow engine.
///
/// Generic over `N: FlowNotifier` so callers choose where events go.
/// `FlowEngine::new()` discards them; use `with_notifier` to print or
/// collect them.
pub struct FlowEngine<N: FlowNotifier = NoopNotifier> {
  flow: Flow,
  config: EngineConfig,
  notifier: N,
}

impl FlowEngine<NoopNotifier> {
  pub fn new(flow: impl Into<Flow>, config: EngineConfig) -> Self {
    Self::with_notifier(flow, config, NoopNotifier)
  }
}

impl<N: FlowNotifier> FlowEngine<N> {
  pub fn with_notifier(flow: impl Into<Flow>, config: EngineConfig, notifier: N) -> Self {
    Self {
      flow: flow.into(),
      config,
      notifier,
    }
  }

  pub fn flow(&self) -> &Flow {
    &self.flow
  }

  pub fn config(&self) -> &EngineConfig {
    &self.config
  }

  pub fn into_notifier(self) -> N {
    self.notifier
  }

  /// Walk the flow from its entry block to its end.
  #[instrument(name = "flow_run", skip_all, fields(blocks = self.flow.len()))]
  pub async fn run(&self, cancel: CancellationToken) -> Result<RunReport, EngineError> {
    let run_id = uuid::Uuid::new_v4().to_string();

    let Some(start) = self.flow.find_start_block() else {
      info!(run_id = %run_id, "no entry block found");
      self.notifier.notify(FlowEvent::NoEntryBlock {
        run_id: run_id.clone(),
      });
      return Ok(RunReport {
        run_id,
        visited: Vec::new(),
        outcome: RunOutcome::NoEntryBlock,
      });
    };

    info!(run_id = %run_id, start = %start.id, "flow_started");
    self.notifier.notify(FlowEvent::RunStarted {
      run_id: run_id.clone(),
    });

    let mut visited = Vec::new();
    let mut current = start;

    loop {
      if cancel.is_cancelled() {
        warn!(run_id = %run_id, "flow cancelled");
        return Err(EngineError::Cancelled);
      }

      if let Some(limit) = self.config.max_steps
        && visited.len() >= limit
      {
        warn!(run_id = %run_id, limit, block_id = %current.id, "step limit reached");
        return Err(EngineError::StepLimitExceeded { limit });
      }

      self.execute_block(&run_id, current, &cancel).await?;
      visited.push(current.id.clone());

      let next_id = self.flow.get_next_block_id(current.id.as_str());
      match next_id.and_then(|id| self.flow.get_block(id.as_str())) {
        Some(next) => {
          self.notifier.notify(FlowEvent::Advanced {
            run_id: run_id.clone(),
            from: current.id.clone(),
            to: next.id.clone(),
          });
          current = next;
        }
        None => {
          let dangling_target = next_id.cloned();
          if let Some(target) = &dangling_target {
            debug!(
              run_id = %run_id,
              block_id = %current.id,
              target = %target,
              "connection target is not a known block, treating as end of flow"
            );
          }

          self.notifier.notify(FlowEvent::Terminated {
            run_id: run_id.clone(),
            block_id: current.id.clone(),
          });
          self.notifier.notify(FlowEvent::RunCompleted {
            run_id: run_id.clone(),
            visited: visited.len(),
          });
          info!(run_id = %run_id, visited = visited.len(), "flow_completed");

          return Ok(RunReport {
            run_id,
            visited,
            outcome: RunOutcome::Completed { dangling_target },
          });
        }
      }
    }
  }

  /// Show a block's content and wait out its pacing delays.
  pub async fn execute_block(
    &self,
    run_id: &str,
    block: &Block,
    cancel: &CancellationToken,
  ) -> Result<(), EngineError> {
    debug!(run_id = %run_id, block_id = %block.id, kind = %block.kind, "executing block");

    self.notifier.notify(FlowEvent::BlockStarted {
      run_id: run_id.to_string(),
      block_id: block.id.clone(),
      kind: block.kind.clone(),
      title: block.title().to_string(),
      body: block.body().to_string(),
    });
    pause(self.config.step_delay, cancel).await?;

    if block.is_processing() {
      self.notifier.notify(FlowEvent::BlockProcessing {
        run_id: run_id.to_string(),
        block_id: block.id.clone(),
      });
      pause(self.config.processing_delay, cancel).await?;
    }

    Ok(())
  }
}

async fn pause(delay: Duration, cancel: &CancellationToken) -> Result<(), EngineError> {
  if delay.is_zero() {
    return Ok(());
  }
  tokio::select! {
    _ = tokio::time::sleep(delay) => Ok(()),
    _ = cancel.cancelled() => Err(EngineError::Cancelled),
  }
}
