use std::time::Duration;

/// Pacing and safety settings for the flow engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
  /// Pause after every block's content is shown.
  pub step_delay: Duration,
  /// Extra pause after a processing block's indicator line.
  pub processing_delay: Duration,
  /// Upper bound on executed blocks. `None` walks until the flow ends,
  /// which never happens if the connections form a cycle.
  pub max_steps: Option<usize>,
}

impl EngineConfig {
  pub const DEFAULT_STEP_DELAY: Duration = Duration::from_millis(800);
  pub const DEFAULT_PROCESSING_DELAY: Duration = Duration::from_millis(1000);

  /// No pacing at all.
  pub fn instant() -> Self {
    Self {
      step_delay: Duration::ZERO,
      processing_delay: Duration::ZERO,
      max_steps: None,
    }
  }

  pub fn with_max_steps(mut self, max_steps: usize) -> Self {
    self.max_steps = Some(max_steps);
    self
  }
}

impl Default for EngineConfig {
  fn default() -> Self {
    Self {
      step_delay: Self::DEFAULT_STEP_DELAY,
      processing_delay: Self::DEFAULT_PROCESSING_DELAY,
      max_steps: None,
    }
  }
}
