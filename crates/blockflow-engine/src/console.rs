//! Console rendering of flow events.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::events::{FlowEvent, FlowNotifier};

/// Render an event as console lines.
///
/// The output depends only on the event's block content, never on the run
/// id, so two runs of the same flow render identically.
pub fn render_event(event: &FlowEvent) -> Vec<String> {
  match event {
    FlowEvent::RunStarted { .. } => vec!["🚀 Flow engine starting...".to_string(), String::new()],
    FlowEvent::NoEntryBlock { .. } => {
      vec!["❌ ERROR: no entry block ('giris') found in flow!".to_string()]
    }
    FlowEvent::BlockStarted {
      kind, title, body, ..
    } => vec![
      format!("[{}] -> {}", kind.to_uppercase(), title),
      format!("   └── 📝 {}", body),
    ],
    FlowEvent::BlockProcessing { .. } => vec!["   ⚙️  Processing...".to_string()],
    FlowEvent::Advanced { .. } => vec!["      ⬇️".to_string()],
    FlowEvent::Terminated { .. } => vec!["      🛑".to_string()],
    FlowEvent::RunCompleted { .. } => {
      vec![String::new(), "🏁 Flow completed successfully.".to_string()]
    }
  }
}

/// A notifier that writes rendered events to a writer.
///
/// Each event is flushed as soon as it is written so the pacing delays show
/// up on screen.
pub struct ConsoleNotifier<W: Write + Send> {
  out: Mutex<W>,
}

impl ConsoleNotifier<io::Stdout> {
  pub fn stdout() -> Self {
    Self::new(io::stdout())
  }
}

impl<W: Write + Send> ConsoleNotifier<W> {
  pub fn new(out: W) -> Self {
    Self {
      out: Mutex::new(out),
    }
  }

  /// Recover the writer, e.g. to inspect a captured buffer.
  pub fn into_inner(self) -> W {
    match self.out.into_inner() {
      Ok(out) => out,
      Err(poisoned) => poisoned.into_inner(),
    }
  }
}

impl<W: Write + Send> FlowNotifier for ConsoleNotifier<W> {
  fn notify(&self, event: FlowEvent) {
    let mut out = match self.out.lock() {
      Ok(out) => out,
      Err(poisoned) => poisoned.into_inner(),
    };
    // Console output is best-effort, like print!
    for line in render_event(&event) {
      let _ = writeln!(out, "{}", line);
    }
    let _ = out.flush();
  }
}
