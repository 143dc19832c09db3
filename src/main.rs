use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing::info;
use tracing_subscriber::EnvFilter;

use blockflow_engine::{ConsoleNotifier, EngineConfig, FlowEngine};
use blockflow_loader::{
  DEFAULT_FLOW_DIR, FlowRepository, FsFlowRepository, LoaderError, PromptSelector, choose_flow,
  load_banner,
};

/// Blockflow - walks a JSON block flow from its entry block to its end
#[derive(Parser)]
#[command(name = "blockflow")]
#[command(version, about, long_about = None)]
struct Cli {
  /// Directory containing flow files
  #[arg(long, default_value = DEFAULT_FLOW_DIR)]
  dir: PathBuf,

  /// Run this flow file instead of choosing one from the directory
  #[arg(long)]
  file: Option<PathBuf>,

  /// Pause after each block, in milliseconds
  #[arg(long, default_value_t = 800)]
  step_delay_ms: u64,

  /// Extra pause after a processing block, in milliseconds
  #[arg(long, default_value_t = 1000)]
  processing_delay_ms: u64,

  /// Disable all pauses
  #[arg(long)]
  no_delay: bool,

  /// Stop with an error after this many blocks (guards against cyclic flows)
  #[arg(long)]
  max_steps: Option<usize>,
}

impl Cli {
  fn engine_config(&self) -> EngineConfig {
    if self.no_delay {
      return EngineConfig {
        max_steps: self.max_steps,
        ..EngineConfig::instant()
      };
    }
    EngineConfig {
      step_delay: Duration::from_millis(self.step_delay_ms),
      processing_delay: Duration::from_millis(self.processing_delay_ms),
      max_steps: self.max_steps,
    }
  }
}

fn main() -> Result<()> {
  init_tracing();
  let cli = Cli::parse();

  let rt = tokio::runtime::Builder::new_current_thread()
    .enable_all()
    .build()?;
  rt.block_on(run(cli))
}

fn init_tracing() {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .init();
}

async fn run(cli: Cli) -> Result<()> {
  let repository = FsFlowRepository::new(&cli.dir);

  let path = match &cli.file {
    Some(path) => path.clone(),
    None => match choose_flow(&repository, &mut PromptSelector::stdio()).await {
      Ok(file) => file.path,
      Err(e) => match nothing_to_run_message(&e) {
        Some(message) => {
          println!("{message}");
          return Ok(());
        }
        None => return Err(e).context("failed to select a flow file"),
      },
    },
  };

  let document = repository
    .load(&path)
    .await
    .with_context(|| format!("failed to load flow file: {}", path.display()))?;

  let engine = FlowEngine::with_notifier(document, cli.engine_config(), ConsoleNotifier::stdout());
  println!("{}", load_banner(engine.flow().meta()));

  let cancel = CancellationToken::new();
  let ctrl_c = cancel.clone();
  tokio::spawn(async move {
    if tokio::signal::ctrl_c().await.is_ok() {
      ctrl_c.cancel();
    }
  });

  let report = engine.run(cancel).await.context("flow execution failed")?;
  info!(
    run_id = %report.run_id,
    visited = report.visited.len(),
    completed = report.is_completed(),
    "run finished"
  );

  Ok(())
}

/// Diagnostic for loader failures that end the program normally.
///
/// A missing or empty flow directory is reported and exits with success;
/// every other error is fatal.
fn nothing_to_run_message(error: &LoaderError) -> Option<String> {
  match error {
    LoaderError::DirectoryNotFound { path } => Some(format!(
      "❌ ERROR: directory '{}' not found!\nCreate a '{DEFAULT_FLOW_DIR}' directory here or pass --dir.",
      path.display()
    )),
    LoaderError::NoFlowFiles { path } => Some(format!(
      "⚠️  WARNING: no JSON files in '{}'.",
      path.display()
    )),
    _ => None,
  }
}
