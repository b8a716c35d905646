// src/main.rs
/**
* description: Entry point for the reward ledger query service.
**/

use reward_ledger::config::Settings;
use reward_ledger::query::QueryDispatcher;
use reward_ledger::repository::{MemoryResultArchive, ResultArchive};
use reward_ledger::service::RewardLedgerService;
use reward_ledger::shutdown::shutdown_signal;
use reward_ledger::snapshot::FileSnapshotSource;
use reward_ledger::tasks::spawn_snapshot_sync;
use reward_ledger::types::AppError;

use log::{error, info, warn};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

#[tokio::main]
async fn main() -> Result<(), AppError> {
  // 1. Initialize logging
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
  info!("Application starting...");

  // 2. Load configuration
  let settings = Settings::new()?;
  info!("Configuration loaded.");

  // 3. Build the service and its stores
  let archive = open_archive(&settings)?;
  let service = Arc::new(RewardLedgerService::new(archive));
  let dispatcher = Arc::new(QueryDispatcher::from_settings(service.clone(), &settings));

  // 4. Spawn the producer
  let source = Arc::new(FileSnapshotSource::new(&settings.producer.snapshot_path));
  let producer_handle = spawn_snapshot_sync(service.clone(), source, settings.producer.interval_secs);

  // 5. Serve commands from stdin until EOF or shutdown
  let console_handle = tokio::spawn(run_console(dispatcher));

  tokio::select! {
    _ = shutdown_signal() => {},
    joined = console_handle => match joined {
      Ok(Ok(())) => info!("[Console] Input closed."),
      Ok(Err(e)) => error!("[Console] Stopped: {}", e),
      Err(e) => error!("[Console] Task failed: {}", e),
    },
  }

  producer_handle.abort();
  let _ = producer_handle.await;

  info!("Application exited cleanly.");
  Ok(())
}

fn open_archive(settings: &Settings) -> Result<Box<dyn ResultArchive>, AppError> {
  match &settings.producer.archive_path {
    #[cfg(feature = "rocksdb-backend")]
    Some(path) => Ok(Box::new(reward_ledger::repository::RocksDBResultArchive::open(path)?)),
    #[cfg(not(feature = "rocksdb-backend"))]
    Some(path) => {
      warn!("archive_path {} ignored: built without rocksdb-backend", path);
      Ok(Box::new(MemoryResultArchive::new()))
    }
    None => Ok(Box::new(MemoryResultArchive::new())),
  }
}

/// One `command [arg]` per line in, one JSON reply per line out.
async fn run_console(dispatcher: Arc<QueryDispatcher>) -> Result<(), AppError> {
  let mut lines = BufReader::new(tokio::io::stdin()).lines();
  let mut stdout = tokio::io::stdout();

  while let Some(line) = lines.next_line().await? {
    let mut parts = line.split_whitespace();
    let Some(command) = parts.next() else {
      continue;
    };
    let args: Vec<String> = parts.map(str::to_string).collect();

    let reply = dispatcher.handle(command, &args);
    let mut rendered = serde_json::to_string(&reply)?;
    rendered.push('\n');
    stdout.write_all(rendered.as_bytes()).await?;
    stdout.flush().await?;
  }
  Ok(())
}
