/**
* filename : source
* description: Where the producer reads computed ledger state from.
**/

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::ledger::{LedgerEntry, Round, SealedRound, TermEntry};
use crate::types::AppError;

/// Complete computed ledger state as published by the rewards scanner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerSnapshot {
  /// Whether the scanner had caught up with the network tip.
  #[serde(default = "default_synced")]
  pub synced: bool,
  pub current_round: Round,
  #[serde(default)]
  pub history: Vec<SealedRound>,
  #[serde(default)]
  pub entries: Vec<LedgerEntry>,
  #[serde(default)]
  pub terms: Vec<TermEntry>,
}

fn default_synced() -> bool {
  true
}

#[async_trait]
pub trait SnapshotSource: Send + Sync {
  async fn load(&self) -> Result<LedgerSnapshot, AppError>;
  fn describe(&self) -> String;
}

/// JSON snapshot file rewritten by the scanner.
pub struct FileSnapshotSource {
  path: PathBuf,
}

impl FileSnapshotSource {
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self { path: path.into() }
  }
}

#[async_trait]
impl SnapshotSource for FileSnapshotSource {
  async fn load(&self) -> Result<LedgerSnapshot, AppError> {
    let bytes = tokio::fs::read(&self.path).await?;
    Ok(serde_json::from_slice(&bytes)?)
  }

  fn describe(&self) -> String {
    self.path.display().to_string()
  }
}
