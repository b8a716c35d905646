/**
* filename : runner
* description: Producer loop applying ledger snapshots to the service stores.
**/

use log::{error, info, warn};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};
use tokio::time::{interval, Duration};

use crate::repository::StoreError;
use crate::service::RewardLedgerService;
use crate::snapshot::source::{LedgerSnapshot, SnapshotSource};
use crate::types::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApplyStats {
  pub current_round: u32,
  pub sealed_rounds: usize,
  pub entries: usize,
  pub terms: usize,
  pub expired_terms: usize,
}

pub async fn run_snapshot_sync<S: SnapshotSource + 'static>(
  service: Arc<RewardLedgerService>,
  source: Arc<S>,
  interval_duration: Duration,
) {
  let mut tick = interval(interval_duration);
  info!(
    "[SnapshotSync] Reading {} every {:?}",
    source.describe(),
    interval_duration
  );

  loop {
    tick.tick().await;

    match source.load().await {
      Ok(snapshot) => match apply_snapshot(&service, snapshot, unix_now()).await {
        Ok(stats) => info!(
          "[SnapshotSync] Applied round {}: sealed={}, entries={}, terms={}, expired={}",
          stats.current_round, stats.sealed_rounds, stats.entries, stats.terms, stats.expired_terms
        ),
        Err(e) => {
          service.sync_state().set_synced(false);
          error!("[SnapshotSync] Rejected snapshot: {}", e);
        }
      },
      Err(e) => {
        service.sync_state().set_synced(false);
        warn!("[SnapshotSync] Failed to load {}: {} | retrying next tick", source.describe(), e);
      }
    }
  }
}

/// Replaces the contents of every store with `snapshot`.
///
/// Round history is replaced first and as a whole: an invalid round or a
/// failed archive write leaves every store as it was and lowers the
/// readiness flag.
pub async fn apply_snapshot(
  service: &RewardLedgerService,
  snapshot: LedgerSnapshot,
  now: i64,
) -> Result<ApplyStats, AppError> {
  let LedgerSnapshot {
    synced,
    current_round,
    history,
    entries,
    terms,
  } = snapshot;

  let current_number = current_round.number;
  let sealed_rounds = history.len();
  {
    let mut rounds = service.rounds().acquire_for_write().await;
    if let Err(e) = rounds.replace(current_round, history) {
      service.sync_state().set_synced(false);
      return Err(match e {
        StoreError::InvariantViolation(msg) => AppError::Snapshot(msg),
        other => AppError::Storage(other.to_string()),
      });
    }
  }

  let entry_count = {
    let mut store = service.entries().acquire_for_write().await;
    store.replace_all(entries);
    store.len()
  };

  let (term_count, expired_terms) = {
    let mut registry = service.terms().acquire_for_write().await;
    registry.replace_all(terms);
    let expired = registry.remove_expired(now);
    (registry.len(), expired)
  };

  service.sync_state().set_synced(synced);

  Ok(ApplyStats {
    current_round: current_number,
    sealed_rounds,
    entries: entry_count,
    terms: term_count,
    expired_terms,
  })
}

fn unix_now() -> i64 {
  SystemTime::now()
    .duration_since(UNIX_EPOCH)
    .map(|d| d.as_secs() as i64)
    .unwrap_or(0)
}
