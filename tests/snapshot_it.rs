mod common;

use common::*;
use reward_ledger::query::QueryError;
use reward_ledger::ledger::ResultEntry;
use reward_ledger::repository::{
  MemoryResultArchive, ResultArchive, ResultList, RoundHistoryStore, StoreError,
  TermDepositRegistry,
};
use reward_ledger::service::RewardLedgerService;
use reward_ledger::snapshot::{apply_snapshot, FileSnapshotSource, SnapshotSource};
use reward_ledger::tasks::spawn_snapshot_sync;
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

#[tokio::test]
async fn file_source_parses_snapshot() {
  let mut file = tempfile::NamedTempFile::new().unwrap();
  file
    .write_all(serde_json::to_string(&snapshot_json()).unwrap().as_bytes())
    .unwrap();

  let source = FileSnapshotSource::new(file.path());
  let loaded = source.load().await.unwrap();
  assert_eq!(loaded.current_round.number, 5);
  assert_eq!(loaded.history.len(), 3);
  assert_eq!(loaded.entries.len(), 3);
}

#[tokio::test]
async fn missing_file_is_an_error() {
  let dir = tempfile::tempdir().unwrap();
  let source = FileSnapshotSource::new(dir.path().join("absent.json"));
  assert!(source.load().await.is_err());
}

#[tokio::test]
async fn apply_prunes_expired_terms_and_raises_flag() {
  let service = RewardLedgerService::in_memory();
  assert!(!service.is_synced());

  let stats = apply_snapshot(&service, snapshot(), NOW).await.unwrap();
  assert_eq!(stats.current_round, 5);
  assert_eq!(stats.sealed_rounds, 3);
  assert_eq!(stats.entries, 3);
  assert_eq!(stats.terms, 2);
  assert_eq!(stats.expired_terms, 1);
  assert!(service.is_synced());

  let terms = service.terms().try_acquire().unwrap();
  assert!(!terms.list_all().contains_key("ff"));
}

#[tokio::test]
async fn unsynced_snapshot_keeps_queries_refused() {
  let service = Arc::new(RewardLedgerService::in_memory());
  let mut snapshot = snapshot();
  snapshot.synced = false;
  apply_snapshot(&service, snapshot, NOW).await.unwrap();

  assert_eq!(
    dispatcher(service, 10).execute("current", &[]),
    Err(QueryError::NotSynced)
  );
}

#[tokio::test]
async fn invalid_snapshot_leaves_previous_state() {
  let service = loaded_service().await;

  let mut broken = snapshot();
  broken.history[1].round.disqualified_entries = 99;
  assert!(apply_snapshot(&service, broken, NOW).await.is_err());

  let mut future = snapshot();
  future.history[2].round.number = 5;
  assert!(apply_snapshot(&service, future, NOW).await.is_err());

  let rounds = service.rounds().try_acquire().unwrap();
  assert_eq!(rounds.all_rounds().len(), 3);
  assert_eq!(rounds.all_rounds()[&2].disqualified_entries, 1);
}

#[tokio::test]
async fn producer_task_publishes_file_contents() {
  let mut file = tempfile::NamedTempFile::new().unwrap();
  file
    .write_all(serde_json::to_string(&snapshot_json()).unwrap().as_bytes())
    .unwrap();

  let service = Arc::new(RewardLedgerService::in_memory());
  let source = Arc::new(FileSnapshotSource::new(file.path()));
  let handle = spawn_snapshot_sync(service.clone(), source, 1);

  let synced = tokio::time::timeout(Duration::from_secs(5), async {
    while !service.is_synced() {
      tokio::time::sleep(Duration::from_millis(10)).await;
    }
  })
  .await;
  handle.abort();
  assert!(synced.is_ok());

  let dispatcher = dispatcher(service, 10);
  assert!(dispatcher.execute("history", &[]).is_ok());
}

/// Memory archive whose writes can be switched off from the test.
struct SwitchableArchive {
  inner: MemoryResultArchive,
  failing: Arc<AtomicBool>,
}

impl ResultArchive for SwitchableArchive {
  fn load(&self, list: ResultList, round: u32) -> Result<Vec<ResultEntry>, StoreError> {
    self.inner.load(list, round)
  }

  fn save(&mut self, list: ResultList, round: u32, entries: &[ResultEntry]) -> Result<(), StoreError> {
    if self.failing.load(Ordering::SeqCst) {
      return Err(StoreError::Unavailable("write refused".to_string()));
    }
    self.inner.save(list, round, entries)
  }

  fn remove(&mut self, list: ResultList, round: u32) -> Result<(), StoreError> {
    self.inner.remove(list, round)
  }
}

#[tokio::test]
async fn archive_failure_keeps_history_and_lowers_flag() {
  let failing = Arc::new(AtomicBool::new(false));
  let service = Arc::new(RewardLedgerService::new(Box::new(SwitchableArchive {
    inner: MemoryResultArchive::new(),
    failing: failing.clone(),
  })));
  apply_snapshot(&service, snapshot(), NOW).await.unwrap();
  assert!(service.is_synced());

  failing.store(true, Ordering::SeqCst);
  let mut next = snapshot();
  next.current_round.number = 6;
  assert!(apply_snapshot(&service, next, NOW).await.is_err());
  assert!(!service.is_synced());

  let dispatcher = dispatcher(service.clone(), 10).allow_unsynced(true);
  match dispatcher.execute("payouts", &args(&["2"])) {
    Ok(reward_ledger::query::QueryResponse::Payouts(list)) => assert_eq!(list.len(), 2),
    other => panic!("unexpected {:?}", other),
  }
  let rounds = service.rounds().try_acquire().unwrap();
  assert_eq!(rounds.current_round().number, 5);
  assert_eq!(rounds.all_rounds().len(), 3);
}
