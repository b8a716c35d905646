mod common;

use common::*;
use reward_ledger::query::{QueryError, QueryResponse};
use reward_ledger::snapshot::apply_snapshot;
use std::sync::Arc;
use std::time::{Duration, Instant};

#[tokio::test]
async fn held_round_guard_returns_busy_immediately() {
  let service = loaded_service().await;
  let dispatcher = dispatcher(service.clone(), 10);

  let writer = service.rounds().acquire_for_write().await;
  let started = Instant::now();
  for (command, args) in [
    ("current", vec![]),
    ("history", vec![]),
    ("payouts", args(&["2"])),
    ("snapshot", args(&["2"])),
    ("check", args(&[HOLDER])),
  ] {
    assert!(
      matches!(dispatcher.execute(command, &args), Err(QueryError::Busy { .. })),
      "{command}"
    );
  }
  assert!(started.elapsed() < Duration::from_secs(1));

  // Other stores stay readable.
  assert!(dispatcher.execute("termrewards", &[]).is_ok());
  drop(writer);

  assert!(dispatcher.execute("current", &[]).is_ok());
}

#[tokio::test]
async fn held_entry_guard_blocks_only_check() {
  let service = loaded_service().await;
  let dispatcher = dispatcher(service.clone(), 10);

  let _writer = service.entries().acquire_for_write().await;
  let reply = serde_json::to_value(dispatcher.handle("check", &args(&[HOLDER]))).unwrap();
  assert_eq!(reply["error"]["category"], "busy");
  assert_eq!(reply["error"]["code"], -20);
  assert!(dispatcher.execute("current", &[]).is_ok());
}

#[tokio::test]
async fn held_term_guard_blocks_term_rewards() {
  let service = loaded_service().await;
  let dispatcher = dispatcher(service.clone(), 10);

  let _writer = service.terms().acquire_for_write().await;
  assert_eq!(
    dispatcher.execute("termrewards", &[]),
    Err(QueryError::Busy { store: "term deposits" })
  );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn readers_see_whole_rounds_or_busy_during_rescans() {
  let service = loaded_service().await;
  let dispatcher = Arc::new(dispatcher(service.clone(), 10));

  let producer = {
    let service = service.clone();
    tokio::spawn(async move {
      for _ in 0..200 {
        apply_snapshot(&service, snapshot(), NOW).await.unwrap();
        tokio::task::yield_now().await;
      }
    })
  };

  let mut readers = Vec::new();
  for _ in 0..4 {
    let dispatcher = dispatcher.clone();
    readers.push(tokio::spawn(async move {
      let mut answered = 0usize;
      for _ in 0..500 {
        match dispatcher.execute("current", &[]) {
          Ok(QueryResponse::Current(view)) => {
            assert_eq!(view.rewards_cycle, 5);
            assert_eq!(view.eligible_addresses, 90);
            answered += 1;
          }
          Err(QueryError::Busy { .. }) => {}
          other => panic!("unexpected {:?}", other),
        }
        match dispatcher.execute("payouts", &args(&["2"])) {
          Ok(QueryResponse::Payouts(list)) => assert_eq!(list.len(), 2),
          Err(QueryError::Busy { .. }) => {}
          other => panic!("unexpected {:?}", other),
        }
        tokio::task::yield_now().await;
      }
      answered
    }));
  }

  producer.await.unwrap();
  for reader in readers {
    reader.await.unwrap();
  }
}
