/**
* filename : tasks
* description: Spawning of the long-lived producer task.
**/
use std::{sync::Arc, time::Duration};
use tokio::task::JoinHandle;

use crate::service::RewardLedgerService;
use crate::snapshot::{run_snapshot_sync, SnapshotSource};

pub fn spawn_snapshot_sync<S: SnapshotSource + 'static>(
  service: Arc<RewardLedgerService>,
  source: Arc<S>,
  interval_secs: u64,
) -> JoinHandle<()> {
  tokio::spawn(run_snapshot_sync(
    service,
    source,
    Duration::from_secs(interval_secs.max(1)),
  ))
}
