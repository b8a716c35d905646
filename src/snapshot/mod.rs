pub mod runner;
pub mod source;

pub use runner::{apply_snapshot, run_snapshot_sync, ApplyStats};
pub use crate::ledger::SealedRound;
pub use source::{FileSnapshotSource, LedgerSnapshot, SnapshotSource};
