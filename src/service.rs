use log::info;

use crate::guard::{StoreGuard, SyncState};
use crate::repository::{
    MemoryEntryStore, MemoryResultArchive, MemoryRoundHistory, MemoryTermRegistry, ResultArchive,
};

/// Owner of every ledger store and the readiness flag.
///
/// Constructed once at startup and shared by handle with the dispatcher and
/// the producer task.
pub struct RewardLedgerService {
    sync: SyncState,
    rounds: StoreGuard<MemoryRoundHistory>,
    entries: StoreGuard<MemoryEntryStore>,
    terms: StoreGuard<MemoryTermRegistry>,
}

impl RewardLedgerService {
    pub fn new(archive: Box<dyn ResultArchive>) -> Self {
        info!("[Service] Reward ledger service created");
        Self {
            sync: SyncState::default(),
            rounds: StoreGuard::new("round history", MemoryRoundHistory::new(archive)),
            entries: StoreGuard::new("ledger entries", MemoryEntryStore::new()),
            terms: StoreGuard::new("term deposits", MemoryTermRegistry::new()),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryResultArchive::new()))
    }

    pub fn sync_state(&self) -> &SyncState {
        &self.sync
    }

    pub fn is_synced(&self) -> bool {
        self.sync.is_synced()
    }

    pub fn rounds(&self) -> &StoreGuard<MemoryRoundHistory> {
        &self.rounds
    }

    pub fn entries(&self) -> &StoreGuard<MemoryEntryStore> {
        &self.entries
    }

    pub fn terms(&self) -> &StoreGuard<MemoryTermRegistry> {
        &self.terms
    }
}
