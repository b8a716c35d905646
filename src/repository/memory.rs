use crate::ledger::{Address, LedgerEntry, ResultEntry, Round, SealedRound, TermEntry};
use crate::repository::r#trait::{
    LedgerEntryStore, ResultArchive, ResultList, RoundHistoryStore, StoreError,
    TermDepositRegistry,
};
use crate::types::RoundNumber;
use log::{info, warn};
use std::collections::{BTreeMap, HashMap};

/// In-memory archive of sealed round lists.
#[derive(Default)]
pub struct MemoryResultArchive {
    lists: HashMap<String, Vec<ResultEntry>>,
}

impl MemoryResultArchive {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ResultArchive for MemoryResultArchive {
    fn load(&self, list: ResultList, round: RoundNumber) -> Result<Vec<ResultEntry>, StoreError> {
        self.lists
            .get(&list.key(round))
            .cloned()
            .ok_or_else(|| StoreError::Unavailable(format!("no {:?} list for round {}", list, round)))
    }

    fn save(
        &mut self,
        list: ResultList,
        round: RoundNumber,
        entries: &[ResultEntry],
    ) -> Result<(), StoreError> {
        self.lists.insert(list.key(round), entries.to_vec());
        Ok(())
    }

    fn remove(&mut self, list: ResultList, round: RoundNumber) -> Result<(), StoreError> {
        self.lists.remove(&list.key(round));
        Ok(())
    }
}

/// Round history kept in memory, lists delegated to an archive.
pub struct MemoryRoundHistory {
    current: Round,
    sealed: BTreeMap<RoundNumber, Round>,
    archive: Box<dyn ResultArchive>,
}

impl MemoryRoundHistory {
    pub fn new(archive: Box<dyn ResultArchive>) -> Self {
        Self {
            current: Round::default(),
            sealed: BTreeMap::new(),
            archive,
        }
    }

    /// Replaces the round under construction.
    pub fn set_current(&mut self, round: Round) {
        self.current = round;
    }

    /// Adds one finished round and archives the lists it carries.
    pub fn seal(&mut self, sealed: SealedRound) -> Result<(), StoreError> {
        check_sealable(&sealed.round, &self.current)?;
        self.archive_lists(&sealed)?;
        if self.sealed.insert(sealed.round.number, sealed.round).is_some() {
            warn!("[RoundHistory] Re-sealed an existing round");
        }
        Ok(())
    }

    /// Swaps in a new current round and the full sealed history.
    ///
    /// Every round is checked and every list archived before the summaries
    /// change. On error the previous summaries stay in place.
    pub fn replace(&mut self, current: Round, history: Vec<SealedRound>) -> Result<(), StoreError> {
        for sealed in &history {
            check_sealable(&sealed.round, &current)?;
        }
        for sealed in &history {
            self.archive_lists(sealed)?;
        }

        self.current = current;
        self.sealed = history
            .into_iter()
            .map(|sealed| (sealed.round.number, sealed.round))
            .collect();
        Ok(())
    }

    fn archive_lists(&mut self, sealed: &SealedRound) -> Result<(), StoreError> {
        let number = sealed.round.number;
        for (list, entries) in [
            (ResultList::Snapshot, &sealed.snapshot),
            (ResultList::Payouts, &sealed.payouts),
        ] {
            match entries {
                Some(entries) => self.archive.save(list, number, entries)?,
                None => self.archive.remove(list, number)?,
            }
        }
        Ok(())
    }

    fn load_sealed(&self, list: ResultList, round: RoundNumber) -> Result<Vec<ResultEntry>, StoreError> {
        self.check_past_round(round)?;
        if !self.sealed.contains_key(&round) {
            return Err(StoreError::Unavailable(format!("round {} is not sealed", round)));
        }
        self.archive.load(list, round)
    }
}

/// A sealed round must keep its counter invariants and lie strictly before
/// the current round.
fn check_sealable(round: &Round, current: &Round) -> Result<(), StoreError> {
    round.validate().map_err(StoreError::InvariantViolation)?;
    if round.number == 0 {
        return Err(StoreError::InvariantViolation("round 0 cannot be sealed".to_string()));
    }
    if current.is_started() && round.number >= current.number {
        return Err(StoreError::InvariantViolation(format!(
            "round {} is not before current round {}",
            round.number, current.number
        )));
    }
    Ok(())
}

impl RoundHistoryStore for MemoryRoundHistory {
    fn current_round(&self) -> &Round {
        &self.current
    }

    fn all_rounds(&self) -> &BTreeMap<RoundNumber, Round> {
        &self.sealed
    }

    fn results_for_round(&self, round: RoundNumber) -> Result<Vec<ResultEntry>, StoreError> {
        self.load_sealed(ResultList::Snapshot, round)
    }

    fn payouts_for_round(&self, round: RoundNumber) -> Result<Vec<ResultEntry>, StoreError> {
        self.load_sealed(ResultList::Payouts, round)
    }
}

/// Per-address entries for the current round.
#[derive(Default)]
pub struct MemoryEntryStore {
    entries: HashMap<Address, LedgerEntry>,
}

impl MemoryEntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn upsert(&mut self, entry: LedgerEntry) {
        self.entries.insert(entry.address.clone(), entry);
    }

    pub fn replace_all(&mut self, entries: Vec<LedgerEntry>) {
        self.entries = entries
            .into_iter()
            .map(|entry| (entry.address.clone(), entry))
            .collect();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl LedgerEntryStore for MemoryEntryStore {
    fn lookup(&self, address: &Address) -> Option<&LedgerEntry> {
        self.entries.get(address)
    }
}

/// Term deposits keyed by their locking transaction.
#[derive(Default)]
pub struct MemoryTermRegistry {
    deposits: BTreeMap<String, TermEntry>,
}

impl MemoryTermRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, entry: TermEntry) {
        self.deposits.insert(entry.deposit_tx_id.clone(), entry);
    }

    pub fn replace_all(&mut self, entries: Vec<TermEntry>) {
        self.deposits = entries
            .into_iter()
            .map(|entry| (entry.deposit_tx_id.clone(), entry))
            .collect();
    }

    pub fn len(&self) -> usize {
        self.deposits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deposits.is_empty()
    }

    /// Drops every deposit whose expiry time has been reached.
    pub fn remove_expired(&mut self, now: i64) -> usize {
        let before = self.deposits.len();
        self.deposits.retain(|_, entry| !entry.is_expired(now));
        let removed = before - self.deposits.len();
        if removed > 0 {
            info!("[TermRegistry] Removed {} expired deposits", removed);
        }
        removed
    }
}

impl TermDepositRegistry for MemoryTermRegistry {
    fn list_all(&self) -> &BTreeMap<String, TermEntry> {
        &self.deposits
    }
}
