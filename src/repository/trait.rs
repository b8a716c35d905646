use crate::ledger::{Address, LedgerEntry, ResultEntry, Round, TermEntry};
use crate::types::RoundNumber;
use std::collections::BTreeMap;

/// Store-level failures, converted to query errors at the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("round {round} outside past rounds 1 - {max}")]
    InvalidRound { round: RoundNumber, max: RoundNumber },

    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}

/// Which per-round list is being read or written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultList {
    /// Qualifying balances at the end of the round.
    Snapshot,
    /// Realized payouts.
    Payouts,
}

impl ResultList {
    pub fn key(&self, round: RoundNumber) -> String {
        match self {
            ResultList::Snapshot => format!("results:{}", round),
            ResultList::Payouts => format!("payouts:{}", round),
        }
    }
}

/// Persisted per-round lists for sealed rounds.
pub trait ResultArchive: Send + Sync {
    /// Missing data is an error, never an empty list.
    fn load(&self, list: ResultList, round: RoundNumber) -> Result<Vec<ResultEntry>, StoreError>;

    fn save(
        &mut self,
        list: ResultList,
        round: RoundNumber,
        entries: &[ResultEntry],
    ) -> Result<(), StoreError>;

    /// Drops a list so later loads report it as unavailable.
    fn remove(&mut self, list: ResultList, round: RoundNumber) -> Result<(), StoreError>;
}

/// Round summaries: one current round plus sealed history.
pub trait RoundHistoryStore: Send {
    fn current_round(&self) -> &Round;

    fn all_rounds(&self) -> &BTreeMap<RoundNumber, Round>;

    fn results_for_round(&self, round: RoundNumber) -> Result<Vec<ResultEntry>, StoreError>;

    fn payouts_for_round(&self, round: RoundNumber) -> Result<Vec<ResultEntry>, StoreError>;

    /// Past rounds are `1 ..= current - 1`.
    fn check_past_round(&self, round: RoundNumber) -> Result<(), StoreError> {
        let max = self.current_round().number.saturating_sub(1);
        if round < 1 || round > max {
            return Err(StoreError::InvalidRound { round, max });
        }
        Ok(())
    }
}

pub trait LedgerEntryStore: Send {
    /// `None` for an unknown address, distinct from a zero balance entry.
    fn lookup(&self, address: &Address) -> Option<&LedgerEntry>;
}

pub trait TermDepositRegistry: Send {
    fn list_all(&self) -> &BTreeMap<String, TermEntry>;
}
