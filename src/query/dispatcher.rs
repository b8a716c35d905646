/**
* filename : dispatcher
* description: Read-only command dispatch over the reward ledger stores.
**/

use log::{debug, warn};
use std::sync::Arc;

use crate::address::{AddressCodec, Base58AddressCodec};
use crate::config::Settings;
use crate::eligibility::RuleSchedule;
use crate::query::command::Command;
use crate::query::error::QueryError;
use crate::query::response::{
  CheckView, CurrentRoundView, HistoryRoundView, PayoutView, QueryResponse, RpcReply,
  SnapshotView, TermRewardView,
};
use crate::repository::{LedgerEntryStore, RoundHistoryStore, TermDepositRegistry};
use crate::service::RewardLedgerService;
use crate::types::RoundNumber;

pub struct QueryDispatcher {
  service: Arc<RewardLedgerService>,
  codec: Box<dyn AddressCodec>,
  rules: RuleSchedule,
  payout_start_delay: i64,
  allow_unsynced: bool,
}

impl QueryDispatcher {
  pub fn new(
    service: Arc<RewardLedgerService>,
    codec: Box<dyn AddressCodec>,
    rules: RuleSchedule,
    payout_start_delay: i64,
  ) -> Self {
    Self {
      service,
      codec,
      rules,
      payout_start_delay,
      allow_unsynced: false,
    }
  }

  pub fn from_settings(service: Arc<RewardLedgerService>, settings: &Settings) -> Self {
    let codec = Base58AddressCodec::new(settings.rewards.address_prefixes.chars().collect());
    let mut dispatcher = Self::new(
      service,
      Box::new(codec),
      RuleSchedule::new(settings.rewards.first_rule_change_round),
      settings.rewards.payout_start_delay,
    );
    dispatcher.allow_unsynced = settings.service.allow_unsynced;
    dispatcher
  }

  /// Skips the readiness check, for debugging against a lagging producer.
  pub fn allow_unsynced(mut self, allow: bool) -> Self {
    self.allow_unsynced = allow;
    self
  }

  /// Boundary entry point: every outcome becomes a wire reply.
  pub fn handle(&self, command: &str, args: &[String]) -> RpcReply {
    let outcome = self.execute(command, args);
    if let Err(e) = &outcome {
      match e {
        QueryError::Busy { .. } | QueryError::NotSynced => debug!("[Dispatcher] {} refused: {}", command, e),
        _ => warn!("[Dispatcher] {} failed: {}", command, e),
      }
    }
    RpcReply::from(outcome)
  }

  pub fn execute(&self, command: &str, args: &[String]) -> Result<QueryResponse, QueryError> {
    let command = Command::parse(command, args)?;
    self.ensure_synced()?;

    match command {
      Command::Current => self.current(),
      Command::History => self.history(),
      Command::Payouts(arg) => self.payouts(arg.as_deref()),
      Command::Snapshot(arg) => self.snapshot(arg.as_deref()),
      Command::Check(address) => self.check(&address),
      Command::TermRewards => self.term_rewards(),
    }
  }

  fn ensure_synced(&self) -> Result<(), QueryError> {
    if !self.allow_unsynced && !self.service.is_synced() {
      return Err(QueryError::NotSynced);
    }
    Ok(())
  }

  fn current(&self) -> Result<QueryResponse, QueryError> {
    let rounds = self.service.rounds().try_acquire()?;
    let current = rounds.current_round();
    if !current.is_started() {
      return Err(QueryError::NoActiveRound);
    }
    Ok(QueryResponse::Current(CurrentRoundView::from(current)))
  }

  fn history(&self) -> Result<QueryResponse, QueryError> {
    let rounds = self.service.rounds().try_acquire()?;
    let history = rounds.all_rounds();
    if history.is_empty() {
      return Err(QueryError::NoHistory);
    }
    Ok(QueryResponse::History(
      history
        .values()
        .map(|round| HistoryRoundView::new(round, self.payout_start_delay))
        .collect(),
    ))
  }

  fn payouts(&self, arg: Option<&str>) -> Result<QueryResponse, QueryError> {
    let rounds = self.service.rounds().try_acquire()?;
    let round = past_round(arg, rounds.current_round().number)?;
    let payouts = rounds.payouts_for_round(round)?;
    Ok(QueryResponse::Payouts(payouts.iter().map(PayoutView::from).collect()))
  }

  fn snapshot(&self, arg: Option<&str>) -> Result<QueryResponse, QueryError> {
    let rounds = self.service.rounds().try_acquire()?;
    let round = past_round(arg, rounds.current_round().number)?;
    let results = rounds.results_for_round(round)?;
    Ok(QueryResponse::Snapshot(results.iter().map(SnapshotView::from).collect()))
  }

  fn check(&self, input: &str) -> Result<QueryResponse, QueryError> {
    // The round guard is released before the entry guard is taken.
    let current_round = self.service.rounds().try_acquire()?.current_round().number;

    let address = self.codec.decode(input)?;

    let entries = self.service.entries().try_acquire()?;
    let entry = entries
      .lookup(&address)
      .ok_or_else(|| QueryError::AddressNotFound(address.to_string()))?;

    let eligible = self.rules.is_eligible(entry, current_round);
    Ok(QueryResponse::Check(CheckView::new(entry, eligible)))
  }

  fn term_rewards(&self) -> Result<QueryResponse, QueryError> {
    let terms = self.service.terms().try_acquire()?;
    Ok(QueryResponse::TermRewards(
      terms.list_all().values().map(TermRewardView::from).collect(),
    ))
  }
}

/// Parses a round argument against the live current round.
///
/// Any parse failure, overflow included, is reported with the valid range.
fn past_round(arg: Option<&str>, current: RoundNumber) -> Result<RoundNumber, QueryError> {
  if current == 0 {
    return Err(QueryError::NoActiveRound);
  }
  let max = current - 1;
  let invalid = || QueryError::past_round_required(max);

  let requested = arg
    .ok_or_else(invalid)?
    .trim()
    .parse::<i64>()
    .map_err(|_| invalid())?;

  if requested < 1 || requested > i64::from(max) {
    return Err(invalid());
  }
  RoundNumber::try_from(requested).map_err(|_| invalid())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn round_argument_bounds() {
    assert_eq!(past_round(Some("1"), 5), Ok(1));
    assert_eq!(past_round(Some(" 4 "), 5), Ok(4));
    for bad in ["0", "5", "6", "-1", "abc", "4x", "", "99999999999999999999"] {
      assert_eq!(
        past_round(Some(bad), 5),
        Err(QueryError::past_round_required(4)),
        "input {bad:?}"
      );
    }
    assert_eq!(past_round(None, 5), Err(QueryError::past_round_required(4)));
  }

  #[test]
  fn range_message_tracks_current_round() {
    match past_round(Some("x"), 12) {
      Err(QueryError::InvalidParameter(msg)) => assert_eq!(msg, "Past reward round required: 1 - 11"),
      other => panic!("unexpected {:?}", other),
    }
  }

  #[test]
  fn no_round_means_no_range() {
    assert_eq!(past_round(Some("1"), 0), Err(QueryError::NoActiveRound));
  }
}
