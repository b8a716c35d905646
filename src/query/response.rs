use rust_decimal::Decimal;
use serde::Serialize;

use crate::ledger::{LedgerEntry, ResultEntry, Round, TermEntry};
use crate::query::error::RpcErrorBody;
use crate::types::{format_amount, format_percent, RoundNumber};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentRoundView {
  pub rewards_cycle: RoundNumber,
  pub start_blockheight: i64,
  pub start_blocktime: i64,
  pub end_blockheight: i64,
  pub end_blocktime: i64,
  pub eligible_addresses: i64,
  pub eligible_smart: Decimal,
  pub disqualified_addresses: i64,
  pub disqualified_smart: Decimal,
  pub estimated_rewards: Decimal,
  pub estimated_percent: f64,
}

impl From<&Round> for CurrentRoundView {
  /// Differences are shown as they are, negative values included.
  fn from(round: &Round) -> Self {
    Self {
      rewards_cycle: round.number,
      start_blockheight: round.start_block_height,
      start_blocktime: round.start_block_time,
      end_blockheight: round.end_block_height,
      end_blocktime: round.end_block_time,
      eligible_addresses: round.net_eligible_entries(),
      eligible_smart: format_amount(round.net_eligible_balance()),
      disqualified_addresses: round.disqualified_entries,
      disqualified_smart: format_amount(round.disqualified_balance),
      estimated_rewards: format_amount(round.reward_budget),
      estimated_percent: format_percent(round.percent_rate),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledPayouts {
  pub first_block: i64,
  pub total_blocks: u64,
  pub last_block: i64,
  pub total_payees: u64,
  pub block_payees: u64,
  pub last_block_payees: u64,
  pub block_interval: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoPayees {
  #[serde(rename = "None")]
  pub none: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PayoutScheduleView {
  Scheduled(ScheduledPayouts),
  NoPayees(NoPayees),
}

impl PayoutScheduleView {
  pub fn for_round(round: &Round, payout_start_delay: i64) -> Self {
    match (round.payouts, round.payout_schedule(payout_start_delay)) {
      (Some(shape), Some(schedule)) => PayoutScheduleView::Scheduled(ScheduledPayouts {
        first_block: schedule.first_block,
        total_blocks: schedule.total_blocks,
        last_block: schedule.last_block,
        total_payees: shape.payee_count,
        block_payees: shape.payees_per_block,
        last_block_payees: shape.last_block_payees(),
        block_interval: shape.block_interval,
      }),
      _ => PayoutScheduleView::NoPayees(NoPayees {
        none: "No payees were eligible for this round",
      }),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryRoundView {
  pub rewards_cycle: RoundNumber,
  pub start_blockheight: i64,
  pub start_blocktime: i64,
  pub end_blockheight: i64,
  pub end_blocktime: i64,
  pub eligible_addresses: i64,
  pub eligible_smart: Decimal,
  pub disqualified_addresses: i64,
  pub disqualified_smart: Decimal,
  pub rewards: Decimal,
  pub percent: f64,
  pub payouts: PayoutScheduleView,
}

impl HistoryRoundView {
  /// Differences are clamped at zero for display.
  pub fn new(round: &Round, payout_start_delay: i64) -> Self {
    Self {
      rewards_cycle: round.number,
      start_blockheight: round.start_block_height,
      start_blocktime: round.start_block_time,
      end_blockheight: round.end_block_height,
      end_blocktime: round.end_block_time,
      eligible_addresses: round.net_eligible_entries().max(0),
      eligible_smart: format_amount(round.net_eligible_balance().max(0)),
      disqualified_addresses: round.disqualified_entries,
      disqualified_smart: format_amount(round.disqualified_balance),
      rewards: format_amount(round.reward_budget),
      percent: format_percent(round.percent_rate),
      payouts: PayoutScheduleView::for_round(round, payout_start_delay),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PayoutView {
  pub address: String,
  pub reward: Decimal,
}

impl From<&ResultEntry> for PayoutView {
  fn from(entry: &ResultEntry) -> Self {
    Self {
      address: entry.address.to_string(),
      reward: format_amount(entry.amount),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnapshotView {
  pub address: String,
  pub balance: Decimal,
}

impl From<&ResultEntry> for SnapshotView {
  fn from(entry: &ResultEntry) -> Self {
    Self {
      address: entry.address.to_string(),
      balance: format_amount(entry.amount),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckView {
  pub address: String,
  pub balance: Decimal,
  pub balance_eligible: Decimal,
  pub is_smartnode: bool,
  pub activated: bool,
  pub eligible: bool,
}

impl CheckView {
  pub fn new(entry: &LedgerEntry, eligible: bool) -> Self {
    Self {
      address: entry.address.to_string(),
      balance: format_amount(entry.balance),
      balance_eligible: format_amount(entry.eligible_balance),
      is_smartnode: entry.is_node_operator,
      activated: entry.activated,
      eligible,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TermRewardView {
  pub address: String,
  pub tx_hash: String,
  pub balance: Decimal,
  /// Lock duration in years.
  pub level: u8,
  /// Annual return in percent.
  pub percent: f64,
  pub expires: i64,
}

impl From<&TermEntry> for TermRewardView {
  fn from(entry: &TermEntry) -> Self {
    Self {
      address: entry.address.to_string(),
      tx_hash: entry.deposit_tx_id.clone(),
      balance: format_amount(entry.balance),
      level: entry.level(),
      percent: format_percent(entry.annual_percent),
      expires: entry.expiry_time,
    }
  }
}

/// Successful query result. Serializes as the bare object or array.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum QueryResponse {
  Current(CurrentRoundView),
  History(Vec<HistoryRoundView>),
  Payouts(Vec<PayoutView>),
  Snapshot(Vec<SnapshotView>),
  Check(CheckView),
  TermRewards(Vec<TermRewardView>),
}

/// Wire reply: exactly one of `result` or `error` is present.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RpcReply {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub result: Option<QueryResponse>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub error: Option<RpcErrorBody>,
}

impl From<Result<QueryResponse, crate::query::QueryError>> for RpcReply {
  fn from(outcome: Result<QueryResponse, crate::query::QueryError>) -> Self {
    match outcome {
      Ok(result) => Self {
        result: Some(result),
        error: None,
      },
      Err(err) => Self {
        result: None,
        error: Some(RpcErrorBody::from(&err)),
      },
    }
  }
}
