/**
* filename : round
* description: Reward cycle summary and its payout schedule.
**/

use serde::{Deserialize, Serialize};

use super::entry::ResultEntry;
use crate::types::{Amount, RoundNumber};

/// How a round's payouts are spread over blocks once they have been computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoutShape {
  pub payee_count: u64,
  /// Payees paid per payout block.
  pub payees_per_block: u64,
  /// Blocks between two payout blocks.
  pub block_interval: u64,
}

impl PayoutShape {
  /// Returns `None` when there is nobody to pay or no per-block capacity.
  pub fn new(payee_count: u64, payees_per_block: u64, block_interval: u64) -> Option<Self> {
    if payee_count == 0 || payees_per_block == 0 {
      return None;
    }
    Some(Self {
      payee_count,
      payees_per_block,
      block_interval,
    })
  }

  /// Number of payout blocks needed for every payee.
  pub fn reward_blocks(&self) -> u64 {
    self.payee_count.div_ceil(self.payees_per_block)
  }

  /// Payees left over for the final payout block.
  pub fn last_block_payees(&self) -> u64 {
    self.payee_count % self.payees_per_block
  }
}

/// Derived payout block schedule for a sealed round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayoutSchedule {
  pub first_block: i64,
  pub total_blocks: u64,
  pub last_block: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Round {
  pub number: RoundNumber,
  pub start_block_height: i64,
  pub start_block_time: i64,
  pub end_block_height: i64,
  pub end_block_time: i64,
  pub eligible_entries: i64,
  pub eligible_balance: Amount,
  pub disqualified_entries: i64,
  pub disqualified_balance: Amount,
  pub reward_budget: Amount,
  /// Per-cycle yield as a fraction.
  pub percent_rate: f64,
  #[serde(default)]
  pub payouts: Option<PayoutShape>,
}

impl Default for Round {
  fn default() -> Self {
    Self {
      number: 0,
      start_block_height: 0,
      start_block_time: 0,
      end_block_height: 0,
      end_block_time: 0,
      eligible_entries: 0,
      eligible_balance: 0,
      disqualified_entries: 0,
      disqualified_balance: 0,
      reward_budget: 0,
      percent_rate: 0.0,
      payouts: None,
    }
  }
}

impl Round {
  pub fn is_started(&self) -> bool {
    self.number != 0
  }

  pub fn payee_count(&self) -> u64 {
    self.payouts.map(|p| p.payee_count).unwrap_or(0)
  }

  /// Raw difference, may be negative while the round is under construction.
  pub fn net_eligible_entries(&self) -> i64 {
    self.eligible_entries - self.disqualified_entries
  }

  /// Raw difference, may be negative while the round is under construction.
  pub fn net_eligible_balance(&self) -> Amount {
    self.eligible_balance - self.disqualified_balance
  }

  /// Checks the counters every sealed round must satisfy.
  pub fn validate(&self) -> Result<(), String> {
    if self.eligible_entries < self.disqualified_entries {
      return Err(format!(
        "round {}: eligible entries {} < disqualified entries {}",
        self.number, self.eligible_entries, self.disqualified_entries
      ));
    }
    if self.eligible_balance < self.disqualified_balance {
      return Err(format!(
        "round {}: eligible balance {} < disqualified balance {}",
        self.number, self.eligible_balance, self.disqualified_balance
      ));
    }
    if let Some(shape) = self.payouts {
      if shape.payee_count == 0 || shape.payees_per_block == 0 {
        return Err(format!("round {}: empty payout shape", self.number));
      }
    }
    Ok(())
  }

  /// Payout blocks for this round, `None` if no payees were eligible.
  pub fn payout_schedule(&self, payout_start_delay: i64) -> Option<PayoutSchedule> {
    let shape = self.payouts?;
    let first_block = self.end_block_height + payout_start_delay;
    let total_blocks = shape.reward_blocks();
    let last_block = first_block + (total_blocks as i64 - 1) * shape.block_interval as i64;
    Some(PayoutSchedule {
      first_block,
      total_blocks,
      last_block,
    })
  }
}

/// A finished round with its per-round lists as published by the producer.
///
/// A list left out stays `None` and is never archived, so reads of it fail
/// instead of coming back empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SealedRound {
  pub round: Round,
  #[serde(default)]
  pub snapshot: Option<Vec<ResultEntry>>,
  #[serde(default)]
  pub payouts: Option<Vec<ResultEntry>>,
}
