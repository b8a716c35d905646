use serde::{Deserialize, Serialize};

use super::entry::Address;
use crate::types::Amount;

/// Lock duration class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TermTier {
  OneYear,
  TwoYears,
  ThreeYears,
}

impl TermTier {
  pub fn years(&self) -> u8 {
    match self {
      TermTier::OneYear => 1,
      TermTier::TwoYears => 2,
      TermTier::ThreeYears => 3,
    }
  }
}

/// Fixed-term locked deposit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermEntry {
  pub deposit_tx_id: String,
  pub address: Address,
  pub balance: Amount,
  pub tier: TermTier,
  /// Annual yield as a fraction.
  pub annual_percent: f64,
  /// Unix seconds.
  pub expiry_time: i64,
}

impl TermEntry {
  pub fn level(&self) -> u8 {
    self.tier.years()
  }

  pub fn is_expired(&self, now: i64) -> bool {
    now >= self.expiry_time
  }
}
