use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::Amount;

/// Decoded, opaque address identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
  pub(crate) fn new_unchecked(value: impl Into<String>) -> Self {
    Self(value.into())
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl fmt::Display for Address {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

/// One address's state within the current round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
  pub address: Address,
  pub balance: Amount,
  pub eligible_balance: Amount,
  #[serde(default)]
  pub is_node_operator: bool,
  #[serde(default)]
  pub activated: bool,
}

impl LedgerEntry {
  /// Composite eligibility: activated, not bound to a node operator, and
  /// holding a qualifying balance.
  pub fn is_eligible(&self) -> bool {
    self.activated && !self.is_node_operator && self.eligible_balance > 0
  }
}

/// Finalized outcome for a past round. `amount` is the realized payout or the
/// qualifying balance snapshot, depending on which list it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultEntry {
  pub address: Address,
  pub amount: Amount,
}

#[cfg(test)]
mod tests {
  use super::*;

  fn entry() -> LedgerEntry {
    LedgerEntry {
      address: Address::new_unchecked("Sabc"),
      balance: 10,
      eligible_balance: 10,
      is_node_operator: false,
      activated: true,
    }
  }

  #[test]
  fn composite_rule_requires_every_condition() {
    assert!(entry().is_eligible());

    let mut operator = entry();
    operator.is_node_operator = true;
    assert!(!operator.is_eligible());

    let mut inactive = entry();
    inactive.activated = false;
    assert!(!inactive.is_eligible());

    let mut empty = entry();
    empty.eligible_balance = 0;
    assert!(!empty.is_eligible());
  }
}
