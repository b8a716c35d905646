//! Eligibility rules, selected by round number.
//!
//! The verdict for a round before the configured rule-change round must
//! reproduce the legacy rule even though entries are stored the same way.

use crate::ledger::LedgerEntry;
use crate::types::RoundNumber;

pub trait EligibilityRule: Send + Sync {
    fn name(&self) -> &'static str;
    fn is_eligible(&self, entry: &LedgerEntry) -> bool;
}

/// Any qualifying balance is enough.
pub struct LegacyRule;

impl EligibilityRule for LegacyRule {
    fn name(&self) -> &'static str {
        "legacy"
    }

    fn is_eligible(&self, entry: &LedgerEntry) -> bool {
        entry.eligible_balance > 0
    }
}

/// Balance, activation and node-operator exclusion.
pub struct CompositeRule;

impl EligibilityRule for CompositeRule {
    fn name(&self) -> &'static str {
        "composite"
    }

    fn is_eligible(&self, entry: &LedgerEntry) -> bool {
        entry.is_eligible()
    }
}

/// Ordered list of rule versions keyed by the first round they apply to.
pub struct RuleSchedule {
    versions: Vec<(RoundNumber, Box<dyn EligibilityRule>)>,
}

impl RuleSchedule {
    /// Legacy rule until `first_rule_change_round`, composite from then on.
    pub fn new(first_rule_change_round: RoundNumber) -> Self {
        Self {
            versions: vec![
                (0, Box::new(LegacyRule)),
                (first_rule_change_round, Box::new(CompositeRule)),
            ],
        }
    }

    /// Adds a rule taking effect at `from_round`. Versions stay sorted.
    pub fn with_rule(mut self, from_round: RoundNumber, rule: Box<dyn EligibilityRule>) -> Self {
        let idx = self.versions.partition_point(|(start, _)| *start <= from_round);
        self.versions.insert(idx, (from_round, rule));
        self
    }

    pub fn rule_for(&self, round: RoundNumber) -> &dyn EligibilityRule {
        self.versions
            .iter()
            .rev()
            .find(|(start, _)| *start <= round)
            .map(|(_, rule)| rule.as_ref())
            .unwrap_or(&LegacyRule)
    }

    pub fn is_eligible(&self, entry: &LedgerEntry, current_round: RoundNumber) -> bool {
        self.rule_for(current_round).is_eligible(entry)
    }
}

/// Single-threshold form of [`RuleSchedule::is_eligible`].
pub fn is_eligible(
    entry: &LedgerEntry,
    current_round: RoundNumber,
    first_rule_change_round: RoundNumber,
) -> bool {
    if current_round < first_rule_change_round {
        LegacyRule.is_eligible(entry)
    } else {
        CompositeRule.is_eligible(entry)
    }
}
