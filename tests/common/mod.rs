#![allow(dead_code)]

use reward_ledger::address::Base58AddressCodec;
use reward_ledger::eligibility::RuleSchedule;
use reward_ledger::query::QueryDispatcher;
use reward_ledger::service::RewardLedgerService;
use reward_ledger::snapshot::{apply_snapshot, LedgerSnapshot};
use serde_json::json;
use std::sync::Arc;

pub const HOLDER: &str = "SXun9XDHLdBhG4Yd1ueZfLfRpC9kZgwT1b";
pub const OPERATOR: &str = "SNxFyszmGEAa2n2kQbzw7gguHa5a4FC7Ay";
pub const DORMANT: &str = "Sg3kQKLtkqX4GnBLhrPoH9nnG3zH8UsF9a";
pub const UNKNOWN: &str = "SQbUzWh2wRvLNcyy6Ppyb3QGWmMZdj9Wt7";

pub const PAYOUT_START_DELAY: i64 = 200;
pub const NOW: i64 = 1_700_000_000;

pub fn snapshot_json() -> serde_json::Value {
  json!({
    "synced": true,
    "current_round": {
      "number": 5,
      "start_block_height": 5000,
      "start_block_time": 1699000000,
      "end_block_height": 6000,
      "end_block_time": 1699600000,
      "eligible_entries": 100,
      "eligible_balance": 10000000000i64,
      "disqualified_entries": 10,
      "disqualified_balance": 0,
      "reward_budget": 500000,
      "percent_rate": 0.0125
    },
    "history": [
      {
        "round": {
          "number": 1,
          "start_block_height": 1000, "start_block_time": 1690000000,
          "end_block_height": 2000, "end_block_time": 1690600000,
          "eligible_entries": 3, "eligible_balance": 600000000,
          "disqualified_entries": 3, "disqualified_balance": 600000000,
          "reward_budget": 0, "percent_rate": 0.0
        },
        "snapshot": [],
        "payouts": []
      },
      {
        "round": {
          "number": 2,
          "start_block_height": 2000, "start_block_time": 1690600000,
          "end_block_height": 3000, "end_block_time": 1691200000,
          "eligible_entries": 3, "eligible_balance": 900000000,
          "disqualified_entries": 1, "disqualified_balance": 300000000,
          "reward_budget": 15000000, "percent_rate": 0.025,
          "payouts": { "payee_count": 250, "payees_per_block": 100, "block_interval": 2 }
        },
        "snapshot": [
          { "address": DORMANT, "amount": 300000000 },
          { "address": HOLDER, "amount": 300000000 },
          { "address": OPERATOR, "amount": 300000000 }
        ],
        "payouts": [
          { "address": DORMANT, "amount": 7500000 },
          { "address": HOLDER, "amount": 7500000 }
        ]
      },
      {
        "round": {
          "number": 4,
          "start_block_height": 4000, "start_block_time": 1692000000,
          "end_block_height": 5000, "end_block_time": 1692600000,
          "eligible_entries": 2, "eligible_balance": 200000000,
          "disqualified_entries": 0, "disqualified_balance": 0,
          "reward_budget": 1000000, "percent_rate": 0.005
        }
      }
    ],
    "entries": [
      { "address": HOLDER, "balance": 250000000, "eligible_balance": 200000000, "activated": true },
      { "address": OPERATOR, "balance": 100000000000i64, "eligible_balance": 100000000000i64,
        "is_node_operator": true, "activated": true },
      { "address": DORMANT, "balance": 0, "eligible_balance": 0 }
    ],
    "terms": [
      { "deposit_tx_id": "b7", "address": HOLDER, "balance": 100000000000i64,
        "tier": "two_years", "annual_percent": 0.3, "expiry_time": 1760000000 },
      { "deposit_tx_id": "a1", "address": OPERATOR, "balance": 50000000000i64,
        "tier": "one_year", "annual_percent": 0.2, "expiry_time": 1710000000 },
      { "deposit_tx_id": "ff", "address": DORMANT, "balance": 1,
        "tier": "three_years", "annual_percent": 0.4, "expiry_time": 1600000000 }
    ]
  })
}

pub fn snapshot() -> LedgerSnapshot {
  serde_json::from_value(snapshot_json()).unwrap()
}

pub fn dispatcher(service: Arc<RewardLedgerService>, first_rule_change_round: u32) -> QueryDispatcher {
  QueryDispatcher::new(
    service,
    Box::new(Base58AddressCodec::new(vec!['S'])),
    RuleSchedule::new(first_rule_change_round),
    PAYOUT_START_DELAY,
  )
}

pub async fn loaded_service() -> Arc<RewardLedgerService> {
  let service = Arc::new(RewardLedgerService::in_memory());
  apply_snapshot(&service, snapshot(), NOW).await.unwrap();
  service
}

pub fn args(values: &[&str]) -> Vec<String> {
  values.iter().map(|v| v.to_string()).collect()
}
