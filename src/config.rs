use serde::Deserialize;

use crate::types::RoundNumber;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Settings {
  #[serde(default)]
  pub rewards: RewardsSettings,
  #[serde(default)]
  pub producer: ProducerSettings,
  #[serde(default)]
  pub service: ServiceSettings,
}

/// Network parameters consumed read-only by the query core.
#[derive(Debug, Deserialize, Clone)]
pub struct RewardsSettings {
  /// Blocks between the end of a round and its first payout block.
  #[serde(default = "default_payout_start_delay")]
  pub payout_start_delay: i64,
  /// First round evaluated with the composite eligibility rule.
  #[serde(default = "default_first_rule_change_round")]
  pub first_rule_change_round: RoundNumber,
  /// Every character is an accepted leading address character.
  #[serde(default = "default_address_prefixes")]
  pub address_prefixes: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ProducerSettings {
  #[serde(default = "default_snapshot_path")]
  pub snapshot_path: String,
  #[serde(default = "default_interval_secs")]
  pub interval_secs: u64,
  #[serde(default)]
  pub archive_path: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ServiceSettings {
  /// Serve queries even while the producer reports the ledger as behind.
  #[serde(default)]
  pub allow_unsynced: bool,
}

fn default_payout_start_delay() -> i64 {
  200
}

fn default_first_rule_change_round() -> RoundNumber {
  43
}

fn default_address_prefixes() -> String {
  "S".to_string()
}

fn default_snapshot_path() -> String {
  "./ledger-snapshot.json".to_string()
}

fn default_interval_secs() -> u64 {
  30
}

impl Default for RewardsSettings {
  fn default() -> Self {
    Self {
      payout_start_delay: default_payout_start_delay(),
      first_rule_change_round: default_first_rule_change_round(),
      address_prefixes: default_address_prefixes(),
    }
  }
}

impl Default for ProducerSettings {
  fn default() -> Self {
    Self {
      snapshot_path: default_snapshot_path(),
      interval_secs: default_interval_secs(),
      archive_path: None,
    }
  }
}

impl Settings {
  pub fn new() -> Result<Self, config::ConfigError> {
    Self::from_path("./config.toml")
  }

  pub fn from_path(path: &str) -> Result<Self, config::ConfigError> {
    let env_prefix = "REWARDS"; // e.g. REWARDS_SERVICE__ALLOW_UNSYNCED=true

    let builder = config::Config::builder()
      .add_source(config::File::with_name(path).required(false))
      .add_source(
        config::Environment::with_prefix(env_prefix)
          .prefix_separator("_")
          .separator("__"),
      );

    builder.build()?.try_deserialize()
  }
}
