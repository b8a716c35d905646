use rust_decimal::Decimal;

// ====== Ledger scalar aliases ======

/// Integer smallest-unit amount.
pub type Amount = i64;

/// Reward cycle identifier. `0` means no cycle has started yet.
pub type RoundNumber = u32;

/// Smallest units per whole coin.
pub const COIN: Amount = 100_000_000;

/// Number of fractional digits carried by `COIN`.
pub const COIN_DECIMALS: u32 = 8;

// ====== Rendering helpers ======

/// Renders an amount as a fixed-scale decimal of the base unit.
///
/// The whole part comes from integer division and the fraction from the
/// remainder, so large balances never lose precision.
pub fn format_amount(amount: Amount) -> Decimal {
  let whole = Decimal::from(amount / COIN);
  let fraction = Decimal::new(amount % COIN, COIN_DECIMALS);
  let mut rendered = whole + fraction;
  rendered.rescale(COIN_DECIMALS);
  rendered
}

/// Fractional rate to display percent.
pub fn format_percent(rate: f64) -> f64 {
  rate * 100.0
}

// ====== Unified Error Type ======
#[derive(Debug, thiserror::Error)]
pub enum AppError {
  #[error("Configuration error: {0}")]
  Config(String),

  #[error("Snapshot error: {0}")]
  Snapshot(String),

  #[error("Task join error: {0}")]
  JoinError(#[from] tokio::task::JoinError),

  #[error("Initialization error: {0}")]
  Initialization(String),

  #[error("Storage error: {0}")]
  Storage(String),
}

// ====== Error Conversions (From impls) ======

impl From<config::ConfigError> for AppError {
  fn from(err: config::ConfigError) -> Self {
    AppError::Config(err.to_string())
  }
}

impl From<std::io::Error> for AppError {
  fn from(err: std::io::Error) -> Self {
    AppError::Initialization(format!("IO error: {}", err))
  }
}

impl From<serde_json::Error> for AppError {
  fn from(err: serde_json::Error) -> Self {
    AppError::Snapshot(format!("JSON parse error: {}", err))
  }
}
