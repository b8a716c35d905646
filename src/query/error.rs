use serde::Serialize;

use crate::address::InvalidAddress;
use crate::guard::Busy;
use crate::repository::StoreError;
use crate::types::RoundNumber;

/// JSON-RPC style codes, matching what node clients already handle.
pub const RPC_INVALID_ADDRESS: i32 = -5;
pub const RPC_INVALID_PARAMETER: i32 = -8;
pub const RPC_DATABASE_ERROR: i32 = -20;

/// Every way a query can fail. Each request ends in exactly one of these or a
/// full result.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
  #[error("Rewards database is not up to date.")]
  NotSynced,

  #[error("Rewards database is busy ({store}). Try it again!")]
  Busy { store: &'static str },

  #[error("No active reward round available yet.")]
  NoActiveRound,

  #[error("No finished reward round available yet.")]
  NoHistory,

  #[error("{0}")]
  InvalidParameter(String),

  #[error("Invalid address provided: {0}")]
  InvalidAddress(String),

  #[error("Couldn't find this address in the database: {0}")]
  AddressNotFound(String),

  #[error("Couldn't fetch the list from the database: {0}")]
  StorageUnavailable(String),
}

impl QueryError {
  pub fn category(&self) -> &'static str {
    match self {
      QueryError::NotSynced => "not_synced",
      QueryError::Busy { .. } => "busy",
      QueryError::NoActiveRound => "no_active_round",
      QueryError::NoHistory => "no_history",
      QueryError::InvalidParameter(_) => "invalid_parameter",
      QueryError::InvalidAddress(_) => "invalid_address",
      QueryError::AddressNotFound(_) => "address_not_found",
      QueryError::StorageUnavailable(_) => "storage_unavailable",
    }
  }

  pub fn code(&self) -> i32 {
    match self {
      QueryError::InvalidParameter(_) => RPC_INVALID_PARAMETER,
      QueryError::InvalidAddress(_) => RPC_INVALID_ADDRESS,
      _ => RPC_DATABASE_ERROR,
    }
  }

  /// Range error for round arguments, built from the live current round.
  pub fn past_round_required(max: RoundNumber) -> Self {
    QueryError::InvalidParameter(format!("Past reward round required: 1 - {}", max))
  }
}

impl From<Busy> for QueryError {
  fn from(err: Busy) -> Self {
    QueryError::Busy { store: err.store }
  }
}

impl From<InvalidAddress> for QueryError {
  fn from(err: InvalidAddress) -> Self {
    QueryError::InvalidAddress(err.0)
  }
}

impl From<StoreError> for QueryError {
  fn from(err: StoreError) -> Self {
    match err {
      StoreError::InvalidRound { max, .. } => QueryError::past_round_required(max),
      StoreError::Unavailable(msg) => QueryError::StorageUnavailable(msg),
      StoreError::InvariantViolation(msg) => QueryError::StorageUnavailable(msg),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RpcErrorBody {
  pub code: i32,
  pub category: &'static str,
  pub message: String,
}

impl From<&QueryError> for RpcErrorBody {
  fn from(err: &QueryError) -> Self {
    Self {
      code: err.code(),
      category: err.category(),
      message: err.to_string(),
    }
  }
}
