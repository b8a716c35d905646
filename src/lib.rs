//! Read path over a round-based reward ledger.
//!
//! A background producer fills the stores in [`service::RewardLedgerService`];
//! [`query::QueryDispatcher`] answers point-in-time and historical queries
//! without ever waiting on the producer's locks.

pub mod address;
pub mod config;
pub mod eligibility;
pub mod guard;
pub mod ledger;
pub mod query;
pub mod repository;
pub mod service;
pub mod shutdown;
pub mod snapshot;
pub mod tasks;
pub mod types;
