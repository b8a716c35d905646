//! Non-blocking store guards and the producer readiness flag.
//!
//! Readers only ever try to acquire: contention returns [`Busy`] at once.
//! The producer is the only side allowed to wait for a guard.

use log::debug;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::{Mutex, MutexGuard};

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{store} is busy")]
pub struct Busy {
    pub store: &'static str,
}

pub struct StoreGuard<T> {
    name: &'static str,
    inner: Mutex<T>,
}

impl<T> StoreGuard<T> {
    pub fn new(name: &'static str, value: T) -> Self {
        Self {
            name,
            inner: Mutex::new(value),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Immediate acquisition for readers.
    pub fn try_acquire(&self) -> Result<MutexGuard<'_, T>, Busy> {
        self.inner.try_lock().map_err(|_| {
            debug!("[Guard] {} contended, refusing reader", self.name);
            Busy { store: self.name }
        })
    }

    /// Waiting acquisition, reserved for the producer.
    pub async fn acquire_for_write(&self) -> MutexGuard<'_, T> {
        self.inner.lock().await
    }
}

/// Whether the ledger view is caught up with the network.
#[derive(Debug, Default)]
pub struct SyncState {
    synced: AtomicBool,
}

impl SyncState {
    pub fn is_synced(&self) -> bool {
        self.synced.load(Ordering::Acquire)
    }

    pub fn set_synced(&self, synced: bool) {
        self.synced.store(synced, Ordering::Release);
    }
}
