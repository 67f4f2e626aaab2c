//! Metrics collection for the ledger

use std::sync::atomic::{AtomicU64, Ordering};

/// Ledger counters
#[derive(Debug, Default)]
pub struct Metrics {
    /// Total blocks produced (genesis excluded)
    pub blocks_produced: AtomicU64,

    /// Total transactions included in blocks
    pub transactions_included: AtomicU64,

    /// Total transactions rejected by a module
    pub transactions_rejected: AtomicU64,

    /// Total transactions dropped on a store fault
    pub transactions_faulted: AtomicU64,

    /// Total transactions accepted into the pending pool
    pub transactions_submitted: AtomicU64,
}

/// Point-in-time copy of [`Metrics`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub blocks_produced: u64,
    pub transactions_included: u64,
    pub transactions_rejected: u64,
    pub transactions_faulted: u64,
    pub transactions_submitted: u64,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_submitted(&self) {
        self.transactions_submitted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_block_produced(&self, included: usize, rejected: usize, faulted: usize) {
        self.blocks_produced.fetch_add(1, Ordering::Relaxed);
        self.transactions_included
            .fetch_add(included as u64, Ordering::Relaxed);
        self.transactions_rejected
            .fetch_add(rejected as u64, Ordering::Relaxed);
        self.transactions_faulted
            .fetch_add(faulted as u64, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            blocks_produced: self.blocks_produced.load(Ordering::Relaxed),
            transactions_included: self.transactions_included.load(Ordering::Relaxed),
            transactions_rejected: self.transactions_rejected.load(Ordering::Relaxed),
            transactions_faulted: self.transactions_faulted.load(Ordering::Relaxed),
            transactions_submitted: self.transactions_submitted.load(Ordering::Relaxed),
        }
    }
}
