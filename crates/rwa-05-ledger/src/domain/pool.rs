//! # Pending Pool
//!
//! FIFO queue of submitted transactions. Nothing is validated at submission:
//! every check happens when the transaction is routed during block
//! production.

use crate::error::{LedgerError, Result};
use shared_types::Transaction;
use std::collections::VecDeque;

#[derive(Debug, Clone, Default)]
pub struct PendingPool {
    queue: VecDeque<Transaction>,
    capacity: Option<usize>,
}

impl PendingPool {
    /// Unbounded pool.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: Option<usize>) -> Self {
        Self {
            queue: VecDeque::new(),
            capacity,
        }
    }

    pub fn submit(&mut self, tx: Transaction) -> Result<()> {
        if let Some(capacity) = self.capacity {
            if self.queue.len() >= capacity {
                return Err(LedgerError::PoolFull { capacity });
            }
        }
        self.queue.push_back(tx);
        Ok(())
    }

    /// Take every pending transaction in submission order, leaving the pool
    /// empty.
    pub fn drain(&mut self) -> Vec<Transaction> {
        self.queue.drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
